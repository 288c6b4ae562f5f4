use yew::prelude::*;

use crate::info::Readout;

#[derive(Properties, PartialEq, Clone)]
pub struct InfoPanelProps {
    pub readout: Readout,
}

#[function_component]
pub fn InfoPanel(props: &InfoPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:10px 14px; max-width:360px; display:flex; flex-direction:column; gap:6px; font-size:14px;">
            { for props.readout.rows().into_iter().map(|(label, value)| html! {
                <div style={row_style}>
                    <span style={label_style}>{ label }</span>
                    <span style={value_style}>{ value.to_string() }</span>
                </div>
            }) }
        </div>
    }
}

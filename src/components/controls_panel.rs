use yew::prelude::*;

use crate::model::CircleColor;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub current: CircleColor,
    pub can_undo: bool,
    pub on_select_color: Callback<CircleColor>,
    pub on_undo: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let color_button = |color: CircleColor, label: &'static str, swatch: &'static str| {
        let cb = props.on_select_color.clone();
        let onclick = Callback::from(move |_| cb.emit(color));
        let border = if props.current == color { "2px solid #58a6ff" } else { "1px solid #30363d" };
        html! {
            <button {onclick} data-color={color.token()} style={format!("display:flex; align-items:center; gap:6px; padding:6px 10px; border:{border}; border-radius:6px;")}>
                <span style={format!("display:inline-block; width:14px; height:14px; border-radius:50%; background:{swatch};")}></span>
                { label }
            </button>
        }
    };
    let undo_cb = {
        let cb = props.on_undo.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; flex-wrap:wrap; gap:8px; align-items:center;">
        { color_button(CircleColor::SelfColor, "Self (yellow)", "rgba(255, 255, 0, 0.8)") }
        { color_button(CircleColor::NatureColor, "Nature (green)", "rgba(0, 255, 0, 0.8)") }
        <button onclick={undo_cb} disabled={!props.can_undo}>{"Undo"}</button>
        <button onclick={reset_cb} disabled={!props.can_undo}>{"Reset"}</button>
    </div>}
}

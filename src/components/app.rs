use yew::prelude::*;

use super::diagram_view::DiagramView;
use crate::config::EditorConfig;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| EditorConfig::load());
    html! { <DiagramView config={config} /> }
}

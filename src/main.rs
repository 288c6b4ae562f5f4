mod components;
mod config;
mod geometry;
mod info;
mod model;
mod render;
mod state;
mod util;

use components::app::App;

fn main() {
    util::init_logging();
    log::info!("two-circle editor starting");
    yew::Renderer::<App>::new().render();
}

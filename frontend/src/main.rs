use crate::app::App;
use crate::components::forms::install_unload_guard;

mod app;
mod components;

fn main() {
    install_unload_guard();
    yew::Renderer::<App>::new().render();
}

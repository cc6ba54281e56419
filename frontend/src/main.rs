use crate::app::App;

mod api;
mod app;
mod components;
mod events;
mod sequence;
mod view_model;
mod widgets;

fn main() {
    yew::Renderer::<App>::new().render();
}

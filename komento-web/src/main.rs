mod api;
mod ui;

lazy_static::lazy_static! {
    pub static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// Where the comments backend lives. `komento-mock-server` serves this
/// address during development.
pub const API_BASE: &str = "http://localhost:5001";

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}

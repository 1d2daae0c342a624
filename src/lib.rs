use wasm_bindgen::prelude::*;

mod app;
mod components;
mod download;
mod intake;
mod store;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Surface panics in the browser console instead of an opaque trap.
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}

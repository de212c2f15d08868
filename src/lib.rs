/// Tab Counter - Browser extension tracking open-tab counts over time
/// Built with Rust + WASM + Yew

pub mod elapsed;
pub mod error;
pub mod history;
mod recorder;
pub mod storage;
pub mod tab_data;
pub mod trend;
pub mod ui;
pub mod view;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the relative time label for JavaScript access
#[wasm_bindgen]
pub fn format_elapsed(seconds: u32) -> String {
    elapsed::format_elapsed(seconds as u64)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start recording tab counts from the background context
#[wasm_bindgen]
pub fn start_recorder() {
    recorder::start();
}

//! Portico: a single-page portfolio with a viewport-driven navigation
//! tracker, compiled to WebAssembly.
//!
//! The static markup ships in `site/`; this crate mounts the tracker on the
//! portfolio route, leaves the case-study pages alone, and drives the
//! navigation chrome from the core's view models.

use log::info;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

mod routes;
mod shell;
mod site;

use routes::Route;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| String::from("/"));

    match Route::from_path(&path) {
        Route::Portfolio => shell::mount(window, document)?,
        Route::CaseStudy(study) => {
            info!("shell: static case-study page {study:?}, tracker not mounted");
        }
    }

    Ok(())
}

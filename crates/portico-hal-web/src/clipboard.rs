//! Fire-and-forget clipboard writes.

use log::debug;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Window;

/// Write `text` to the platform clipboard. `on_copied` runs only once the
/// browser confirms the write; a rejected write is logged and dropped.
pub fn copy_text<F>(window: &Window, text: &'static str, on_copied: F)
where
    F: FnOnce() + 'static,
{
    let promise = window.navigator().clipboard().write_text(text);

    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => on_copied(),
            Err(_) => debug!("clipboard: write rejected"),
        }
    });
}

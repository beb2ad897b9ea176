// crates/folio-app/src/frame.rs
// requestAnimationFrame scheduler for the smoothing loops

use folio_core::motion::{FrameId, FrameScheduler};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
        let window = web_sys::window()?;
        let closure = Closure::once_into_js(move || callback());
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, id: FrameId) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

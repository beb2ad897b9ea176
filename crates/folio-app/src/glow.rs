// crates/folio-app/src/glow.rs
// Cursor-following glow bound to a component's lifetime

use std::rc::Rc;

use folio_core::motion::{LatestPointer, Point, Smoother, SmoothingLoop};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::frame::RafScheduler;

#[derive(Clone, Copy)]
pub struct Glow {
    position: ReadSignal<Point>,
    pointer: StoredValue<LatestPointer, LocalStorage>,
}

/// Start a smoothing loop for the calling component. The loop stops when the
/// component's owner is cleaned up.
pub fn use_glow(damping: f64) -> Glow {
    let (position, set_position) = signal(Point::default());
    let pointer = LatestPointer::default();

    let smoothing = SmoothingLoop::start(
        Rc::new(RafScheduler),
        pointer.clone(),
        Smoother::new(damping, Point::default()),
        move |p| set_position.set(p),
    );
    let smoothing = StoredValue::new_local(smoothing);
    on_cleanup(move || {
        smoothing.try_with_value(SmoothingLoop::stop);
    });

    Glow {
        position,
        pointer: StoredValue::new_local(pointer),
    }
}

impl Glow {
    /// Record the pointer relative to the element the handler is attached to
    pub fn track(&self, ev: &MouseEvent) {
        let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let local = client.offset_from(Point::new(rect.left(), rect.top()));
        self.pointer.with_value(|p| p.set(local));
    }

    /// Inline position for a glow of the given radius, centred on the smoothed point
    pub fn style(&self, radius: f64) -> String {
        let p = self.position.get();
        format!("left:{}px;top:{}px;transition:none", p.x - radius, p.y - radius)
    }
}

// crates/folio-core/src/motion.rs
// Cursor-following glow: exponential smoothing driven by a cancellable frame loop

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point expressed relative to `origin`
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Moves a displayed coordinate a fixed fraction of the way toward its target
/// on every step.
#[derive(Debug, Clone)]
pub struct Smoother {
    damping: f64,
    current: Point,
}

impl Smoother {
    /// `damping` is clamped to `(0, 1]`; 1 jumps straight to the target
    pub fn new(damping: f64, start: Point) -> Self {
        let damping = if damping.is_finite() { damping.clamp(f64::EPSILON, 1.0) } else { 1.0 };
        Self { damping, current: start }
    }

    pub fn step(&mut self, target: Point) -> Point {
        self.current.x += (target.x - self.current.x) * self.damping;
        self.current.y += (target.y - self.current.y) * self.damping;
        self.current
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }
}

/// Latest raw pointer sample. Written by the pointer handler, read by the
/// frame loop; setting it never reschedules anything.
#[derive(Debug, Clone, Default)]
pub struct LatestPointer(Rc<Cell<Point>>);

impl LatestPointer {
    pub fn new(initial: Point) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    pub fn set(&self, point: Point) {
        self.0.set(point);
    }

    pub fn get(&self) -> Point {
        self.0.get()
    }
}

// ============================================================================
// Frame loop
// ============================================================================

/// Handle returned by a scheduler for a pending frame callback
pub type FrameId = i32;

/// One-shot per-frame callback scheduling (`requestAnimationFrame` in the
/// browser).
pub trait FrameScheduler {
    /// Queue `callback` for the next frame. `None` if no frame source exists.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId>;
    fn cancel(&self, id: FrameId);
}

struct LoopInner {
    scheduler: Rc<dyn FrameScheduler>,
    pointer: LatestPointer,
    smoother: RefCell<Smoother>,
    on_frame: RefCell<Box<dyn FnMut(Point)>>,
    pending: Cell<Option<FrameId>>,
    stopped: Cell<bool>,
}

/// Self-rescheduling smoothing task. Each frame it steps toward the latest
/// pointer sample and hands the result to `on_frame`. Stops on [`stop`] or
/// when dropped; no callback runs `on_frame` after that.
///
/// [`stop`]: SmoothingLoop::stop
pub struct SmoothingLoop {
    inner: Rc<LoopInner>,
}

impl SmoothingLoop {
    pub fn start(
        scheduler: Rc<dyn FrameScheduler>,
        pointer: LatestPointer,
        smoother: Smoother,
        on_frame: impl FnMut(Point) + 'static,
    ) -> Self {
        let inner = Rc::new(LoopInner {
            scheduler,
            pointer,
            smoother: RefCell::new(smoother),
            on_frame: RefCell::new(Box::new(on_frame)),
            pending: Cell::new(None),
            stopped: Cell::new(false),
        });
        schedule(&inner);
        Self { inner }
    }

    pub fn stop(&self) {
        if self.inner.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.inner.pending.take() {
            self.inner.scheduler.cancel(id);
        }
        debug!("Smoothing loop stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.inner.stopped.get()
    }

    pub fn current(&self) -> Point {
        self.inner.smoother.borrow().current()
    }
}

impl Drop for SmoothingLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(inner: &Rc<LoopInner>) {
    let weak: Weak<LoopInner> = Rc::downgrade(inner);
    let id = inner.scheduler.request(Box::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.pending.set(None);
        if inner.stopped.get() {
            return;
        }
        let target = inner.pointer.get();
        let position = inner.smoother.borrow_mut().step(target);
        (inner.on_frame.borrow_mut().as_mut())(position);
        if !inner.stopped.get() {
            schedule(&inner);
        }
    }));
    if id.is_none() {
        debug!("No frame source, smoothing loop idle");
    }
    inner.pending.set(id);
}

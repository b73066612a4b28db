use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

type Waker = Box<dyn Fn() + Send + Sync>;

/// Fire-and-forget redraw request shared between the scope and its host.
///
/// Mutations mark the signal; the host either registers a waker (e.g.
/// `egui::Context::request_repaint`) or polls `take` before painting. Marks
/// that land while a redraw is already pending coalesce, so a burst of
/// samples between two frames wakes the host at most once.
#[derive(Clone, Default)]
pub struct RepaintSignal {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    dirty: AtomicBool,
    waker: Mutex<Option<Waker>>,
}

impl RepaintSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the host callback invoked when the scope goes dirty.
    pub fn connect(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.inner.waker.lock().unwrap() = Some(Box::new(waker));
    }

    /// Request a redraw. Only the false -> true edge reaches the waker.
    pub fn mark(&self) {
        if !self.inner.dirty.swap(true, Ordering::AcqRel) {
            if let Some(waker) = self.inner.waker.lock().unwrap().as_ref() {
                waker();
            }
        }
    }

    /// Consume the pending request, reporting whether one was outstanding.
    pub fn take(&self) -> bool {
        self.inner.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.load(Ordering::Acquire)
    }
}

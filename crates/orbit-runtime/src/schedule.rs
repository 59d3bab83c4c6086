//! Before-render callback scheduling
//!
//! The host loop owns the scheduler. Systems register a callback once and
//! are otherwise passive; every frame the host runs the callbacks in
//! registration order against its context.

/// Handle returned by `register_before_render`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

type BeforeRender<C> = Box<dyn FnMut(&mut C, f64)>;

/// Ordered list of per-frame callbacks over a host context `C`
pub struct FrameScheduler<C> {
    callbacks: Vec<(CallbackId, BeforeRender<C>)>,
    next_id: u64,
}

impl<C> Default for FrameScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FrameScheduler<C> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback receiving the context and the frame delta in milliseconds
    pub fn register_before_render(
        &mut self,
        callback: impl FnMut(&mut C, f64) + 'static,
    ) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unregister(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cb_id, _)| *cb_id != id);
        self.callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run every callback once, in registration order
    pub fn run_frame(&mut self, ctx: &mut C, dt_ms: f64) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(ctx, dt_ms);
        }
    }
}

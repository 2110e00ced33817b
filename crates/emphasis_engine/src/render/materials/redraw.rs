//! Redraw signalling
//!
//! Materials call [`RedrawListener::request_redraw`] once for every field
//! write that changes state. The call is synchronous and must not block.

use std::cell::Cell;
use std::rc::Rc;

/// Receiver of "state changed, redraw needed" notifications
pub trait RedrawListener {
    /// Called on the mutating thread after a field changed
    fn request_redraw(&self);
}

impl<F: Fn()> RedrawListener for F {
    fn request_redraw(&self) {
        self();
    }
}

/// Listener handle shared by the materials of one scene
pub type SharedRedraw = Rc<dyn RedrawListener>;

/// Dirty flag a render loop can poll once per frame
#[derive(Debug, Default)]
pub struct RedrawFlag {
    pending: Cell<bool>,
    requests: Cell<u64>,
}

impl RedrawFlag {
    /// Create a flag with no pending redraw
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a redraw was requested since the last [`take`](Self::take)
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Clear the flag, returning whether a redraw was pending
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }

    /// Total requests received
    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl RedrawListener for RedrawFlag {
    fn request_redraw(&self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}

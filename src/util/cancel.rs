//! Cancellation flag shared between a component and its in-flight work.
//!
//! Animation loops, delayed restores and observers check the token before
//! touching the DOM; component cleanup trips it so nothing updates a detached
//! element. The flag is atomic so it can move into `on_cleanup`.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

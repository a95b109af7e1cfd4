//! Cooperative cancellation: [`Context`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
///
/// The external input layer holds a clone and may request termination at
/// any time; the search algorithms check the token once per loop
/// iteration, so a started expansion step always completes.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_propagates_to_clones() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }
}

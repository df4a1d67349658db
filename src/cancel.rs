//! Best-effort cancellation for planning calls running off the UI thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag checked by the refiner between full 2-opt scans.
///
/// Clones observe the same flag, so one copy can stay with the caller
/// while another travels into a background task.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_flag() {
        let token = CancellationToken::new();
        let remote = token.clone();
        assert!(!remote.is_cancelled());

        token.cancel();
        assert!(remote.is_cancelled());
    }
}

//! Cooperative cancellation for long searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag with an optional deadline.
///
/// Clones share the flag, so cancelling one clone cancels them all. A
/// deadline only affects the token it was set on and never raises the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Creates a token that only fires when [`CancelToken::cancel`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a token sharing this token's flag that also fires once
    /// `timeout` has elapsed from now.
    pub fn child(&self, timeout: Option<Duration>) -> Self {
        Self {
            flag: Arc::clone(&self.flag),
            deadline: timeout.map(|t| Instant::now() + t),
        }
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_live() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(!token.child(None).is_cancelled());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_reaches_children() {
        let token = CancelToken::new();
        let child = token.child(Some(Duration::from_secs(3600)));
        token.cancel();
        assert!(child.is_cancelled());
    }

    #[test]
    fn test_expired_deadline_fires_only_on_child() {
        let token = CancelToken::new();
        let child = token.child(Some(Duration::ZERO));
        assert!(child.is_cancelled());
        assert!(!token.is_cancelled());
        assert!(!token.child(None).is_cancelled());
    }

    #[test]
    fn test_distant_deadline_does_not_fire() {
        let token = CancelToken::new().child(Some(Duration::from_secs(3600)));
        assert!(!token.is_cancelled());
    }
}

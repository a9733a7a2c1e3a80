use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag that tells in-flight work its owner has gone away.
///
/// Clones observe the same flag. Cancelling is permanent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token, returning `true` only for the call that flipped it.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());

        assert!(token.cancel());
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_cancel_reports_first_call_only() {
        let token = CancelToken::new();
        assert!(token.cancel());
        assert!(!token.cancel());
        assert!(!token.clone().cancel());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_token_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CancelToken>();
    }
}

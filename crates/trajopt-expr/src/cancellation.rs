use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide cancellation flag (spec §5, §6). Every
/// [`CancellationToken`] observes this flag; two concurrent generators
/// therefore share the cancellation signal by design.
static GLOBAL_CANCELLED: AtomicBool = AtomicBool::new(false);

/// Set the process-wide cancellation flag from any thread.
pub fn request_cancellation() {
    GLOBAL_CANCELLED.store(true, Ordering::SeqCst);
}

/// Read the process-wide cancellation flag.
pub fn is_cancellation_requested() -> bool {
    GLOBAL_CANCELLED.load(Ordering::SeqCst)
}

/// Reset the process-wide cancellation flag to false. The generator
/// does this at the start of every `generate()` call (spec §5).
pub fn reset_cancellation() {
    GLOBAL_CANCELLED.store(false, Ordering::SeqCst);
}

/// A per-generator cancellation flag composed with the global one.
///
/// The spec's original redesign note (§9) observes that the source's
/// bare global atomic should, in a reimplementation, be composable
/// with a per-generator flag if per-generator cancellation is ever
/// needed. `CancellationToken` is that composition: it is cancelled
/// when either the global flag or its own local flag is set.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    local: Option<Arc<AtomicBool>>,
}

impl CancellationToken {
    /// A token that only observes the global flag.
    pub fn global() -> Self {
        Self { local: None }
    }

    /// A token with its own local flag, composed with the global one.
    pub fn child() -> Self {
        Self {
            local: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        is_cancellation_requested()
            || self
                .local
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Cancel this token's local flag without touching the global one.
    /// A no-op on a [`CancellationToken::global`] token.
    pub fn cancel_local(&self) {
        if let Some(flag) = &self.local {
            flag.store(true, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn global_flag_round_trips() {
        reset_cancellation();
        assert!(!is_cancellation_requested());
        request_cancellation();
        assert!(is_cancellation_requested());
        reset_cancellation();
        assert!(!is_cancellation_requested());
    }

    #[test]
    #[serial]
    fn child_token_is_cancelled_by_local_or_global() {
        reset_cancellation();
        let token = CancellationToken::child();
        assert!(!token.is_cancelled());
        token.cancel_local();
        assert!(token.is_cancelled());
        assert!(!is_cancellation_requested());

        request_cancellation();
        let other = CancellationToken::child();
        assert!(other.is_cancelled());
        reset_cancellation();
    }
}

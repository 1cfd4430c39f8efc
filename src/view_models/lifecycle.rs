//! # Request Lifecycle
//!
//! Start/complete bookkeeping for one repeatable async operation. A naive
//! "set loading, overwrite with whichever response arrives" pattern loses
//! correctness under rapid repeated triggers: a slow first response can
//! land after a fast second one and overwrite fresh data with stale data.
//!
//! The lifecycle hands out a generation token at start time. A completion
//! presenting anything but the current generation is discarded unapplied,
//! which yields "latest start wins" without transport-level cancellation
//! (the superseded request still runs, its outcome is simply ignored).

/// Generation-counting guard for one repeatable async operation.
///
/// One long-lived instance is reused sequentially per request type. State
/// is deliberately minimal: a monotonic generation and a pending flag.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    generation: u64,
    pending: bool,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new call. Increments the generation, marks the lifecycle
    /// pending, and returns the new generation as an opaque token.
    ///
    /// Must be called synchronously before the underlying call is
    /// dispatched so the token can be bound into both the success and
    /// failure continuations.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        tracing::debug!(generation = self.generation, "request lifecycle started");
        self.generation
    }

    /// Reconcile a completion for `token`.
    ///
    /// If a newer call has since started the completion is stale: nothing
    /// runs, `pending` is left untouched (it belongs to the superseding
    /// call now), and `false` is returned. Otherwise the lifecycle stops
    /// pending, `apply` runs exactly once, and `true` is returned.
    pub fn complete<F>(&mut self, token: u64, apply: F) -> bool
    where
        F: FnOnce(),
    {
        if token != self.generation {
            tracing::debug!(
                token,
                generation = self.generation,
                "stale completion discarded"
            );
            return false;
        }

        self.pending = false;
        apply();
        true
    }

    /// True while the latest started call has not yet been reconciled.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Current generation, mostly useful for logging.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_should_increment_generation_and_set_pending() {
        let mut lifecycle = RequestLifecycle::new();
        assert!(!lifecycle.is_pending());

        let first = lifecycle.start();
        assert_eq!(first, 1);
        assert!(lifecycle.is_pending());

        let second = lifecycle.start();
        assert_eq!(second, 2);
        assert!(lifecycle.is_pending());
    }

    #[test]
    fn complete_should_apply_current_generation() {
        let mut lifecycle = RequestLifecycle::new();
        let token = lifecycle.start();

        let mut applied = false;
        let accepted = lifecycle.complete(token, || applied = true);

        assert!(accepted);
        assert!(applied);
        assert!(!lifecycle.is_pending());
    }

    #[test]
    fn complete_should_discard_superseded_generation() {
        let mut lifecycle = RequestLifecycle::new();
        let stale_token = lifecycle.start();
        let fresh_token = lifecycle.start();

        let mut stale_applied = false;
        let accepted = lifecycle.complete(stale_token, || stale_applied = true);
        assert!(!accepted);
        assert!(!stale_applied);
        // The superseding call is still outstanding.
        assert!(lifecycle.is_pending());

        let mut fresh_applied = false;
        assert!(lifecycle.complete(fresh_token, || fresh_applied = true));
        assert!(fresh_applied);
        assert!(!lifecycle.is_pending());
    }

    #[test]
    fn latest_start_wins_regardless_of_completion_order() {
        let mut lifecycle = RequestLifecycle::new();
        let token_a = lifecycle.start();
        let token_b = lifecycle.start();

        let mut state = "initial";

        // B resolves first and is applied.
        assert!(lifecycle.complete(token_b, || state = "b"));
        // A resolves late and must not overwrite B.
        assert!(!lifecycle.complete(token_a, || state = "a"));

        assert_eq!(state, "b");
        assert!(!lifecycle.is_pending());
    }

    #[test]
    fn stale_completion_should_not_clear_pending() {
        let mut lifecycle = RequestLifecycle::new();
        let stale_token = lifecycle.start();
        let _fresh_token = lifecycle.start();

        lifecycle.complete(stale_token, || {});
        assert!(lifecycle.is_pending());
    }

    #[test]
    fn duplicate_completion_should_apply_only_once() {
        let mut lifecycle = RequestLifecycle::new();
        let token = lifecycle.start();

        let mut count = 0;
        assert!(lifecycle.complete(token, || count += 1));

        // A second completion for an already-reconciled generation is only
        // possible after a new start, so simulate the restart.
        let _next = lifecycle.start();
        assert!(!lifecycle.complete(token, || count += 1));
        assert_eq!(count, 1);
    }
}

use std::sync::{Mutex, PoisonError};

/// Stages of a create or update submission.
///
/// `Idle -> Validating -> (Rejected | Persisting -> [ImageSyncing] -> Committed | Failed)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Validating,
    Rejected,
    Persisting,
    ImageSyncing,
    Committed,
    Failed,
}

impl LifecycleState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifecycleState::Rejected | LifecycleState::Committed | LifecycleState::Failed
        )
    }

    /// Whether the state machine allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Persisting)
                | (Validating, Failed)
                | (Persisting, ImageSyncing)
                | (Persisting, Committed)
                | (Persisting, Failed)
                | (ImageSyncing, Persisting)
                | (ImageSyncing, Failed)
                | (Rejected, Idle)
                | (Committed, Idle)
                | (Failed, Idle)
        )
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleState::Idle => write!(f, "idle"),
            LifecycleState::Validating => write!(f, "validating"),
            LifecycleState::Rejected => write!(f, "rejected"),
            LifecycleState::Persisting => write!(f, "persisting"),
            LifecycleState::ImageSyncing => write!(f, "image_syncing"),
            LifecycleState::Committed => write!(f, "committed"),
            LifecycleState::Failed => write!(f, "failed"),
        }
    }
}

/// Receives every state a create/update operation passes through.
pub trait LifecycleObserver: Send + Sync {
    fn on_transition(&self, state: LifecycleState);
}

/// Observer that remembers the states it was shown, in order.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    history: Mutex<Vec<LifecycleState>>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> LifecycleState {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
            .unwrap_or(LifecycleState::Idle)
    }

    pub fn history(&self) -> Vec<LifecycleState> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LifecycleObserver for LifecycleTracker {
    /// Records `state`; a terminal state passes back through `Idle` before the
    /// next submission starts.
    fn on_transition(&self, state: LifecycleState) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        let from = history.last().copied().unwrap_or(LifecycleState::Idle);
        debug_assert!(
            from.can_transition_to(state)
                || (from.is_terminal() && LifecycleState::Idle.can_transition_to(state)),
            "illegal lifecycle transition {from} -> {state}"
        );
        history.push(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_documented_paths_only() {
        use LifecycleState::*;

        assert!(Idle.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Rejected));
        assert!(Persisting.can_transition_to(ImageSyncing));
        assert!(ImageSyncing.can_transition_to(Persisting));
        assert!(Persisting.can_transition_to(Committed));

        assert!(!Idle.can_transition_to(Persisting));
        assert!(!Validating.can_transition_to(Committed));
        assert!(!Rejected.can_transition_to(Persisting));
    }

    #[test]
    fn should_flag_terminal_states() {
        assert!(LifecycleState::Committed.is_terminal());
        assert!(LifecycleState::Failed.is_terminal());
        assert!(LifecycleState::Rejected.is_terminal());
        assert!(!LifecycleState::ImageSyncing.is_terminal());
    }

    #[test]
    fn should_report_idle_before_any_transition() {
        let tracker = LifecycleTracker::new();

        assert_eq!(tracker.current(), LifecycleState::Idle);
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn should_accept_a_new_submission_after_a_terminal_state() {
        let tracker = LifecycleTracker::new();
        tracker.on_transition(LifecycleState::Validating);
        tracker.on_transition(LifecycleState::Persisting);
        tracker.on_transition(LifecycleState::Committed);
        tracker.on_transition(LifecycleState::Validating);

        assert_eq!(tracker.current(), LifecycleState::Validating);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "illegal lifecycle transition")]
    fn should_refuse_skipping_validation() {
        let tracker = LifecycleTracker::new();
        tracker.on_transition(LifecycleState::Persisting);
    }

    #[test]
    fn should_record_transitions_in_order() {
        let tracker = LifecycleTracker::new();
        tracker.on_transition(LifecycleState::Validating);
        tracker.on_transition(LifecycleState::Rejected);

        assert_eq!(tracker.current(), LifecycleState::Rejected);
        assert_eq!(
            tracker.history(),
            vec![LifecycleState::Validating, LifecycleState::Rejected]
        );
    }
}

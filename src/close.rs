use crate::error::{CoreError, Result};

/// Outcome of a close-confirmation prompt. Single-shot: one decision per
/// close request, resolved synchronously.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CloseDecision {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CloseState {
    Idle,
    Pending,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The underlying close proceeds.
    Accepted,
    /// The close is vetoed; the window stays open.
    Rejected,
}

/// Intercepts window-close requests: `Idle → Pending → resolve → Idle`.
/// At most one request is outstanding; the host is expected to be modal
/// while the prompt is up.
pub struct CloseGuard {
    state: CloseState,
}

impl CloseGuard {
    pub fn new() -> Self {
        Self {
            state: CloseState::Idle,
        }
    }

    /// Valid only from `Idle`. A second request while the prompt is live
    /// fails with `AlreadyPending` and leaves the state untouched.
    pub fn request_close(&mut self) -> Result<()> {
        match self.state {
            CloseState::Idle => {
                self.state = CloseState::Pending;
                Ok(())
            }
            CloseState::Pending => Err(CoreError::AlreadyPending),
        }
    }

    /// Resolves the outstanding request and returns to `Idle`. An answer
    /// that is still `Pending` (the host dismissed the prompt without
    /// choosing) counts as Cancelled, never as Confirmed.
    pub fn resolve(&mut self, choice: CloseDecision) -> CloseOutcome {
        if self.state != CloseState::Pending {
            log::warn!("close resolution with no request outstanding");
            return CloseOutcome::Rejected;
        }
        self.state = CloseState::Idle;

        match choice {
            CloseDecision::Confirmed => CloseOutcome::Accepted,
            CloseDecision::Cancelled | CloseDecision::Pending => CloseOutcome::Rejected,
        }
    }

    pub fn state(&self) -> CloseState {
        self.state
    }
}

impl Default for CloseGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_close_leaves_no_leftover_lock() {
        let mut guard = CloseGuard::new();

        guard.request_close().unwrap();
        assert_eq!(guard.resolve(CloseDecision::Cancelled), CloseOutcome::Rejected);
        assert_eq!(guard.state(), CloseState::Idle);

        // A later request succeeds again.
        guard.request_close().unwrap();
        assert_eq!(guard.state(), CloseState::Pending);
    }

    #[test]
    fn confirmed_close_is_accepted() {
        let mut guard = CloseGuard::new();
        guard.request_close().unwrap();
        assert_eq!(guard.resolve(CloseDecision::Confirmed), CloseOutcome::Accepted);
        assert_eq!(guard.state(), CloseState::Idle);
    }

    #[test]
    fn second_request_while_pending_is_rejected() {
        let mut guard = CloseGuard::new();
        guard.request_close().unwrap();

        assert!(matches!(
            guard.request_close(),
            Err(CoreError::AlreadyPending)
        ));
        assert_eq!(guard.state(), CloseState::Pending);
    }

    #[test]
    fn dismissed_prompt_falls_back_to_cancel() {
        let mut guard = CloseGuard::new();
        guard.request_close().unwrap();
        assert_eq!(guard.resolve(CloseDecision::Pending), CloseOutcome::Rejected);
        assert_eq!(guard.state(), CloseState::Idle);
    }

    #[test]
    fn resolve_without_request_is_a_rejected_noop() {
        let mut guard = CloseGuard::new();
        assert_eq!(guard.resolve(CloseDecision::Confirmed), CloseOutcome::Rejected);
        assert_eq!(guard.state(), CloseState::Idle);
    }
}

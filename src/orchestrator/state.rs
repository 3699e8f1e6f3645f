use crate::models::StockAnalysisResult;
use std::time::{Duration, Instant};

/// How long the cosmetic "copied" indicator stays on after a successful
/// clipboard write.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Lifecycle of a single analysis request.
///
/// One tagged variant instead of separate loading/result/error flags, so a
/// stale result can never coexist with an in-flight request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(StockAnalysisResult),
    Failed(String),
}

impl RequestState {
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "IDLE",
            RequestState::Loading => "LOADING",
            RequestState::Succeeded(_) => "SUCCEEDED",
            RequestState::Failed(_) => "FAILED",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&StockAnalysisResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Cosmetic "copied" indicator for clipboard feedback.
///
/// Deadline-based rather than timer-based: a new copy replaces the
/// deadline, so an earlier pending reset can never clear a later copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    deadline: Option<Instant>,
}

impl CopyFeedback {
    pub fn mark_copied(&mut self) {
        self.mark_copied_at(Instant::now());
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(Instant::now())
    }

    fn mark_copied_at(&mut self, now: Instant) {
        self.deadline = Some(now + COPY_FEEDBACK_WINDOW);
    }

    fn is_active_at(&self, now: Instant) -> bool {
        self.deadline.map_or(false, |deadline| now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_state_starts_idle() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn failed_state_exposes_its_message() {
        let state = RequestState::Failed("Emiten tidak ditemukan".to_string());
        assert_eq!(state.error_message(), Some("Emiten tidak ditemukan"));
        assert!(state.result().is_none());
    }

    #[test]
    fn copy_feedback_is_inactive_until_marked() {
        let feedback = CopyFeedback::default();
        assert!(!feedback.is_active());
    }

    #[test]
    fn copy_feedback_expires_after_its_window() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark_copied_at(start);

        assert!(feedback.is_active_at(start + Duration::from_secs(1)));
        assert!(!feedback.is_active_at(start + COPY_FEEDBACK_WINDOW));
        assert!(!feedback.is_active_at(start + Duration::from_secs(3)));
    }

    #[test]
    fn a_new_copy_extends_the_window() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark_copied_at(start);
        feedback.mark_copied_at(start + Duration::from_secs(1));

        // The first deadline would already have passed; the second keeps
        // the flag on.
        assert!(feedback.is_active_at(start + Duration::from_millis(2_500)));
        assert!(!feedback.is_active_at(start + Duration::from_secs(4)));
    }
}

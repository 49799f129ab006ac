//! Save status tracking for in-flight table updates

use parking_lot::Mutex;
use std::sync::Arc;

/// Feedback state for table updates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

impl SaveStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SaveStatus::Pending)
    }
}

#[derive(Debug, Default)]
struct TrackerState {
    in_flight: usize,
    last_error: Option<String>,
}

/// Shared tracker updated from update completion tasks.
///
/// Pending while any update is in flight. Once all have completed the
/// status is `Failed` if one of them failed since the last `begin`,
/// otherwise `Idle`.
#[derive(Debug, Clone, Default)]
pub struct SaveTracker {
    state: Arc<Mutex<TrackerState>>,
}

impl SaveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SaveStatus {
        let state = self.state.lock();
        if state.in_flight > 0 {
            SaveStatus::Pending
        } else if let Some(error) = &state.last_error {
            SaveStatus::Failed(error.clone())
        } else {
            SaveStatus::Idle
        }
    }

    /// Record the start of an update
    pub fn begin(&self) {
        let mut state = self.state.lock();
        if state.in_flight == 0 {
            state.last_error = None;
        }
        state.in_flight += 1;
    }

    /// Record the completion of an update started with `begin`
    pub fn finish(&self, result: Result<(), String>) {
        let mut state = self.state.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
        if let Err(error) = result {
            state.last_error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        assert_eq!(SaveTracker::new().status(), SaveStatus::Idle);
    }

    #[test]
    fn test_pending_until_all_finish() {
        let tracker = SaveTracker::new();
        tracker.begin();
        tracker.begin();
        assert!(tracker.status().is_pending());

        tracker.finish(Ok(()));
        assert!(tracker.status().is_pending());

        tracker.finish(Ok(()));
        assert_eq!(tracker.status(), SaveStatus::Idle);
    }

    #[test]
    fn test_failure_reported_after_settling() {
        let tracker = SaveTracker::new();
        tracker.begin();
        tracker.begin();
        tracker.finish(Err("conflict".into()));
        assert!(tracker.status().is_pending());

        tracker.finish(Ok(()));
        assert_eq!(tracker.status(), SaveStatus::Failed("conflict".into()));
    }

    #[test]
    fn test_new_update_clears_failure() {
        let tracker = SaveTracker::new();
        tracker.begin();
        tracker.finish(Err("offline".into()));

        tracker.begin();
        tracker.finish(Ok(()));
        assert_eq!(tracker.status(), SaveStatus::Idle);
    }
}

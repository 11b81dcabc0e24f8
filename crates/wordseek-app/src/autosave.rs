use std::time::{Duration, Instant};

/// Debounced save scheduling for one session.
///
/// Each change pushes the deadline back, so a burst of finds is written once
/// the player pauses for the debounce interval.
#[derive(Debug, Clone)]
pub struct Autosave {
    debounce: Duration,
    last_change: Option<Instant>,
}

impl Autosave {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last_change: None,
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.last_change.is_some()
    }

    pub fn mark_dirty(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn clear_dirty(&mut self) {
        self.last_change = None;
    }

    /// Returns `true` if there are unsaved changes and the debounce interval
    /// has passed since the last one.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|changed| now.saturating_duration_since(changed) >= self.debounce)
    }

    /// Returns when the pending save becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.last_change.map(|changed| changed + self.debounce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_state_is_never_due() {
        let autosave = Autosave::new(Duration::from_secs(1));
        let now = Instant::now();
        assert!(!autosave.is_dirty());
        assert!(!autosave.is_due(now + Duration::from_secs(60)));
        assert_eq!(autosave.deadline(), None);
    }

    #[test]
    fn test_due_after_debounce() {
        let mut autosave = Autosave::new(Duration::from_secs(1));
        let t0 = Instant::now();
        autosave.mark_dirty(t0);
        assert!(!autosave.is_due(t0));
        assert!(!autosave.is_due(t0 + Duration::from_millis(999)));
        assert!(autosave.is_due(t0 + Duration::from_secs(1)));
        autosave.clear_dirty();
        assert!(!autosave.is_due(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_new_change_pushes_deadline_back() {
        let mut autosave = Autosave::new(Duration::from_secs(1));
        let t0 = Instant::now();
        autosave.mark_dirty(t0);
        let t1 = t0 + Duration::from_millis(800);
        autosave.mark_dirty(t1);
        assert!(!autosave.is_due(t0 + Duration::from_secs(1)));
        assert!(autosave.is_due(t1 + Duration::from_secs(1)));
        assert_eq!(autosave.deadline(), Some(t1 + Duration::from_secs(1)));
    }
}

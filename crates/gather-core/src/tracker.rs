/// Busy-state flags for in-flight operations.
///
/// Mutated only by the CRUD orchestrator, reset to idle on settle
/// regardless of outcome. The UI reads these to disable controls and show
/// per-row spinners without tracking async state itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpTracker {
    /// True while the initial `load` is in flight.
    pub loading_initial: bool,
    /// True while any create/update/delete is in flight. Shared across
    /// those operations; last writer wins, which is acceptable because
    /// the UI does not nest submit tracking.
    pub submitting: bool,
    /// Identifier of the row undergoing a destructive operation, so a
    /// single row can show its own spinner.
    pub target: Option<String>,
}

impl OpTracker {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.loading_initial && !self.submitting && self.target.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let tracker = OpTracker::default();
        assert!(tracker.is_idle());
        assert!(!tracker.loading_initial);
        assert!(!tracker.submitting);
        assert!(tracker.target.is_none());
    }
}

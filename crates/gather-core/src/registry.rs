use std::collections::BTreeMap;

use crate::activity::Activity;

/// The canonical in-memory collection of activities.
///
/// Owned exclusively by the store; the CRUD orchestrator is the only
/// writer. Iteration order is the map's key order, consistent but not
/// meaningful, so consumers re-sort (see [`crate::views`]).
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    entries: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry under `activity.id`. Keying on the
    /// activity's own identifier makes duplicate entries under different
    /// keys structurally impossible.
    pub fn set(&mut self, activity: Activity) {
        self.entries.insert(activity.id.clone(), activity);
    }

    /// Removes and returns the entry, or `None` when absent. Removing a
    /// missing identifier is a valid no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Option<Activity> {
        self.entries.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Lazy, restartable iteration over all activities.
    pub fn values(&self) -> impl Iterator<Item = &Activity> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::parse_wire_date;

    fn activity(id: &str, date: &str) -> Activity {
        Activity {
            id: id.to_string(),
            title: format!("activity {id}"),
            description: String::new(),
            category: "test".to_string(),
            date: parse_wire_date(date).expect("parse date"),
            city: String::new(),
            venue: String::new(),
        }
    }

    #[test]
    fn get_after_set_returns_the_stored_activity() {
        let mut registry = ActivityRegistry::new();
        let a = activity("x1", "2025-01-01T09:00:00");
        registry.set(a.clone());
        assert_eq!(registry.get("x1"), Some(&a));
    }

    #[test]
    fn set_replaces_an_existing_entry() {
        let mut registry = ActivityRegistry::new();
        registry.set(activity("x1", "2025-01-01T09:00:00"));
        let replacement = activity("x1", "2025-02-01T09:00:00");
        registry.set(replacement.clone());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x1"), Some(&replacement));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = ActivityRegistry::new();
        registry.set(activity("x1", "2025-01-01T09:00:00"));

        assert!(registry.remove("x1").is_some());
        assert!(registry.remove("x1").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_ids_are_not_errors() {
        let mut registry = ActivityRegistry::new();
        assert!(registry.get("ghost").is_none());
        assert!(registry.remove("ghost").is_none());
        assert!(!registry.contains("ghost"));
    }

    #[test]
    fn values_is_restartable() {
        let mut registry = ActivityRegistry::new();
        registry.set(activity("a", "2025-01-01T09:00:00"));
        registry.set(activity("b", "2025-01-02T09:00:00"));

        assert_eq!(registry.values().count(), 2);
        // A second pass over the same registry sees the same entries.
        assert_eq!(registry.values().count(), 2);
    }
}

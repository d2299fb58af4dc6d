use crate::registry::ActivityRegistry;

/// Which activity the UI has open, and whether a create/edit form is
/// showing.
///
/// The selection is held by identifier and resolved against the registry
/// on read, so a deleted entry can never leave a dangling selected
/// activity behind. All transitions are synchronous and infallible; none
/// of them touch the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<String>,
    pub edit_mode: bool,
}

impl SelectionState {
    /// Opens the create form: edit mode on, selection cleared.
    pub fn open_create_form(&mut self) {
        self.edit_mode = true;
        self.selected = None;
    }

    /// Selects `id` if it exists in the registry, otherwise clears the
    /// selection. Either way the form closes.
    pub fn select(&mut self, registry: &ActivityRegistry, id: Option<&str>) {
        self.selected = id.filter(|id| registry.contains(id)).map(str::to_string);
        self.edit_mode = false;
    }

    /// Opens the edit form for `id` (selection cleared when unknown).
    pub fn open_edit_form(&mut self, registry: &ActivityRegistry, id: &str) {
        self.selected = registry.contains(id).then(|| id.to_string());
        self.edit_mode = true;
    }

    /// Clears the selection, leaving edit mode untouched.
    pub fn cancel_selection(&mut self) {
        self.selected = None;
    }

    /// Closes the form, leaving the selection untouched.
    pub fn cancel_form(&mut self) {
        self.edit_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;
    use crate::datetime::parse_wire_date;

    fn registry_with(ids: &[&str]) -> ActivityRegistry {
        let mut registry = ActivityRegistry::new();
        for id in ids {
            registry.set(Activity {
                id: id.to_string(),
                title: String::new(),
                description: String::new(),
                category: String::new(),
                date: parse_wire_date("2025-01-01T09:00:00").expect("parse date"),
                city: String::new(),
                venue: String::new(),
            });
        }
        registry
    }

    #[test]
    fn selecting_an_existing_id_sets_selection_and_closes_the_form() {
        let registry = registry_with(&["x1"]);
        let mut state = SelectionState {
            selected: None,
            edit_mode: true,
        };

        state.select(&registry, Some("x1"));
        assert_eq!(state.selected.as_deref(), Some("x1"));
        assert!(!state.edit_mode);
    }

    #[test]
    fn selecting_a_missing_id_clears_selection() {
        let registry = registry_with(&["x1"]);
        let mut state = SelectionState::default();
        state.select(&registry, Some("x1"));

        state.select(&registry, Some("missing"));
        assert!(state.selected.is_none());
        assert!(!state.edit_mode);
    }

    #[test]
    fn selecting_none_clears_selection() {
        let registry = registry_with(&["x1"]);
        let mut state = SelectionState::default();
        state.select(&registry, Some("x1"));

        state.select(&registry, None);
        assert!(state.selected.is_none());
    }

    #[test]
    fn open_create_form_clears_selection() {
        let registry = registry_with(&["x1"]);
        let mut state = SelectionState::default();
        state.select(&registry, Some("x1"));

        state.open_create_form();
        assert!(state.edit_mode);
        assert!(state.selected.is_none());
    }

    #[test]
    fn open_edit_form_selects_and_opens() {
        let registry = registry_with(&["x1"]);
        let mut state = SelectionState::default();

        state.open_edit_form(&registry, "x1");
        assert_eq!(state.selected.as_deref(), Some("x1"));
        assert!(state.edit_mode);
    }

    #[test]
    fn cancels_are_independent() {
        let registry = registry_with(&["x1"]);
        let mut state = SelectionState::default();
        state.open_edit_form(&registry, "x1");

        state.cancel_form();
        assert!(!state.edit_mode);
        assert_eq!(state.selected.as_deref(), Some("x1"));

        state.edit_mode = true;
        state.cancel_selection();
        assert!(state.selected.is_none());
        assert!(state.edit_mode);
    }
}

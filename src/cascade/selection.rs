// src/cascade/selection.rs

//! Department → degree → track selection chain of one form.

use crate::cascade::field::{DependentField, Ticket};
use crate::error::Failure;
use crate::models::LookupItem;

/// Selection state of one form. Changing a parent resets everything below
/// it.
#[derive(Debug, Clone, Default)]
pub struct CascadingSelection {
    department: Option<i64>,
    degree: DependentField,
    track: DependentField,
}

impl CascadingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn department(&self) -> Option<i64> {
        self.department
    }

    pub fn degree(&self) -> &DependentField {
        &self.degree
    }

    pub fn track(&self) -> &DependentField {
        &self.track
    }

    /// Choose a department (`0` clears). Clears the degree selection and
    /// the track list; returns the ticket for loading its degrees.
    pub fn select_department(&mut self, department_id: i64) -> Option<Ticket> {
        self.department = (department_id != 0).then_some(department_id);
        self.track.clear();
        self.degree.set_parent(department_id)
    }

    /// Choose a degree (`0` clears). Returns the ticket for loading its
    /// tracks, or `None` when cleared or when the id is not a loaded option.
    pub fn select_degree(&mut self, degree_id: i64) -> Option<Ticket> {
        if degree_id == 0 {
            self.degree.select(0);
            self.track.clear();
            return None;
        }
        if !self.degree.select(degree_id) {
            log::debug!("Ignoring unknown degree {degree_id}");
            return None;
        }
        self.track.set_parent(degree_id)
    }

    pub fn select_track(&mut self, track_id: i64) -> bool {
        self.track.select(track_id)
    }

    pub fn resolve_degrees(&mut self, ticket: Ticket, result: Result<Vec<LookupItem>, Failure>) -> bool {
        self.degree.resolve(ticket, result)
    }

    pub fn resolve_tracks(&mut self, ticket: Ticket, result: Result<Vec<LookupItem>, Failure>) -> bool {
        self.track.resolve(ticket, result)
    }

    /// Whether department, degree and track are all chosen.
    pub fn is_complete(&self) -> bool {
        self.department.is_some() && self.degree.selected().is_some() && self.track.selected().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::LookupState;

    fn items(ids: &[i64]) -> Vec<LookupItem> {
        ids.iter().map(|id| LookupItem::new(*id, id.to_string())).collect()
    }

    fn with_degree_selected() -> CascadingSelection {
        let mut selection = CascadingSelection::new();
        let ticket = selection.select_department(1).unwrap();
        selection.resolve_degrees(ticket, Ok(items(&[10, 11])));
        let ticket = selection.select_degree(10).unwrap();
        selection.resolve_tracks(ticket, Ok(items(&[100])));
        assert!(selection.select_track(100));
        selection
    }

    #[test]
    fn test_full_chain() {
        let selection = with_degree_selected();
        assert!(selection.is_complete());
        assert_eq!(selection.track().selected(), Some(100));
    }

    #[test]
    fn test_department_change_resets_children() {
        let mut selection = with_degree_selected();
        let ticket = selection.select_department(2).unwrap();

        assert_eq!(ticket.parent, 2);
        assert!(selection.degree().is_loading());
        assert_eq!(selection.degree().selected(), None);
        assert_eq!(selection.track().state(), &LookupState::NoParentSelected);
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_degree_change_resets_track_selection() {
        let mut selection = with_degree_selected();
        let ticket = selection.select_degree(11).unwrap();
        assert_eq!(ticket.parent, 11);
        assert_eq!(selection.track().selected(), None);
        assert!(selection.track().is_loading());
    }

    #[test]
    fn test_clearing_department() {
        let mut selection = with_degree_selected();
        assert!(selection.select_department(0).is_none());
        assert_eq!(selection.department(), None);
        assert_eq!(selection.degree().state(), &LookupState::NoParentSelected);
        assert_eq!(selection.track().state(), &LookupState::NoParentSelected);
    }

    #[test]
    fn test_unknown_degree_is_ignored() {
        let mut selection = with_degree_selected();
        assert!(selection.select_degree(99).is_none());
        assert_eq!(selection.degree().selected(), Some(10));
        assert_eq!(selection.track().selected(), Some(100));
    }
}

// src/cascade/mod.rs

//! Cascading lookups: dependent dropdown state, the shared lookup cache and
//! the resolver that connects them to the API.
//!
//! A resolver call takes a ticket from the selection, loads through the
//! cache, then hands the answer back with the same ticket. If the user
//! changed the parent in the meantime the ticket is stale and the answer is
//! dropped.

mod cache;
mod field;
mod selection;

pub use cache::LookupCache;
pub use field::{DependentField, LookupState, Ticket};
pub use selection::CascadingSelection;

use crate::error::Failure;
use crate::models::LookupItem;
use crate::services::LookupService;

/// Loads dependent options for a [`CascadingSelection`].
#[derive(Clone)]
pub struct CascadeResolver {
    lookups: LookupService,
}

impl CascadeResolver {
    pub fn new(lookups: LookupService) -> Self {
        Self { lookups }
    }

    /// Degrees of the ticket's department.
    pub async fn load_degrees(&self, ticket: Ticket) -> Result<Vec<LookupItem>, Failure> {
        self.lookups
            .degrees_of_department(ticket.parent)
            .await
            .map(|items| items.as_ref().clone())
    }

    /// Tracks of the ticket's degree.
    pub async fn load_tracks(&self, ticket: Ticket) -> Result<Vec<LookupItem>, Failure> {
        self.lookups
            .tracks_of_degree(ticket.parent)
            .await
            .map(|items| items.as_ref().clone())
    }

    /// Select a department and load its degrees. Returns whether the loaded
    /// list was applied.
    pub async fn select_department(&self, selection: &mut CascadingSelection, department_id: i64) -> bool {
        let Some(ticket) = selection.select_department(department_id) else {
            return false;
        };
        let result = self.load_degrees(ticket).await;
        selection.resolve_degrees(ticket, result)
    }

    /// Select a degree and load its tracks.
    pub async fn select_degree(&self, selection: &mut CascadingSelection, degree_id: i64) -> bool {
        let Some(ticket) = selection.select_degree(degree_id) else {
            return false;
        };
        let result = self.load_tracks(ticket).await;
        selection.resolve_tracks(ticket, result)
    }
}

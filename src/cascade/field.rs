// src/cascade/field.rs

//! State machine for a dropdown whose options depend on a parent choice.
//!
//! ```text
//!                 set_parent(id != 0)
//! NoParentSelected ───────────────▶ Loading ──resolve(latest, Ok)──▶ Loaded
//!        ▲                             │
//!        │ set_parent(0) / clear       └──resolve(latest, Err)──▶ Failed
//! ```
//!
//! Every parent change issues a [`Ticket`]. Only the ticket issued last may
//! resolve the field; answers for older tickets are dropped.

use crate::error::Failure;
use crate::models::{LookupItem, Messages};

#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    NoParentSelected,
    Loading,
    Loaded(Vec<LookupItem>),
    /// Load failed; carries the failure message
    Failed(String),
}

/// Proof of which parent change a load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub parent: i64,
    seq: u64,
}

#[derive(Debug, Clone)]
pub struct DependentField {
    parent: Option<i64>,
    selected: Option<i64>,
    state: LookupState,
    seq: u64,
}

impl Default for DependentField {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentField {
    pub fn new() -> Self {
        Self {
            parent: None,
            selected: None,
            state: LookupState::NoParentSelected,
            seq: 0,
        }
    }

    pub fn parent(&self) -> Option<i64> {
        self.parent
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Options currently offered; empty unless loaded.
    pub fn options(&self) -> &[LookupItem] {
        match &self.state {
            LookupState::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == LookupState::Loading
    }

    /// Whether the user can pick a value.
    pub fn is_enabled(&self) -> bool {
        !self.options().is_empty()
    }

    /// Placeholder for a disabled field that has a parent but nothing to
    /// offer.
    pub fn placeholder<'m>(&self, messages: &'m Messages) -> Option<&'m str> {
        match &self.state {
            LookupState::Failed(_) => Some(messages.no_children.as_str()),
            LookupState::Loaded(items) if items.is_empty() => Some(messages.no_children.as_str()),
            _ => None,
        }
    }

    /// Point the field at a new parent. Returns the ticket for the load, or
    /// `None` when the parent was cleared.
    pub fn set_parent(&mut self, parent: i64) -> Option<Ticket> {
        self.seq += 1;
        self.selected = None;
        if parent == 0 {
            self.parent = None;
            self.state = LookupState::NoParentSelected;
            return None;
        }
        self.parent = Some(parent);
        self.state = LookupState::Loading;
        Some(Ticket {
            parent,
            seq: self.seq,
        })
    }

    /// Reset to no parent; any load in flight becomes stale.
    pub fn clear(&mut self) {
        self.set_parent(0);
    }

    /// Apply a load result. Returns `false` and changes nothing when the
    /// ticket is not the latest.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<LookupItem>, Failure>) -> bool {
        if ticket.seq != self.seq || self.parent != Some(ticket.parent) {
            log::debug!(
                "Dropping stale lookup for parent {} (seq {} != {})",
                ticket.parent,
                ticket.seq,
                self.seq
            );
            return false;
        }
        self.state = match result {
            Ok(items) => LookupState::Loaded(items),
            Err(failure) => LookupState::Failed(failure.message),
        };
        true
    }

    /// Select an option by id; `0` clears the selection. Ids not among the
    /// loaded options are rejected.
    pub fn select(&mut self, id: i64) -> bool {
        if id == 0 {
            self.selected = None;
            return true;
        }
        if self.options().iter().any(|item| item.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }
}

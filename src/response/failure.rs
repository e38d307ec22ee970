// src/response/failure.rs

//! Classification of failed responses into [`Failure`] values with
//! localized messages.

use crate::error::{Failure, FailureKind};
use crate::models::{Action, Entity, Messages};
use crate::response::Normalized;

/// Fragments in a delete failure that indicate the record is still
/// referenced elsewhere. Matched case-insensitively.
const RELATED_DATA_HINTS: &[&str] = &[
    "related",
    "مرتبط",
    "cannot be deleted",
    "reference constraint",
    "foreign key",
];

/// Separator used when joining field errors into one message.
const ERROR_SEPARATOR: &str = "، ";

/// What a failed call was trying to do.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    pub entity: Entity,
    pub action: Action,
}

impl CallContext {
    pub fn new(entity: Entity, action: Action) -> Self {
        Self { entity, action }
    }
}

/// Build the failure for a response that did not normalize to success.
pub fn classify(
    normalized: &Normalized,
    status: u16,
    status_text: &str,
    context: CallContext,
    messages: &Messages,
) -> Failure {
    let CallContext { entity, action } = context;
    let http_ok = (200..300).contains(&status);
    let server_message = normalized.message.clone();

    let failure = if action == Action::Delete && is_integrity(normalized, status, entity) {
        Failure::new(FailureKind::Integrity, messages.integrity(entity))
    } else if http_ok {
        let fallback = || {
            if normalized.enveloped {
                messages.failed(action, entity)
            } else {
                messages.invalid_response.clone()
            }
        };
        Failure::new(FailureKind::Rejected, server_message.unwrap_or_else(fallback))
    } else {
        match status {
            401 | 403 => Failure::new(FailureKind::Forbidden, messages.forbidden(entity)),
            404 => Failure::new(FailureKind::NotFound, messages.not_found(entity)),
            400 if !normalized.errors.is_empty() => Failure::new(
                FailureKind::Validation,
                normalized.errors.join(ERROR_SEPARATOR),
            ),
            _ => {
                let status_line = format!("{status} {status_text}");
                Failure::new(
                    FailureKind::Server,
                    server_message.unwrap_or_else(|| status_line.trim().to_string()),
                )
            }
        }
    };

    failure
        .with_status(status)
        .with_errors(normalized.errors.clone())
}

fn is_integrity(normalized: &Normalized, status: u16, entity: Entity) -> bool {
    if status == 500 && entity.rejects_referenced_delete() {
        return true;
    }
    normalized
        .message
        .iter()
        .chain(normalized.errors.iter())
        .any(|text| mentions_related_data(text))
}

/// Whether a server message says the record is referenced by other data.
pub fn mentions_related_data(text: &str) -> bool {
    let lowered = text.to_lowercase();
    RELATED_DATA_HINTS
        .iter()
        .any(|hint| lowered.contains(hint))
}

// src/response/mod.rs

//! Response interpretation: body parsing, envelope normalization and
//! failure classification.

mod failure;
mod normalize;

pub use failure::{CallContext, classify, mentions_related_data};
pub use normalize::{Body, Normalized, Shape, normalize};

use crate::error::Failure;
use crate::models::Messages;
use crate::transport::RawResponse;

/// Interpret a raw response: the normalized success view, or the classified
/// failure.
pub fn interpret(
    response: &RawResponse,
    shape: Shape,
    context: CallContext,
    messages: &Messages,
) -> Result<Normalized, Failure> {
    let body = Body::parse(&response.text);
    let normalized = normalize(&body, response.is_success(), shape);
    if normalized.success {
        Ok(normalized)
    } else {
        Err(classify(
            &normalized,
            response.status,
            &response.status_text,
            context,
            messages,
        ))
    }
}

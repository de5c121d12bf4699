//! Wire shapes shared by every endpoint.
//!
//! The domain [`Error`](crate::domain::Error) stays framework-agnostic and
//! does not derive serde or `ToSchema`; this module owns the JSON envelope
//! and its OpenAPI schema instead.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message safe to show callers.
    #[schema(example = "Failed to fetch orders")]
    pub error: String,
}

impl ErrorResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

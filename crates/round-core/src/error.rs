//! Schema errors

use thiserror::Error;

/// A backend response body that does not match the round schema.
///
/// Kept distinct from transport failures so a broken response is never
/// confused with "no participants this round".
#[derive(Debug, Error)]
#[error("malformed round response: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

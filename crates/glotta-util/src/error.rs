//! Error types shared across crate boundaries.
//!
//! Per-crate concerns (lexing, parsing, ...) define their own `thiserror`
//! enums next to the code that raises them; this one is for failures that
//! don't belong to any single pipeline stage.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("internal error: {0}")]
pub struct InternalError(pub String);

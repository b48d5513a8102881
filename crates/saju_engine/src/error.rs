//! Error types for fortune computation.

use saju_time::TimeError;
use thiserror::Error;

/// Errors from building inputs or running the orchestrator.
///
/// Missing or empty content is never an error; it is replaced by fixed
/// defaults. Only invalid calendar input and structurally broken tables
/// are reported.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FortuneError {
    /// Birth or reference input failed calendar validation.
    #[error("validation error: {0}")]
    Validation(#[from] TimeError),
    /// A content table is present but structurally unusable.
    #[error("malformed {table} table: {reason}")]
    MalformedTable { table: &'static str, reason: String },
}

impl FortuneError {
    pub(crate) fn malformed(table: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            table,
            reason: reason.into(),
        }
    }
}

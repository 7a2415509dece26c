//! Model Errors
//!
//! Lookup misses are not errors here: operations on unknown ids return the
//! snapshot unchanged. Only edit validation and loader failures have types.

use thiserror::Error;

/// Rejected user edit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("name must not be blank")]
    Blank,
}

/// Child loader failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to load children: {0}")]
    Failed(String),
}

/// Trim a node name or card title, rejecting blank input
pub fn normalize_label(raw: &str) -> Result<String, EditError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EditError::Blank);
    }
    Ok(trimmed.to_string())
}

// Typed errors for store operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors produced at the store boundary.
///
/// Validation variants cover the promises the caller is supposed to keep
/// (non-empty name, enumerated priority, parseable due date); the store
/// checks them anyway and reports violations as values instead of
/// misbehaving on bad input.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("task name cannot be empty")]
    EmptyName,

    #[error("unrecognized priority: {0:?} (expected High, Medium, or Low)")]
    UnrecognizedPriority(String),

    #[error("invalid due date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDueDate(String),

    #[error("failed to read task file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write task file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

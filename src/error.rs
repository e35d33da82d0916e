// src/error.rs
//! Error taxonomy for the ranking pipeline.
//!
//! Containment is decided by the caller, not here:
//! - `MalformedRow` never leaves the loader; the row is dropped.
//! - `RemoteFetch` / `Parse` degrade one record to its unenriched fields.
//! - Everything else aborts the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A dataset row is missing or mistyping a required field.
    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// Nothing to rank: no input given and none discovered.
    #[error("no ratings CSV found in {}", .0.display())]
    NoInputAvailable(PathBuf),

    /// Catalog request failed (transport error or non-2xx status).
    #[error("fetching details for game {id} failed: {reason}")]
    RemoteFetch { id: u32, reason: String },

    /// Catalog document could not be read.
    #[error("parsing details for game {id} failed: {reason}")]
    Parse { id: u32, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

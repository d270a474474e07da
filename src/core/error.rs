//! Centralized error types for directory listing.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum. Variants map to the failure points of one
/// enumeration: opening the directory, reading its entries, and
/// reserving memory for the result list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ListError {
    #[error("cannot open directory {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot reserve space for {capacity} entries: {source}")]
    Alloc {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type ListResult<T> = Result<T, ListError>;

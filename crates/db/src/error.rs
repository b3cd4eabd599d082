//! Error types for the MongoDB layer

use mongodb::error::{ErrorKind, InsertManyError, WriteFailure};
use thiserror::Error;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("invalid connection string '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("database at '{uri}' is unreachable: {source}")]
    Unreachable {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("duplicate key in collection '{collection}': {source}")]
    DuplicateKey {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

impl DbError {
    /// Wrap a write error, promoting unique index violations to `DuplicateKey`.
    pub(crate) fn from_write(collection: &str, source: mongodb::error::Error) -> Self {
        if is_duplicate_key(&source) {
            Self::DuplicateKey {
                collection: collection.to_string(),
                source,
            }
        } else {
            Self::Driver(source)
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

/// Whether the driver error carries a duplicate key write error.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::InsertMany(InsertManyError {
            write_errors: Some(errors),
            ..
        }) => errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE),
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load-level errors: fatal, reported once at startup
// ---------------------------------------------------------------------------

/// The source could not be turned into a [`Dataset`](super::model::Dataset).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row-level CSV syntax problem (bad quoting, ragged rows, ...).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON document is not a records-oriented array.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A column every listing needs is not in the header row.
    #[error("source is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    /// A field failed to normalize and the policy is to abort.
    #[error("row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: ParseError,
    },
}

// ---------------------------------------------------------------------------
// Field-level errors: local to one record
// ---------------------------------------------------------------------------

/// A single field could not be converted to its derived type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("{field}: '{value}' is not a number")]
    NotNumeric { field: &'static str, value: String },

    #[error("date_of_listing: '{0}' is not of the form '<month> <year>'")]
    MalformedDate(String),

    /// A JSON record lacks a field, or has it as `null` where text is needed.
    #[error("{0}: missing")]
    MissingField(&'static str),

    /// A JSON field holds something other than text or a number.
    #[error("{field}: expected text or a number, found {found}")]
    WrongType { field: &'static str, found: String },

    /// A JSON array element is not an object.
    #[error("record is not an object: {0}")]
    NotARecord(String),
}

// ---------------------------------------------------------------------------
// Query-level errors: expected, recoverable by the caller
// ---------------------------------------------------------------------------

/// A selection matched zero listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("selection matched no listings")]
pub struct EmptyResultError;

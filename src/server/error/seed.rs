use thiserror::Error;

use crate::server::error::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SeedError {
    /// The JSON seed file could not be read.
    #[error("Failed to read seed file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The JSON seed file is not a valid seed document.
    #[error("Failed to parse seed file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A seed record failed validation.
    #[error("Invalid {record} seed record #{index}: {source}")]
    InvalidRecord {
        /// Kind of record (store, product, price)
        record: &'static str,
        /// Zero-based position of the record in its list
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// A price record references a store or product that does not exist.
    #[error("Price seed record #{index} references unknown {kind} '{name}'")]
    UnknownReference {
        index: usize,
        kind: &'static str,
        name: String,
    },
}

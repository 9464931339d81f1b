use std::path::PathBuf;

use thiserror::Error;

/// Broker client errors
#[derive(Error, Debug)]
pub enum BrokerError {
    /// Object reference file could not be read
    #[error("cannot read object reference from '{path}': {source}")]
    IorFile {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Stringified object reference is malformed
    #[error("invalid object reference: {0}")]
    InvalidIor(String),

    /// Object reference has no profile this client can use
    #[error("object reference has no IIOP profile")]
    NoIiopProfile,

    /// Encoded data ended early
    #[error("truncated CDR data: needed {needed} bytes at offset {offset}")]
    Truncated {
        /// Bytes required by the read
        needed: usize,
        /// Offset the read started at
        offset: usize,
    },

    /// Encoded data is structurally invalid
    #[error("malformed CDR data: {0}")]
    Malformed(String),

    /// Peer violated the GIOP message framing
    #[error("GIOP protocol error: {0}")]
    Protocol(String),

    /// Network failure talking to the object
    #[error("connection to {endpoint} failed: {source}")]
    Transport {
        /// Host and port of the object
        endpoint: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Object raised a system exception
    #[error("system exception {id} (minor {minor}, completed {completed})")]
    SystemException {
        /// Repository id of the exception
        id: String,
        /// Vendor minor code
        minor: u32,
        /// Completion status: 0 yes, 1 no, 2 maybe
        completed: u32,
    },

    /// Object raised a user exception
    #[error("user exception {0}")]
    UserException(String),

    /// Object asked to be contacted elsewhere
    #[error("object forwarded to another location")]
    LocationForward,
}

/// Result of broker operations.
pub type Result<T> = std::result::Result<T, BrokerError>;

//! Error types for the cipherbench library.
//!
//! Every failure in the pipeline (an invalid configuration, a failing
//! cryptographic primitive, a spreadsheet that cannot be written) surfaces
//! as one of these variants and aborts the run.

use thiserror::Error;

/// The main error type for cipherbench operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Cryptographic operation failed
    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    /// Invalid input or configuration provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Algorithm or key size not supported
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Spreadsheet could not be built or saved
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// A specialized Result type for cipherbench operations.
pub type Result<T> = std::result::Result<T, Error>;

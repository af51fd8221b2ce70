//! # cipherbench
//!
//! A small timing harness for RSA and AES round trips built on the
//! [RustCrypto](https://github.com/RustCrypto) crates.
//!
//! Every benchmark case runs a complete one-shot round trip a fixed number
//! of times:
//!
//! - **RSA**: generate a keypair, split the payload into OAEP/SHA-256
//!   sized blocks, encrypt each block, decrypt each block
//! - **AES**: generate a random key and IV, PKCS7-pad, encrypt and decrypt
//!   in CBC mode, unpad
//!
//! Key generation is part of the timed region. The timings are collected in
//! a [`ResultTable`] and exported as console text and an `.xlsx` sheet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cipherbench::*;
//!
//! let config = BenchmarkConfig::default()
//!     .with_cases(vec![BenchmarkCase::rsa(2048), BenchmarkCase::aes(256)]);
//!
//! let table = run_suite(&config).unwrap();
//! print!("{}", render_console(&table));
//! export_results(&table, config.repetitions, &config.output).unwrap();
//! ```
//!
//! ## Default Cases
//!
//! | Case | Payload |
//! |------|---------|
//! | `RSA 1024` | plaintext, 62-byte blocks |
//! | `RSA 2048` | plaintext, 190-byte blocks |
//! | `RSA 4096` | plaintext, 446-byte blocks |
//! | `RSA 8192` | plaintext, 958-byte blocks |
//! | `AES 128` | plaintext x 10 |
//! | `AES 256` | plaintext x 10 |

// Modules
mod error;
mod types;
mod internal;

mod asymmetric;
mod symmetric;
mod timer;
mod config;
mod runner;
mod report;

// Re-export error types
pub use error::{Error, Result};

// Re-export all public types
pub use types::{
    Algorithm,
    BenchmarkCase,
    DurationSample,
    ResultTable,
};

// Re-export configuration
pub use config::{
    BenchmarkConfig,
    DEFAULT_CASES,
    DEFAULT_OUTPUT,
    DEFAULT_REPETITIONS,
    DEFAULT_SENTENCE,
    DEFAULT_SENTENCE_REPEAT,
    DEFAULT_SYMMETRIC_SCALE,
};

// Re-export RSA functions
pub use asymmetric::{
    max_oaep_block_size,
    split_into_blocks,
    encrypt_blocks,
    decrypt_blocks,
    rsa_round_trip,
};

// Re-export AES functions
pub use symmetric::{
    aes_cbc_encrypt,
    aes_cbc_decrypt,
    aes_round_trip,
    AES_BLOCK_SIZE,
    AES_KEY_SIZES,
};

// Re-export timing and runner functions
pub use timer::measure;
pub use runner::{
    run_repeated,
    run_case,
    run_suite,
};

// Re-export report functions
pub use report::{
    format_seconds,
    render_console,
    write_spreadsheet,
    export_results,
    ReportRow,
    ReportSheet,
    SECONDS_FORMAT,
    SHEET_NAME,
};

//! Benchmark run configuration.
//!
//! A [`BenchmarkConfig`] is fixed before the first case runs. Everything
//! that could make the run fail halfway for a configuration reason is
//! checked up front by [`BenchmarkConfig::validate`].

use std::path::PathBuf;

use crate::asymmetric::max_oaep_block_size;
use crate::error::{Error, Result};
use crate::symmetric::AES_KEY_SIZES;
use crate::types::{Algorithm, BenchmarkCase};

/// Sentence repeated to build the default plaintext.
pub const DEFAULT_SENTENCE: &str =
    "RSA eh um algoritmo que leva o nome de 3 professores do MIT: Rivest, Shamir e Adleman ";

/// How many times [`DEFAULT_SENTENCE`] is repeated in the default plaintext.
pub const DEFAULT_SENTENCE_REPEAT: usize = 100;

/// Default number of timed repetitions per case.
pub const DEFAULT_REPETITIONS: usize = 3;

/// The symmetric cases encrypt the plaintext repeated this many times.
pub const DEFAULT_SYMMETRIC_SCALE: usize = 10;

/// Default spreadsheet path.
pub const DEFAULT_OUTPUT: &str = "results.xlsx";

/// Cases run when none are given explicitly.
pub const DEFAULT_CASES: [BenchmarkCase; 6] = [
    BenchmarkCase::rsa(1024),
    BenchmarkCase::rsa(2048),
    BenchmarkCase::rsa(4096),
    BenchmarkCase::rsa(8192),
    BenchmarkCase::aes(128),
    BenchmarkCase::aes(256),
];

/// Everything a benchmark run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    /// Cases to run, in report order
    pub cases: Vec<BenchmarkCase>,
    /// Timed repetitions per case
    pub repetitions: usize,
    /// Payload shared by every case
    pub plaintext: Vec<u8>,
    /// Repeat factor applied to the payload for symmetric cases
    pub symmetric_scale: usize,
    /// Where the spreadsheet is written
    pub output: PathBuf,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            cases: DEFAULT_CASES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            plaintext: DEFAULT_SENTENCE.repeat(DEFAULT_SENTENCE_REPEAT).into_bytes(),
            symmetric_scale: DEFAULT_SYMMETRIC_SCALE,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BenchmarkConfig {
    /// Replace the case list.
    pub fn with_cases(mut self, cases: Vec<BenchmarkCase>) -> Self {
        self.cases = cases;
        self
    }

    /// Set the repetition count.
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Replace the payload.
    pub fn with_plaintext(mut self, plaintext: impl Into<Vec<u8>>) -> Self {
        self.plaintext = plaintext.into();
        self
    }

    /// Set the symmetric payload repeat factor.
    pub fn with_symmetric_scale(mut self, scale: usize) -> Self {
        self.symmetric_scale = scale;
        self
    }

    /// Set the spreadsheet path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Check the configuration before anything is run.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::InvalidInput(
                "repetitions must be at least 1".to_string(),
            ));
        }
        if self.cases.is_empty() {
            return Err(Error::InvalidInput("no benchmark cases configured".to_string()));
        }
        if self.plaintext.is_empty() {
            return Err(Error::InvalidInput("plaintext must not be empty".to_string()));
        }
        if self.symmetric_scale == 0 {
            return Err(Error::InvalidInput(
                "symmetric scale must be at least 1".to_string(),
            ));
        }

        for (i, case) in self.cases.iter().enumerate() {
            validate_case(case)?;
            if self.cases[..i].contains(case) {
                return Err(Error::InvalidInput(format!(
                    "{} is configured more than once",
                    case
                )));
            }
        }

        Ok(())
    }

    /// Payload a case of the given algorithm operates on.
    pub fn payload_for(&self, algorithm: Algorithm) -> Vec<u8> {
        match algorithm {
            Algorithm::Rsa => self.plaintext.clone(),
            Algorithm::Aes => self.symmetric_payload(),
        }
    }

    /// The plaintext repeated [`symmetric_scale`](Self::symmetric_scale) times.
    pub fn symmetric_payload(&self) -> Vec<u8> {
        self.plaintext.repeat(self.symmetric_scale)
    }
}

fn validate_case(case: &BenchmarkCase) -> Result<()> {
    match case.algorithm {
        Algorithm::Rsa => {
            max_oaep_block_size(case.key_bits)?;
        }
        Algorithm::Aes => {
            if !AES_KEY_SIZES.contains(&case.key_bits) {
                return Err(Error::InvalidInput(format!(
                    "{}: AES key size must be one of 128, 192 or 256",
                    case
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.plaintext.len(), DEFAULT_SENTENCE.len() * 100);
        assert_eq!(config.symmetric_payload().len(), config.plaintext.len() * 10);
        assert_eq!(config.output, PathBuf::from("results.xlsx"));
    }

    #[test]
    fn test_rejects_zero_repetitions() {
        let config = BenchmarkConfig::default().with_repetitions(0);
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_bad_cases() {
        let base = BenchmarkConfig::default();

        assert!(base.clone().with_cases(vec![]).validate().is_err());
        assert!(base.clone().with_cases(vec![BenchmarkCase::aes(64)]).validate().is_err());
        assert!(base.clone().with_cases(vec![BenchmarkCase::rsa(512)]).validate().is_err());
        assert!(base.clone().with_cases(vec![BenchmarkCase::rsa(8192)]).validate().is_ok());
        assert!(base.clone().with_plaintext(Vec::new()).validate().is_err());
        assert!(base.with_symmetric_scale(0).validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_cases() {
        let config = BenchmarkConfig::default().with_cases(vec![
            BenchmarkCase::rsa(1024),
            BenchmarkCase::aes(128),
            BenchmarkCase::rsa(1024),
        ]);
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));

        let config = BenchmarkConfig::default()
            .with_cases(vec![BenchmarkCase::rsa(1024), BenchmarkCase::aes(128)]);
        assert!(config.validate().is_ok());
    }
}

//! Public type definitions for the cipherbench library.
//!
//! This module contains the data structures that flow between the
//! benchmark runner and the report exporter: what to measure
//! ([`BenchmarkCase`]), one case's timings ([`DurationSample`]) and the
//! collected results of a whole run ([`ResultTable`]).

use crate::asymmetric::rsa_round_trip;
use crate::error::{Error, Result};
use crate::symmetric::aes_round_trip;

/// Algorithm families that can be benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSA with OAEP (SHA-256) padding, block by block
    Rsa,
    /// AES in CBC mode with PKCS7 padding
    Aes,
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    /// Parse algorithm from string (case-insensitive).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rsa" => Ok(Algorithm::Rsa),
            "aes" => Ok(Algorithm::Aes),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Algorithm {
    /// Get the display name used in report labels.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Rsa => "RSA",
            Algorithm::Aes => "AES",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One configuration to measure: an algorithm at a key size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BenchmarkCase {
    /// Algorithm family
    pub algorithm: Algorithm,
    /// Key size in bits
    pub key_bits: usize,
}

impl BenchmarkCase {
    /// Create a new case.
    pub const fn new(algorithm: Algorithm, key_bits: usize) -> Self {
        Self {
            algorithm,
            key_bits,
        }
    }

    /// RSA case at the given modulus size.
    pub const fn rsa(key_bits: usize) -> Self {
        Self::new(Algorithm::Rsa, key_bits)
    }

    /// AES case at the given key size.
    pub const fn aes(key_bits: usize) -> Self {
        Self::new(Algorithm::Aes, key_bits)
    }

    /// Report label, e.g. `"RSA 1024"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.algorithm.name(), self.key_bits)
    }

    /// Run one full round trip of this case over `plaintext`.
    ///
    /// Key generation is part of the operation. The recovered plaintext is
    /// dropped; only success or failure matters to the runner.
    pub fn execute(&self, plaintext: &[u8]) -> Result<()> {
        match self.algorithm {
            Algorithm::Rsa => rsa_round_trip(self.key_bits, plaintext).map(drop),
            Algorithm::Aes => aes_round_trip(self.key_bits, plaintext).map(drop),
        }
    }
}

impl std::fmt::Display for BenchmarkCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.algorithm.name(), self.key_bits)
    }
}

impl std::str::FromStr for BenchmarkCase {
    type Err = Error;

    /// Parse a case such as `rsa:2048`, `aes-256` or `RSA 4096`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (algorithm, bits) = s
            .trim()
            .split_once(|c: char| c == ':' || c == '-' || c == ' ')
            .ok_or_else(|| {
                Error::InvalidInput(format!("expected <algorithm>:<bits>, got '{}'", s))
            })?;

        let algorithm: Algorithm = algorithm.parse()?;
        let key_bits = bits
            .trim()
            .parse::<usize>()
            .map_err(|e| Error::InvalidInput(format!("invalid key size '{}': {}", bits, e)))?;

        Ok(Self::new(algorithm, key_bits))
    }
}

/// Elapsed times of every repetition of one case, in seconds.
///
/// Never empty. The mean is always derived from the stored values.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSample {
    secs: Vec<f64>,
}

impl DurationSample {
    /// Build a sample from per-repetition durations in seconds.
    pub fn from_secs(secs: Vec<f64>) -> Result<Self> {
        if secs.is_empty() {
            return Err(Error::InvalidInput(
                "a duration sample needs at least one measurement".to_string(),
            ));
        }
        Ok(Self { secs })
    }

    /// Build a sample from [`std::time::Duration`] values.
    pub fn from_durations(durations: &[std::time::Duration]) -> Result<Self> {
        Self::from_secs(durations.iter().map(|d| d.as_secs_f64()).collect())
    }

    /// Per-repetition durations in execution order.
    pub fn values(&self) -> &[f64] {
        &self.secs
    }

    /// Number of repetitions.
    pub fn len(&self) -> usize {
        self.secs.len()
    }

    /// Arithmetic mean, `sum / len`.
    pub fn mean(&self) -> f64 {
        self.secs.iter().sum::<f64>() / self.secs.len() as f64
    }

    /// Fastest repetition.
    pub fn min(&self) -> f64 {
        self.secs.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Slowest repetition.
    pub fn max(&self) -> f64 {
        self.secs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Results of a run, keyed by case label in the order cases completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    entries: Vec<(String, DurationSample)>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the sample for `label`.
    ///
    /// A label that is already present has its sample replaced in place,
    /// keeping its original position.
    pub fn insert(&mut self, label: impl Into<String>, sample: DurationSample) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = sample,
            None => self.entries.push((label, sample)),
        }
    }

    /// Look up the sample for `label`.
    pub fn get(&self, label: &str) -> Option<&DurationSample> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, sample)| sample)
    }

    /// Iterate over `(label, sample)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DurationSample)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), s))
    }

    /// Number of cases recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no case has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_parsing() {
        let case: BenchmarkCase = "rsa:2048".parse().unwrap();
        assert_eq!(case, BenchmarkCase::rsa(2048));

        let case: BenchmarkCase = "AES-256".parse().unwrap();
        assert_eq!(case, BenchmarkCase::aes(256));

        let case: BenchmarkCase = "RSA 4096".parse().unwrap();
        assert_eq!(case.label(), "RSA 4096");

        assert!("des:56".parse::<BenchmarkCase>().is_err());
        assert!("rsa".parse::<BenchmarkCase>().is_err());
        assert!("rsa:big".parse::<BenchmarkCase>().is_err());
    }

    #[test]
    fn test_sample_mean() {
        let sample = DurationSample::from_secs(vec![1.0, 2.0, 3.0]).unwrap();
        assert!((sample.mean() - 2.0).abs() < 1e-12);
        assert_eq!(sample.min(), 1.0);
        assert_eq!(sample.max(), 3.0);

        let single = DurationSample::from_secs(vec![0.25]).unwrap();
        assert!((single.mean() - 0.25).abs() < 1e-12);

        assert!(DurationSample::from_secs(Vec::new()).is_err());
    }

    #[test]
    fn test_table_keeps_order() {
        let mut table = ResultTable::new();
        table.insert("RSA 1024", DurationSample::from_secs(vec![1.0]).unwrap());
        table.insert("AES 128", DurationSample::from_secs(vec![2.0]).unwrap());
        table.insert("RSA 1024", DurationSample::from_secs(vec![3.0]).unwrap());

        let labels: Vec<&str> = table.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["RSA 1024", "AES 128"]);
        assert_eq!(table.get("RSA 1024").unwrap().values(), &[3.0]);
    }
}

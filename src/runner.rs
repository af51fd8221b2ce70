//! Benchmark runner.
//!
//! Runs an operation a fixed number of times, one repetition after the
//! other, and records how long each repetition took. There is no warm-up
//! and no fault isolation: the first failing repetition ends the case and
//! the error is returned to the caller.

use crate::config::BenchmarkConfig;
use crate::error::{Error, Result};
use crate::timer::measure;
use crate::types::{BenchmarkCase, DurationSample, ResultTable};

/// Run `op` `repetitions` times and collect the elapsed time of each run.
///
/// # Arguments
/// * `op` - The unit of work; only its success or failure is observed
/// * `repetitions` - How many times to run it; must be at least 1
///
/// # Returns
/// One duration per repetition, in execution order.
///
/// # Example
///
/// ```
/// use cipherbench::run_repeated;
///
/// let sample = run_repeated(|| Ok(()), 3).unwrap();
/// assert_eq!(sample.len(), 3);
/// ```
pub fn run_repeated<F>(mut op: F, repetitions: usize) -> Result<DurationSample>
where
    F: FnMut() -> Result<()>,
{
    if repetitions == 0 {
        return Err(Error::InvalidInput(
            "repetitions must be at least 1".to_string(),
        ));
    }

    let mut durations = Vec::with_capacity(repetitions);
    for run in 1..=repetitions {
        let (outcome, elapsed) = measure(&mut op);
        if let Err(e) = outcome {
            tracing::warn!(
                run,
                elapsed_secs = elapsed.as_secs_f64(),
                error = %e,
                "repetition failed, abandoning remaining runs"
            );
            return Err(e);
        }
        tracing::debug!(run, elapsed_secs = elapsed.as_secs_f64(), "repetition finished");
        durations.push(elapsed);
    }

    DurationSample::from_durations(&durations)
}

/// Time one case with the payload and repetition count from `config`.
pub fn run_case(case: &BenchmarkCase, config: &BenchmarkConfig) -> Result<DurationSample> {
    let payload = config.payload_for(case.algorithm);

    tracing::info!(
        case = %case,
        payload_bytes = payload.len(),
        repetitions = config.repetitions,
        "running benchmark case"
    );

    let sample = run_repeated(|| case.execute(&payload), config.repetitions)?;

    tracing::info!(
        case = %case,
        mean_secs = sample.mean(),
        min_secs = sample.min(),
        max_secs = sample.max(),
        "benchmark case finished"
    );
    Ok(sample)
}

/// Validate `config` and run every case in order.
///
/// # Returns
/// A table with one entry per case, labelled as in [`BenchmarkCase::label`].
pub fn run_suite(config: &BenchmarkConfig) -> Result<ResultTable> {
    config.validate()?;

    let mut table = ResultTable::new();
    for case in &config.cases {
        let sample = run_case(case, config)?;
        table.insert(case.label(), sample);
    }

    Ok(table)
}

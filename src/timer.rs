//! Wall-clock timing of a single operation.
//!
//! [`measure`] wraps a closure with a monotonic [`Instant`] and hands back
//! both the closure's result and how long it ran. The elapsed time is taken
//! after the closure returns, whatever it returned, so a failing operation
//! still reports the time it spent before failing.

use std::time::{Duration, Instant};

/// Run `op` once and measure its wall-clock duration.
///
/// # Example
///
/// ```
/// use cipherbench::measure;
///
/// let (sum, elapsed) = measure(|| (1..=10u32).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(elapsed.as_secs_f64() >= 0.0);
/// ```
pub fn measure<F, R>(op: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = op();
    let elapsed = start.elapsed();
    (result, elapsed)
}

//! Internal helper functions.

use rand::rngs::OsRng;
use rand::RngCore;

/// Fill a fresh buffer of `len` bytes from the operating system RNG.
pub(crate) fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Render seconds with the fixed six-decimal precision used in reports.
pub(crate) fn secs_to_string(secs: f64) -> String {
    format!("{:.6}", secs)
}

use std::panic;
use std::thread;

use tracing::{debug, trace};

use crate::split::{partial_sum, split_halves};

/// Sums `slice` by summing each half on its own thread.
///
/// Empty input returns 0 without spawning anything. Both workers borrow
/// the caller's slice through a thread scope; the caller blocks until both
/// have been joined. A panicking worker (e.g. overflow in a debug build)
/// re-panics on the calling thread.
pub fn concurrent_sum(slice: &[i64]) -> i64 {
    if slice.is_empty() {
        return 0;
    }
    let (a, b) = split_halves(slice);
    debug!(len = slice.len(), mid = a.len(), "splitting input");

    let (a_result, b_result) = thread::scope(|s| {
        let a_handle = s.spawn(|| partial_sum(a));
        let b_handle = s.spawn(|| partial_sum(b));
        (a_handle.join(), b_handle.join())
    });
    let a_sum = a_result.unwrap_or_else(|payload| panic::resume_unwind(payload));
    let b_sum = b_result.unwrap_or_else(|payload| panic::resume_unwind(payload));
    trace!(a_sum, b_sum, "partial sums joined");

    let total = a_sum + b_sum;
    debug!(total, "combined");
    total
}

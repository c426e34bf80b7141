use std::panic;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace};

use crate::error::SumError;
use crate::split::{partial_sum, split_halves};

// Each worker sums its half and reports the result to the caller.
fn worker(half: &[i64], sender: Sender<i64>) {
    let sum = partial_sum(half);
    trace!(len = half.len(), sum, "worker reporting");
    // The receiver only goes away once both values arrived or the scope unwinds.
    let _ = sender.send(sum);
}

// Waits for exactly two partial sums. A worker that returned without
// sending closes its sender, which surfaces here as a disconnected channel.
fn collect(receiver: &Receiver<i64>) -> Result<i64, SumError> {
    let first = receiver.recv().map_err(|_| SumError::WorkerLost)?;
    let second = receiver.recv().map_err(|_| SumError::WorkerLost)?;
    Ok(first + second)
}

/// Two-part sum where the join barrier is a channel: the caller receives
/// one message per worker instead of joining thread handles.
pub fn channel_sum(slice: &[i64]) -> Result<i64, SumError> {
    if slice.is_empty() {
        return Ok(0);
    }
    let (a, b) = split_halves(slice);
    debug!(len = slice.len(), mid = a.len(), "splitting input");

    let (sender, receiver) = mpsc::channel();
    let (collected, a_joined, b_joined) = thread::scope(|s| {
        let a_sender = sender.clone();
        let a_handle = s.spawn(move || worker(a, a_sender));
        let b_handle = s.spawn(move || worker(b, sender));
        let collected = collect(&receiver);
        (collected, a_handle.join(), b_handle.join())
    });
    // A panicked worker also disconnects; its payload wins over `WorkerLost`.
    a_joined.unwrap_or_else(|payload| panic::resume_unwind(payload));
    b_joined.unwrap_or_else(|payload| panic::resume_unwind(payload));
    let total = collected?;
    debug!(total, "combined");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(channel_sum(&[]), Ok(0));
    }

    #[test]
    fn odd() {
        assert_eq!(channel_sum(&[2, 3, 4, 5, 6, 7, 8, 9, 10]), Ok(54));
    }

    #[test]
    fn single() {
        assert_eq!(channel_sum(&[42]), Ok(42));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn worker_panic_reaches_the_caller() {
        let _ = channel_sum(&[0, i64::MAX, 1]);
    }

    #[test]
    fn worker_panic_is_not_reported_as_lost() {
        let result = panic::catch_unwind(|| channel_sum(&[0, i64::MAX, 1]));
        if cfg!(debug_assertions) {
            let payload = result.unwrap_err();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap();
            assert!(message.contains("overflow"), "{}", message);
        } else {
            assert_eq!(result.unwrap(), Ok(i64::MIN));
        }
    }

    #[test]
    fn lost_worker_is_reported() {
        let (sender, receiver) = mpsc::channel();
        sender.send(7).unwrap();
        drop(sender);
        assert_eq!(collect(&receiver), Err(SumError::WorkerLost));
    }
}

use std::ops::Range;
use std::panic;
use std::sync::Arc;

use tokio::task::{self, JoinError};
use tracing::{debug, trace};

use crate::error::SumError;
use crate::split::{half_ranges, partial_sum};

fn spawn_half(input: Arc<[i64]>, range: Range<usize>) -> task::JoinHandle<i64> {
    task::spawn_blocking(move || {
        let sum = partial_sum(&input[range.clone()]);
        trace!(?range, sum, "task finished");
        sum
    })
}

fn joined(result: Result<i64, JoinError>) -> Result<i64, SumError> {
    match result {
        Ok(sum) => Ok(sum),
        Err(e) if e.is_panic() => panic::resume_unwind(e.into_panic()),
        Err(_) => Err(SumError::Cancelled),
    }
}

/// Async two-part sum. Each half is summed on tokio's blocking pool and
/// both tasks are awaited together before the partial sums are combined.
pub async fn concurrent_sum_async(input: Arc<[i64]>) -> Result<i64, SumError> {
    if input.is_empty() {
        return Ok(0);
    }
    let (a_range, b_range) = half_ranges(input.len());
    debug!(len = input.len(), mid = a_range.end, "splitting input");

    let a = spawn_half(Arc::clone(&input), a_range);
    let b = spawn_half(input, b_range);
    let (a_result, b_result) = tokio::join!(a, b);

    let total = joined(a_result)? + joined(b_result)?;
    debug!(total, "combined");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty() {
        assert_eq!(concurrent_sum_async(Arc::from(Vec::new())).await, Ok(0));
    }

    #[tokio::test]
    async fn even() {
        let input: Arc<[i64]> = (1..=10).collect();
        assert_eq!(concurrent_sum_async(input).await, Ok(55));
    }

    #[tokio::test]
    async fn odd() {
        let input: Arc<[i64]> = (2..=10).collect();
        assert_eq!(concurrent_sum_async(input).await, Ok(54));
    }

    #[tokio::test]
    async fn single() {
        assert_eq!(concurrent_sum_async(Arc::from([42])).await, Ok(42));
    }

    #[tokio::test]
    async fn aborted_task_is_cancelled() {
        let handle = task::spawn(std::future::pending::<i64>());
        handle.abort();
        assert_eq!(joined(handle.await), Err(SumError::Cancelled));
    }
}

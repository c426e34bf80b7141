use std::ops::Range;

/// Splits `slice` into two contiguous halves at `len / 2`.
///
/// For odd lengths the second half holds the extra element, so a single
/// element ends up on the right and the left half is empty.
pub fn split_halves<T>(slice: &[T]) -> (&[T], &[T]) {
    let (a, b) = half_ranges(slice.len());
    (&slice[a], &slice[b])
}

/// Index ranges of the two halves of a sequence of length `len`.
pub fn half_ranges(len: usize) -> (Range<usize>, Range<usize>) {
    let mid = len / 2;
    (0..mid, mid..len)
}

pub fn partial_sum(half: &[i64]) -> i64 {
    half.iter().sum()
}

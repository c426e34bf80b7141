//! Two-part concurrent sum: split a slice at its midpoint, sum each half on
//! its own worker, join both and add the partial sums.

pub mod channels;
pub mod error;
pub mod input;
pub mod report;
pub mod split;
pub mod strategy;
pub mod tasks;
pub mod threads;

pub use error::SumError;
pub use input::parse_numbers;
pub use report::SumReport;
pub use strategy::Strategy;
pub use tasks::concurrent_sum_async;
pub use threads::concurrent_sum;

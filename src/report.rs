use serde::{Deserialize, Serialize};

use crate::split::split_halves;
use crate::strategy::Strategy;

/// Summary of one computation, printed by the CLI with `--json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumReport {
    pub strategy: Strategy,
    pub len: usize,
    pub halves: [usize; 2],
    pub total: i64,
}

impl SumReport {
    pub fn new(strategy: Strategy, input: &[i64], total: i64) -> Self {
        let (a, b) = split_halves(input);
        Self {
            strategy,
            len: input.len(),
            halves: [a.len(), b.len()],
            total,
        }
    }
}

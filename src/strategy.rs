use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SumError;
use crate::{channels, tasks, threads};

/// Which primitive carries the two workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Threads,
    Channels,
    Tasks,
}

impl Strategy {
    pub async fn run(self, input: Arc<[i64]>) -> Result<i64, SumError> {
        match self {
            Strategy::Threads => Ok(threads::concurrent_sum(&input)),
            Strategy::Channels => channels::channel_sum(&input),
            Strategy::Tasks => tasks::concurrent_sum_async(input).await,
        }
    }
}

impl FromStr for Strategy {
    type Err = SumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "threads" => Ok(Strategy::Threads),
            "channels" => Ok(Strategy::Channels),
            "tasks" => Ok(Strategy::Tasks),
            _ => Err(SumError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Threads => "threads",
            Strategy::Channels => "channels",
            Strategy::Tasks => "tasks",
        };
        f.write_str(name)
    }
}

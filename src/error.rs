use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SumError {
    #[error("a worker exited before reporting its partial sum")]
    WorkerLost,

    #[error("partial sum task was cancelled")]
    Cancelled,

    #[error("unknown strategy: {0} (expected threads, channels or tasks)")]
    UnknownStrategy(String),

    #[error("not an integer: {token}")]
    Parse { token: String },
}

use serde::{Deserialize, Serialize};

/// A refill rate of `permits` tokens per `period_seconds`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate {
    pub permits: u64,
    pub period_seconds: u64,
}

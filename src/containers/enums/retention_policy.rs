use serde::{Deserialize, Serialize};

/// What a timeline group sheds after each insert.
///
/// One policy per cache instance: either a rolling time window or a cap on
/// the newest N members. Wanting both usually means wanting two caches.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Drop members older than the trailing window of this many days.
    TimeSpanDays(u32),
    /// Keep only the most recent N members by rank.
    MaxLength(usize),
}

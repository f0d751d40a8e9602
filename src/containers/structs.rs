//! Container structures.

/// Counter keyed by the calendar date.
pub mod daily_counter;

/// Per-group FIFO lists.
pub mod fifo_group_cache;

/// Hash of integer counters.
pub mod redis_counter;

/// Hash-backed field/value map.
pub mod redis_dict;

/// Double-ended list.
pub mod redis_list;

/// Unordered unique members.
pub mod redis_set;

/// Score-ordered members.
pub mod redis_sorted_set;

/// Per-group time-scored sorted sets.
pub mod timeline_group_cache;

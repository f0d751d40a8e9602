//! Container operations.

/// Daily counter rotation and updates.
pub mod daily_counter;

/// FIFO group cache operations.
pub mod fifo_group_cache;

/// Counter hash operations.
pub mod redis_counter;

/// Dictionary cache operations.
pub mod redis_dict;

/// List cache operations.
pub mod redis_list;

/// Set cache operations.
pub mod redis_set;

/// Sorted-set cache operations.
pub mod redis_sorted_set;

/// Timeline group cache operations.
pub mod timeline_group_cache;

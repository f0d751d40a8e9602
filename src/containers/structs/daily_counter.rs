use chrono::NaiveDate;
use crate::client::structs::redis_client::RedisClient;

/// Counter whose key embeds the calendar date, rotating at local midnight.
///
/// No aggregation across days is provided; a pinned `specific_date` reads or
/// writes one historical day while its key still exists.
#[derive(Debug, Clone)]
pub struct DailyCounter {
    pub(crate) client: RedisClient,
    pub(crate) keyword: String,
    pub(crate) expire_secs: i64,
    pub(crate) specific_date: Option<NaiveDate>,
}

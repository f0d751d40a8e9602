use chrono::{Local, NaiveDate};
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::containers::DAY_SECONDS;
use crate::containers::structs::daily_counter::DailyCounter;

impl DailyCounter {
    pub fn new(client: RedisClient, keyword: &str) -> DailyCounter {
        Self::with_options(client, keyword, DAY_SECONDS, None)
    }

    pub fn with_options(
        client: RedisClient,
        keyword: &str,
        expire_secs: i64,
        specific_date: Option<NaiveDate>,
    ) -> DailyCounter {
        DailyCounter {
            client,
            keyword: keyword.to_string(),
            expire_secs,
            specific_date,
        }
    }

    /// Key for the counted day: today in local time unless a date is pinned.
    pub fn counter_key(&self) -> String {
        let date = self.specific_date.unwrap_or_else(|| Local::now().date_naive());
        format!("redis_daily_counter_key_{}_{}", self.keyword, date)
    }

    pub async fn incr(&self, delta: i64) -> Result<i64, CacheError> {
        let key = self.counter_key();
        let value = self.client.incr_by(&key, delta).await?;
        self.client.expire(&key, self.expire_secs).await?;
        Ok(value)
    }

    pub async fn value(&self) -> Result<i64, CacheError> {
        let value: Option<i64> = self.client.get(&self.counter_key()).await?;
        Ok(value.unwrap_or(0))
    }
}

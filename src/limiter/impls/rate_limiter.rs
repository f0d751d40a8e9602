use once_cell::sync::Lazy;
use redis::Script;
use crate::client::errors::CacheError;
use crate::client::structs::redis_client::RedisClient;
use crate::limiter::structs::rate::Rate;
use crate::limiter::structs::rate_decision::RateDecision;
use crate::limiter::structs::rate_limiter::RateLimiter;

/// Refill-and-take as one atomic unit, clocked server-side so every caller
/// sees the same time. Tokens accrue fractionally; the wait time is returned
/// as a string because the scripting bridge truncates numeric replies to
/// integers.
const TOKEN_BUCKET_SCRIPT: &str = r#"
local key = KEYS[1]
local capacity = tonumber(ARGV[1])
local permits = tonumber(ARGV[2])
local period = tonumber(ARGV[3])
local requested = tonumber(ARGV[4])
local rate = permits / period

local time = redis.call('TIME')
local now = tonumber(time[1]) + tonumber(time[2]) / 1000000

local bucket = redis.call('HMGET', key, 'tokens', 'stamp')
local tokens = tonumber(bucket[1])
local stamp = tonumber(bucket[2])
if tokens == nil or stamp == nil then
    tokens = capacity
    stamp = now
end

local elapsed = now - stamp
if elapsed > 0 then
    tokens = math.min(capacity, tokens + elapsed * rate)
end

local admitted = 0
local wait = '0'
if tokens >= requested then
    admitted = 1
    tokens = tokens - requested
else
    wait = tostring((requested - tokens) / rate)
end

redis.call('HSET', key, 'tokens', tokens, 'stamp', now)
redis.call('EXPIRE', key, math.ceil(capacity / rate) + period)
return {admitted, wait}
"#;

static TOKEN_BUCKET: Lazy<Script> = Lazy::new(|| Script::new(TOKEN_BUCKET_SCRIPT));

impl RateLimiter {
    /// `rate_spec` follows `<count>/<multiplier><unit>` with unit s/m/h/d,
    /// e.g. `"5/1s"`. The bucket starts full, so up to `capacity` calls can
    /// burst through a cold key.
    pub fn new(client: RedisClient, key: &str, capacity: u64, rate_spec: &str) -> Result<RateLimiter, CacheError> {
        let rate = Rate::parse(rate_spec)?;
        if capacity == 0 {
            return Err(CacheError::Parameter("rate limiter capacity must be positive".to_string()));
        }
        Ok(RateLimiter {
            client,
            cache_key: format!("redis_throttle_{}", key),
            capacity,
            rate,
        })
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Takes `tokens` from the bucket, or reports the wait until they will
    /// have accrued. Requests above `capacity` can never be admitted and are
    /// rejected outright.
    pub async fn acquire(&self, tokens: u64) -> Result<RateDecision, CacheError> {
        if tokens == 0 {
            return Err(CacheError::Parameter("cannot acquire zero tokens".to_string()));
        }
        if tokens > self.capacity {
            return Err(CacheError::Parameter(format!(
                "cannot acquire {} tokens from a bucket of capacity {}",
                tokens, self.capacity
            )));
        }
        let mut lease = self.client.lease().await?;
        let (admitted, wait): (i64, String) = TOKEN_BUCKET
            .key(&self.cache_key)
            .arg(self.capacity)
            .arg(self.rate.permits)
            .arg(self.rate.period_seconds)
            .arg(tokens)
            .invoke_async(&mut *lease)
            .await?;
        let wait_seconds: f64 = wait
            .parse()
            .map_err(|_| CacheError::Serialization(format!("unparseable wait time from throttle script: {}", wait)))?;
        Ok(RateDecision {
            admitted: admitted == 1,
            wait_seconds,
        })
    }

    /// Drops the bucket; the next acquire sees it full again.
    pub async fn reset(&self) -> Result<(), CacheError> {
        self.client.delete(&[self.cache_key.as_str()]).await?;
        Ok(())
    }
}

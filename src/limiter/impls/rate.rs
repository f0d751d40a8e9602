use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::client::errors::CacheError;
use crate::limiter::structs::rate::Rate;

/// `<count>/<multiplier><unit>`, multiplier optional: "5/1s", "100/m", "20/12h".
static RATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)/([0-9]*)([smhd])$").unwrap());

impl Rate {
    pub fn parse(spec: &str) -> Result<Rate, CacheError> {
        let captures = RATE_RE
            .captures(spec)
            .ok_or_else(|| CacheError::Parameter(format!("malformed rate spec: {}", spec)))?;
        let permits: u64 = captures[1]
            .parse()
            .map_err(|_| CacheError::Parameter(format!("rate count out of range: {}", spec)))?;
        let unit_seconds: u64 = match &captures[3] {
            "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 24 * 60 * 60,
            _ => unreachable!("regex only admits smhd"),
        };
        let multiplier: u64 = if captures[2].is_empty() {
            1
        } else {
            captures[2]
                .parse()
                .map_err(|_| CacheError::Parameter(format!("rate multiplier out of range: {}", spec)))?
        };
        let period_seconds = unit_seconds
            .checked_mul(multiplier)
            .ok_or_else(|| CacheError::Parameter(format!("rate period overflows: {}", spec)))?;
        if permits == 0 || period_seconds == 0 {
            return Err(CacheError::Parameter(format!("rate must be positive: {}", spec)));
        }
        Ok(Rate { permits, period_seconds })
    }

    pub fn tokens_per_second(&self) -> f64 {
        self.permits as f64 / self.period_seconds as f64
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}s", self.permits, self.period_seconds)
    }
}

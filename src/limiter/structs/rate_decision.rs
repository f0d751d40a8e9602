/// Outcome of a token acquisition.
///
/// `wait_seconds` is 0.0 on admission; on denial it is the time until the
/// requested tokens will have accrued, assuming nobody else drains the
/// bucket first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateDecision {
    pub admitted: bool,
    pub wait_seconds: f64,
}

//! Timing for the replay binary.

use anyhow::{ensure, Result};
use std::time::Duration;

const MIN_FRAME_PERIOD: Duration = Duration::from_nanos(1);
const MAX_FRAME_PERIOD: Duration = Duration::from_secs(86_400);

/// Wall-clock period between replayed frames for `rate` frames per second.
///
/// The period is clamped to `[1 ns, 1 day]`; tokio rejects a zero period.
pub fn frame_period(rate: f64) -> Result<Duration> {
    ensure!(
        rate.is_finite() && rate > 0.0,
        "--rate must be a positive number, got {rate}"
    );
    let period = Duration::try_from_secs_f64(1.0 / rate).unwrap_or(MAX_FRAME_PERIOD);
    Ok(period.clamp(MIN_FRAME_PERIOD, MAX_FRAME_PERIOD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_period_for_default_rate() {
        assert_eq!(frame_period(4.0).unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_huge_rate_clamps_to_one_nanosecond() {
        assert_eq!(frame_period(1e300).unwrap(), Duration::from_nanos(1));
        assert_eq!(frame_period(f64::MAX).unwrap(), Duration::from_nanos(1));
    }

    #[test]
    fn test_tiny_rate_clamps_to_one_day() {
        assert_eq!(frame_period(1e-320).unwrap(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_invalid_rate_is_an_error() {
        for rate in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(frame_period(rate).is_err(), "rate {rate}");
        }
    }
}

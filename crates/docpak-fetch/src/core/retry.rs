use std::time::Duration;

/// Calculate the delay before a retry attempt using exponential backoff.
///
/// The delay formula is `base * 2^retry_count`, with `retry_count`
/// 0-indexed (0 = delay before the first retry). Saturates instead of
/// overflowing for large counts.
pub fn retry_delay(retry_count: u32, base: Duration) -> Duration {
    let multiplier = 2_u32.saturating_pow(retry_count);
    base.saturating_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_per_retry() {
        let base = Duration::from_millis(100);
        assert_eq!(retry_delay(0, base), Duration::from_millis(100));
        assert_eq!(retry_delay(1, base), Duration::from_millis(200));
        assert_eq!(retry_delay(2, base), Duration::from_millis(400));
        assert_eq!(retry_delay(3, base), Duration::from_millis(800));
    }

    #[test]
    fn zero_base_stays_zero() {
        assert_eq!(retry_delay(10, Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn large_counts_saturate() {
        let delay = retry_delay(64, Duration::from_secs(u64::MAX / 2));
        assert!(delay > Duration::ZERO);
    }
}

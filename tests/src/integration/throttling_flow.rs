//! # Throttling Flow
//!
//! Many request threads share one limiter; unrelated clients never affect
//! each other and a hammering client is held to its budget.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use ag_07_rate_limiter::{Metrics, RateLimitConfig, RateLimiter};
    use shared_types::ManualTimeSource;

    #[test]
    fn concurrent_clients_each_get_their_own_budget() {
        let clock = Arc::new(ManualTimeSource::new(0));
        let metrics = Arc::new(Metrics::new());
        let limiter = Arc::new(
            RateLimiter::with_metrics(
                RateLimitConfig::new(10, 1_000).unwrap(),
                clock,
                metrics.clone(),
            )
            .unwrap(),
        );

        let handles: Vec<_> = (0..16)
            .map(|t| {
                let limiter = Arc::clone(&limiter);
                thread::spawn(move || {
                    let key = format!("client-{}", t % 4);
                    (0..20).filter(|_| limiter.try_acquire(&key)).count()
                })
            })
            .collect();
        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(admitted, 40, "4 clients x capacity 10");
        assert_eq!(limiter.bucket_count(), 4);
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.buckets_created, 4, "no duplicate buckets per key");
        assert_eq!(snapshot.requests_allowed, 40);
        assert_eq!(snapshot.requests_throttled, 320 - 40);
    }

    #[test]
    fn sustained_rate_after_burst() {
        let clock = Arc::new(ManualTimeSource::new(0));
        let limiter =
            RateLimiter::with_time_source(RateLimitConfig::new(3, 100).unwrap(), clock.clone())
                .unwrap();

        let mut admitted = 0;
        // One request every 10 ms for one second
        for _ in 0..100 {
            if limiter.try_acquire("crawler") {
                admitted += 1;
            }
            clock.advance(10);
        }
        // Burst of 3 plus one token per 100 ms over 990 ms elapsed
        assert_eq!(admitted, 3 + 9);
    }
}

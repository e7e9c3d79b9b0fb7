//! # Sign-up Flow
//!
//! Username availability pre-check through the filter registry, password
//! policy enforcement, and throttling of repeated attempts, exercised by many
//! concurrent registrations.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use ag_01_membership_filter::{
        FilterConfig, FilterRegistry, MembershipFilter, MembershipFilterApi, Metrics, NoOpMetrics,
        SharedMembershipFilter,
    };
    use ag_02_password_strength::{PasswordAnalyzer, StrengthLevel};
    use ag_07_rate_limiter::{presets, RateLimiter};
    use shared_types::ManualTimeSource;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn registry() -> (FilterRegistry, Arc<Metrics>) {
        let metrics = Arc::new(Metrics::new());
        (FilterRegistry::with_metrics(metrics.clone()), metrics)
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn concurrent_registrations_never_lose_a_username() {
        let (registry, _) = registry();
        let registry = Arc::new(registry);
        let config = FilterConfig::new(50_000, 0.01).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                let config = config.clone();
                thread::spawn(move || {
                    let usernames = registry.get_or_create("usernames", &config).unwrap();
                    for i in 0..2_000 {
                        usernames.add(&format!("user-{t}-{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 1, "one filter per domain despite racing first use");
        let usernames = registry.get("usernames").unwrap();
        assert_eq!(usernames.len(), 16_000);
        for t in 0..8 {
            for i in 0..2_000 {
                assert!(
                    usernames.might_contain(&format!("user-{t}-{i}")),
                    "registered username must always be reported"
                );
            }
        }
    }

    #[test]
    fn signup_gate_combines_filter_policy_and_throttle() {
        let (registry, metrics) = registry();
        let config = FilterConfig::new(1_000, 0.01).unwrap();
        let usernames = registry.get_or_create("usernames", &config).unwrap();
        let analyzer = PasswordAnalyzer::default();
        let clock = Arc::new(ManualTimeSource::new(0));
        let limiter = RateLimiter::with_time_source(presets::login_attempts(), clock).unwrap();

        usernames.add("alice");

        let attempt = |name: &str, password: &str| -> Result<(), &'static str> {
            if !limiter.try_acquire("ip:10.0.0.1") {
                return Err("throttled");
            }
            if usernames.might_contain(name) {
                return Err("verify against database");
            }
            if !analyzer.meets_policy(password) {
                return Err("weak password");
            }
            Ok(())
        };

        assert_eq!(attempt("alice", "x"), Err("verify against database"));
        assert_eq!(attempt("bob", "password"), Err("weak password"));
        assert_eq!(attempt("bob", "v7#Lq9!zR2$m"), Ok(()));
        assert_eq!(attempt("carol", "v7#Lq9!zR2$m"), Ok(()));
        assert_eq!(attempt("dave", "v7#Lq9!zR2$m"), Ok(()));
        assert_eq!(attempt("erin", "v7#Lq9!zR2$m"), Err("throttled"));

        assert!(metrics.snapshot().lookups_performed >= 4);
        assert!(analyzer.analyze("v7#Lq9!zR2$m").level >= StrengthLevel::Good);
    }

    #[test]
    fn snapshot_survives_restart() {
        let (original, _) = registry();
        let config = FilterConfig::new(1_000, 0.01).unwrap();
        let emails = original.get_or_create("emails", &config).unwrap();
        emails.add("a@example.org");
        emails.add("b@example.org");
        let bytes = emails.to_bytes().unwrap();

        let (restarted, _) = registry();
        let restored = MembershipFilter::from_bytes(&bytes).unwrap();
        let emails = restarted.insert(SharedMembershipFilter::from_filter(
            "emails",
            restored,
            Arc::new(NoOpMetrics),
        ));
        assert!(emails.might_contain("a@example.org"));
        assert!(emails.might_contain("b@example.org"));
        assert_eq!(emails.len(), 2);
    }
}

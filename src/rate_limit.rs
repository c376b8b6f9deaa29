use dashmap::DashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub admitted: bool,
    /// Requests the client may still make in the current window.
    /// Always 0 when `admitted` is false.
    pub remaining: u32,
}

#[derive(Debug, Error)]
pub enum RateLimitConfigError {
    #[error("rate limit window must be non-zero")]
    ZeroWindow,
}

/// Sliding-window request limiter keyed by client identity.
///
/// Each admitted request is recorded as a timestamp; a timestamp expires once
/// it is at least `window` old (exclusive boundary: an entry exactly `window`
/// old no longer counts). Expired entries are pruned on every access, so the
/// count is always recomputed from live state rather than stored.
///
/// The per-key check-prune-append sequence runs under the map's entry guard,
/// so two concurrent requests for the same key cannot both claim the last
/// remaining slot. Nothing blocking happens inside the guard.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    requests: DashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Result<Self, RateLimitConfigError> {
        if window.is_zero() {
            return Err(RateLimitConfigError::ZeroWindow);
        }
        Ok(Self {
            max_requests,
            window,
            requests: DashMap::new(),
        })
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check whether `key` may make a request now, recording it if so.
    ///
    /// A denied request is not recorded and does not count against the
    /// client's future quota.
    pub fn check_and_admit(&self, key: &str) -> Admission {
        self.check_at(key, Instant::now())
    }

    /// Remaining quota for `key` without consuming a slot.
    pub fn peek_remaining(&self, key: &str) -> u32 {
        self.peek_at(key, Instant::now())
    }

    /// Drop keys whose every recorded request has expired. Returns the number
    /// of keys removed. The admission contract does not depend on this; it
    /// only bounds map growth across many distinct clients.
    pub fn evict_idle(&self) -> usize {
        self.evict_idle_at(Instant::now())
    }

    /// Number of client keys currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.requests.len()
    }

    fn check_at(&self, key: &str, now: Instant) -> Admission {
        let mut log = self.requests.entry(key.to_string()).or_default();
        Self::prune(&mut log, now, self.window);

        let count = log.len() as u32;
        if count >= self.max_requests {
            return Admission {
                admitted: false,
                remaining: 0,
            };
        }

        log.push(now);
        Admission {
            admitted: true,
            remaining: self.max_requests - count - 1,
        }
    }

    fn peek_at(&self, key: &str, now: Instant) -> u32 {
        match self.requests.get_mut(key) {
            Some(mut log) => {
                Self::prune(&mut log, now, self.window);
                self.max_requests.saturating_sub(log.len() as u32)
            }
            None => self.max_requests,
        }
    }

    // Removals are counted inside the retain pass; comparing map lengths
    // around it would be wrong while other threads insert concurrently.
    fn evict_idle_at(&self, now: Instant) -> usize {
        let window = self.window;
        let mut dropped = 0;
        self.requests.retain(|_, log| {
            Self::prune(log, now, window);
            if log.is_empty() {
                dropped += 1;
                false
            } else {
                true
            }
        });
        dropped
    }

    // Exclusive expiry: keep only entries strictly younger than the window.
    fn prune(log: &mut Vec<Instant>, now: Instant, window: Duration) {
        log.retain(|&ts| now.duration_since(ts) < window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(3600);

    fn at(base: Instant, secs: u64) -> Instant {
        base + Duration::from_secs(secs)
    }

    #[test]
    fn admits_up_to_limit_then_denies() {
        let limiter = RateLimiter::new(5, WINDOW).unwrap();
        let base = Instant::now();

        for _ in 0..5 {
            assert!(limiter.check_at("client", base).admitted);
        }
        let denied = limiter.check_at("client", base);
        assert!(!denied.admitted);
        assert_eq!(denied.remaining, 0);
    }

    #[test]
    fn remaining_decreases_by_one_per_admission() {
        let limiter = RateLimiter::new(5, WINDOW).unwrap();
        let base = Instant::now();

        for expected in (0..5).rev() {
            let admission = limiter.check_at("client", base);
            assert!(admission.admitted);
            assert_eq!(admission.remaining, expected);
        }
    }

    #[test]
    fn expiry_restores_quota() {
        let limiter = RateLimiter::new(3, WINDOW).unwrap();
        let base = Instant::now();

        for _ in 0..3 {
            assert!(limiter.check_at("client", base).admitted);
        }
        assert!(!limiter.check_at("client", base).admitted);

        let later = at(base, 3600);
        let admission = limiter.check_at("client", later);
        assert!(admission.admitted);
        assert_eq!(admission.remaining, 2);
    }

    #[test]
    fn clients_are_independent() {
        let limiter = RateLimiter::new(2, WINDOW).unwrap();
        let base = Instant::now();

        assert!(limiter.check_at("a", base).admitted);
        assert!(limiter.check_at("a", base).admitted);
        assert!(!limiter.check_at("a", base).admitted);

        let b = limiter.check_at("b", base);
        assert!(b.admitted);
        assert_eq!(b.remaining, 1);
    }

    #[test]
    fn denials_do_not_consume_quota() {
        let limiter = RateLimiter::new(2, WINDOW).unwrap();
        let base = Instant::now();

        assert!(limiter.check_at("client", at(base, 0)).admitted);
        assert!(limiter.check_at("client", at(base, 10)).admitted);

        // Hammer the limiter while exhausted; none of these may be recorded.
        for s in 11..20 {
            assert!(!limiter.check_at("client", at(base, s)).admitted);
        }

        // Once the t=0 entry expires only the t=10 entry remains.
        let admission = limiter.check_at("client", at(base, 3601));
        assert!(admission.admitted);
        assert_eq!(admission.remaining, 0);
    }

    #[test]
    fn peek_does_not_consume_quota() {
        let limiter = RateLimiter::new(2, WINDOW).unwrap();
        let base = Instant::now();

        assert_eq!(limiter.peek_at("client", base), 2);
        assert!(limiter.check_at("client", base).admitted);
        for _ in 0..10 {
            assert_eq!(limiter.peek_at("client", base), 1);
        }
        assert!(limiter.check_at("client", base).admitted);
        assert_eq!(limiter.peek_at("client", base), 0);
        assert!(!limiter.check_at("client", base).admitted);
    }

    #[test]
    fn peek_on_unknown_client_reports_full_quota() {
        let limiter = RateLimiter::new(5, WINDOW).unwrap();
        assert_eq!(limiter.peek_remaining("never-seen"), 5);
    }

    // The boundary is exclusive: an entry exactly `window` old is expired.
    // With requests at t=0..4 and a check at t=3601, both t=0 (age 3601) and
    // t=1 (age exactly 3600) are gone; t=2,3,4 remain.
    #[test]
    fn window_boundary_is_exclusive() {
        let limiter = RateLimiter::new(5, WINDOW).unwrap();
        let base = Instant::now();

        let expected_remaining = [4, 3, 2, 1, 0];
        for (s, &expected) in expected_remaining.iter().enumerate() {
            let admission = limiter.check_at("client", at(base, s as u64));
            assert!(admission.admitted);
            assert_eq!(admission.remaining, expected);
        }

        let denied = limiter.check_at("client", at(base, 5));
        assert!(!denied.admitted);
        assert_eq!(denied.remaining, 0);

        let admission = limiter.check_at("client", at(base, 3601));
        assert!(admission.admitted);
        assert_eq!(admission.remaining, 1);
    }

    #[test]
    fn zero_limit_denies_everything() {
        let limiter = RateLimiter::new(0, WINDOW).unwrap();
        let base = Instant::now();

        let denied = limiter.check_at("client", base);
        assert!(!denied.admitted);
        assert_eq!(denied.remaining, 0);
        assert_eq!(limiter.peek_at("client", base), 0);
    }

    #[test]
    fn zero_window_is_rejected_at_construction() {
        assert!(matches!(
            RateLimiter::new(5, Duration::ZERO),
            Err(RateLimitConfigError::ZeroWindow)
        ));
    }

    #[test]
    fn empty_key_is_an_ordinary_client() {
        let limiter = RateLimiter::new(1, WINDOW).unwrap();
        let base = Instant::now();

        assert!(limiter.check_at("", base).admitted);
        assert!(!limiter.check_at("", base).admitted);
        assert!(limiter.check_at("someone", base).admitted);
    }

    #[test]
    fn evict_count_stays_exact_under_concurrent_admissions() {
        let limiter = RateLimiter::new(5, WINDOW).unwrap();
        let base = Instant::now();
        let far_future = at(base, 100 * 3600);

        std::thread::scope(|s| {
            for t in 0..4 {
                let limiter = &limiter;
                s.spawn(move || {
                    for i in 0..500 {
                        limiter.check_at(&format!("client-{t}-{i}"), base);
                    }
                });
            }
            // Sweep while admissions are in flight; keys inserted mid-retain
            // must not wrap the removal count.
            for _ in 0..100 {
                limiter.evict_idle_at(far_future);
            }
        });

        // Every surviving key's entries carry `base`, so one more sweep at
        // far_future removes exactly what is still tracked.
        let remaining = limiter.tracked_clients();
        assert_eq!(limiter.evict_idle_at(far_future), remaining);
        assert_eq!(limiter.tracked_clients(), 0);
    }

    #[test]
    fn evict_idle_drops_only_fully_expired_keys() {
        let limiter = RateLimiter::new(5, WINDOW).unwrap();
        let base = Instant::now();

        assert!(limiter.check_at("old", base).admitted);
        assert!(limiter.check_at("fresh", at(base, 3599)).admitted);
        assert_eq!(limiter.tracked_clients(), 2);

        let dropped = limiter.evict_idle_at(at(base, 3600));
        assert_eq!(dropped, 1);
        assert_eq!(limiter.tracked_clients(), 1);

        // Eviction must not disturb the surviving client's quota.
        assert_eq!(limiter.peek_at("fresh", at(base, 3600)), 4);
        assert_eq!(limiter.peek_at("old", at(base, 3600)), 5);
    }
}

//! Rate limiting middleware
//!
//! Token-bucket limiter keyed by client address. Over-limit requests
//! get 429 with a Retry-After hint; everything else passes through.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::models::ApiResponse;

/// Axum middleware entry point.
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Response {
    let key = client_key(&req);
    match limiter.check(&key) {
        RateLimitResult::Allowed { .. } => next.run(req).await,
        RateLimitResult::Limited { retry_after } => {
            let secs = retry_after.as_secs().max(1);
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, secs.to_string())],
                Json(ApiResponse::<()>::error(
                    "RATE_LIMITED",
                    "too many requests, slow down",
                )),
            )
                .into_response()
        }
    }
}

/// Bucket key: forwarded client address when present, else one shared
/// bucket. Good enough behind the usual reverse proxy.
fn client_key(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim().to_string())
        .unwrap_or_else(|| "global".to_string())
}

/// Rate limiter
pub struct RateLimiter {
    buckets: RwLock<HashMap<String, TokenBucket>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Check if request is allowed
    pub fn check(&self, key: &str) -> RateLimitResult {
        let mut buckets = self.buckets.write();

        let bucket = buckets.entry(key.to_string()).or_insert_with(|| {
            TokenBucket::new(self.config.requests_per_second, self.config.burst)
        });

        if bucket.try_acquire() {
            RateLimitResult::Allowed {
                remaining: bucket.available,
            }
        } else {
            RateLimitResult::Limited {
                retry_after: bucket.reset_at.saturating_duration_since(Instant::now()),
            }
        }
    }
}

/// Rate limit config
#[derive(Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 100,
            burst: 200,
        }
    }
}

/// Token bucket
struct TokenBucket {
    available: u32,
    max: u32,
    refill_rate: u32,
    last_refill: Instant,
    reset_at: Instant,
}

impl TokenBucket {
    fn new(rate: u32, burst: u32) -> Self {
        Self {
            available: burst,
            max: burst,
            refill_rate: rate,
            last_refill: Instant::now(),
            reset_at: Instant::now() + Duration::from_secs(1),
        }
    }

    fn try_acquire(&mut self) -> bool {
        self.refill();
        if self.available > 0 {
            self.available -= 1;
            true
        } else {
            false
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        let tokens = (elapsed.as_secs_f64() * self.refill_rate as f64) as u32;

        if tokens > 0 {
            self.available = (self.available + tokens).min(self.max);
            self.last_refill = now;
            self.reset_at = now + Duration::from_secs(1);
        }
    }
}

/// Rate limit result
pub enum RateLimitResult {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_then_limited() {
        let limiter = RateLimiter::new(RateLimitConfig {
            requests_per_second: 1,
            burst: 3,
        });
        for _ in 0..3 {
            assert!(matches!(
                limiter.check("1.2.3.4"),
                RateLimitResult::Allowed { .. }
            ));
        }
        assert!(matches!(
            limiter.check("1.2.3.4"),
            RateLimitResult::Limited { .. }
        ));
        // a different client has its own bucket
        assert!(matches!(
            limiter.check("5.6.7.8"),
            RateLimitResult::Allowed { .. }
        ));
    }
}

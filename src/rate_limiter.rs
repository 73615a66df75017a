use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Fixed configuration for the admission gate: how many requests may pass
/// per window, and how long to reject everything once the limit is hit.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
    pub backoff: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(60),
            backoff: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
struct WindowState {
    admitted: u32,
    window_start: Instant,
    backoff_start: Option<Instant>,
}

impl WindowState {
    fn reset(&mut self, now: Instant) {
        self.admitted = 0;
        self.window_start = now;
        self.backoff_start = None;
    }
}

/// Per-process request gate. Admits up to `max_requests` per window; once
/// the limit is exceeded every call is rejected until the backoff period
/// has elapsed, after which the window starts fresh.
///
/// Created once at startup and shared across all request tasks.
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<WindowState>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            state: Mutex::new(WindowState {
                admitted: 0,
                window_start: Instant::now(),
                backoff_start: None,
            }),
            config,
        }
    }

    /// Admission check. The monotonic clock is read once per call and every
    /// state transition happens under the mutex, so concurrent callers can
    /// never admit past the limit within a window.
    pub fn admit(&self) -> bool {
        let now = Instant::now();
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(backoff_start) = state.backoff_start {
            if now.duration_since(backoff_start) < self.config.backoff {
                return false;
            }
            state.reset(now);
        } else if now.duration_since(state.window_start) >= self.config.window {
            state.reset(now);
        }

        if state.admitted < self.config.max_requests {
            state.admitted += 1;
            true
        } else {
            state.backoff_start = Some(now);
            false
        }
    }

    pub fn limit(&self) -> u32 {
        self.config.max_requests
    }

    pub fn backoff(&self) -> Duration {
        self.config.backoff
    }
}

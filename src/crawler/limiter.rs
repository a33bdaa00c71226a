//! Token bucket rate limiter
//!
//! A single bucket is shared by every worker in a crawl run and gates the
//! global rate of outbound fetch attempts. Tokens accumulate with wall-clock
//! time up to a fixed capacity; refill is computed lazily on access, inside
//! the same critical section as the deduction, so concurrent callers can
//! neither lose a refill nor double-spend.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long a blocked caller sleeps between take attempts
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Mutable bucket state, guarded by a single mutex
#[derive(Debug)]
struct BucketState {
    /// Currently available tokens; always in `0.0..=capacity`
    tokens: f64,

    /// When the bucket was last refilled
    last_refill: Instant,
}

/// A thread-safe token bucket rate limiter
///
/// Tokens are fractional: a request for 1.0 token may be blocked by a bucket
/// sitting at 0.3 until enough wall time has elapsed.
#[derive(Debug)]
pub struct TokenBucket {
    /// Maximum number of tokens the bucket can hold
    capacity: f64,

    /// Rate at which tokens are added, per second
    refill_per_second: f64,

    state: Mutex<BucketState>,
}

impl TokenBucket {
    /// Creates a bucket starting at full capacity
    pub fn new(capacity: f64, refill_per_second: f64) -> Self {
        Self {
            capacity,
            refill_per_second,
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        }
    }

    /// Adds tokens for the wall-clock time elapsed since the last refill
    ///
    /// Must run under the state lock, in the same critical section as any
    /// deduction that depends on it.
    fn refill(&self, state: &mut BucketState) {
        let now = Instant::now();
        let elapsed = now.duration_since(state.last_refill).as_secs_f64();
        state.tokens = (state.tokens + elapsed * self.refill_per_second).min(self.capacity);
        state.last_refill = now;
    }

    /// Attempts to take `amount` tokens without blocking
    ///
    /// Refills from elapsed time, then deducts if enough tokens are
    /// available. Returns whether the take succeeded.
    pub fn try_take(&self, amount: f64) -> bool {
        let mut state = self.state.lock().unwrap();
        self.refill(&mut state);

        if state.tokens >= amount {
            state.tokens -= amount;
            true
        } else {
            false
        }
    }

    /// Blocks the calling task until `amount` tokens could be taken
    ///
    /// Only the caller suspends; other workers are unaffected.
    pub async fn take(&self, amount: f64) {
        while !self.try_take(amount) {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Currently available tokens, after a lazy refill
    #[cfg(test)]
    fn available(&self) -> f64 {
        let mut state = self.state.lock().unwrap();
        self.refill(&mut state);
        state.tokens
    }
}

//! Bounded polling helpers.
//!
//! Both the post-reset power-down wait and the transceive completion wait are
//! "read a status register, stop on a predicate, otherwise sleep" loops with a
//! fixed attempt budget. `poll_until` is that loop written once.

use std::time::Duration;

use crate::Result;
use crate::transport::Delay;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Attempt budget and pacing for a status poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollPolicy {
    /// Maximum number of probes.
    pub attempts: usize,
    /// Delay between probes.
    pub interval: Duration,
    /// Sleep before each probe instead of after an inconclusive one.
    pub settle_first: bool,
}

impl PollPolicy {
    pub const fn new(attempts: usize, interval: Duration) -> Self {
        Self {
            attempts,
            interval,
            settle_first: false,
        }
    }

    pub const fn settle_first(mut self) -> Self {
        self.settle_first = true;
        self
    }

    /// Upper bound on the time spent sleeping by one poll.
    pub fn budget(&self) -> Duration {
        self.interval * self.attempts as u32
    }
}

/// How a bounded poll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome<T> {
    /// The completion predicate matched this sample.
    Completed(T),
    /// The failure predicate matched this sample.
    Failed(T),
    /// Every attempt was inconclusive.
    Exhausted,
}

/// Probe up to `policy.attempts` times, sleeping `policy.interval` around
/// each inconclusive probe.
///
/// Completion is checked before failure, so a sample satisfying both counts
/// as completed. Probe errors abort the poll immediately. When
/// `settle_first` is false an exhausted poll sleeps exactly `attempts`
/// intervals and a conclusive probe returns without sleeping.
pub fn poll_until<T, D, P, C, F>(
    delay: &mut D,
    policy: &PollPolicy,
    mut probe: P,
    is_complete: C,
    is_failed: F,
) -> Result<PollOutcome<T>>
where
    D: Delay + ?Sized,
    P: FnMut() -> Result<T>,
    C: Fn(&T) -> bool,
    F: Fn(&T) -> bool,
{
    for _ in 0..policy.attempts {
        if policy.settle_first {
            delay.delay(policy.interval);
        }

        let sample = probe()?;
        if is_complete(&sample) {
            return Ok(PollOutcome::Completed(sample));
        }
        if is_failed(&sample) {
            return Ok(PollOutcome::Failed(sample));
        }

        if !policy.settle_first {
            delay.delay(policy.interval);
        }
    }
    Ok(PollOutcome::Exhausted)
}

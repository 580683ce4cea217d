//! External stop conditions: a cancellation flag and a wall-clock limit.
//!
//! Drivers poll [`StopCondition::check`] once per iteration or generation.
//! The clock is read only every [`CLOCK_CHECK_MASK`]` + 1` polls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Clock is consulted when `polls & CLOCK_CHECK_MASK == 0`.
pub const CLOCK_CHECK_MASK: u64 = 0x3F;

/// Upper bound on trace slots reserved up front. Iteration budgets may be
/// arbitrarily large when a time limit is the real bound.
pub(crate) const TRACE_PREALLOC: usize = 1 << 16;

/// Why a run stopped before its iteration budget was spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The cancellation flag was set.
    Cancelled,
    /// The time limit elapsed.
    TimeLimit,
}

#[derive(Debug)]
pub(crate) struct StopCondition {
    cancel: Option<Arc<AtomicBool>>,
    time_limit: Option<Duration>,
    started: Instant,
    polls: u64,
}

impl StopCondition {
    pub(crate) fn new(cancel: Option<Arc<AtomicBool>>, time_limit_ms: Option<u64>) -> Self {
        Self {
            cancel,
            time_limit: time_limit_ms.map(Duration::from_millis),
            started: Instant::now(),
            polls: 0,
        }
    }

    pub(crate) fn check(&mut self) -> Option<StopReason> {
        let poll = self.polls;
        self.polls = self.polls.wrapping_add(1);

        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Some(StopReason::Cancelled);
        }
        match self.time_limit {
            Some(limit) if poll & CLOCK_CHECK_MASK == 0 && self.started.elapsed() >= limit => {
                Some(StopReason::TimeLimit)
            }
            _ => None,
        }
    }
}

//! Tick sources: what decides *when* the next tick happens.
//!
//! The engine never looks at a wall clock.  A host picks a source: a fixed
//! count for tests and batch runs, or a [`FrameTimer`] to pace ticks to a
//! display rate.

use std::thread;
use std::time::{Duration, Instant};

/// Yields ticks until it is exhausted.
pub trait TickSource {
    /// Block until the next tick is due.  `false` means stop.
    fn wait_for_tick(&mut self) -> bool;
}

/// Exactly `n` ticks, immediately.
#[derive(Copy, Clone, Debug)]
pub struct FixedTicks {
    remaining: u64,
}

impl FixedTicks {
    pub fn new(n: u64) -> Self {
        Self { remaining: n }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl TickSource for FixedTicks {
    fn wait_for_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Sleeps between ticks to hold a target frame rate.
///
/// Deadlines are scheduled from the previous deadline, not from "now", so a
/// slow frame is followed by a short one instead of drifting.  If the host
/// falls more than one frame behind, the schedule resets rather than
/// bursting to catch up.
#[derive(Clone, Debug)]
pub struct FrameTimer {
    interval:   Duration,
    next:       Option<Instant>,
    max_frames: Option<u64>,
    emitted:    u64,
}

impl FrameTimer {
    /// Pace at `frame_rate_hz`.  A rate of zero is treated as 1 Hz.
    pub fn new(frame_rate_hz: u32) -> Self {
        Self {
            interval:   Duration::from_secs(1) / frame_rate_hz.max(1),
            next:       None,
            max_frames: None,
            emitted:    0,
        }
    }

    /// Stop after `n` frames.
    pub fn with_max_frames(mut self, n: u64) -> Self {
        self.max_frames = Some(n);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frames_emitted(&self) -> u64 {
        self.emitted
    }
}

impl TickSource for FrameTimer {
    fn wait_for_tick(&mut self) -> bool {
        if self.max_frames.is_some_and(|max| self.emitted >= max) {
            return false;
        }

        let now = Instant::now();
        let deadline = match self.next {
            None => now,
            Some(d) if now > d + self.interval => now,
            Some(d) => d,
        };
        if deadline > now {
            thread::sleep(deadline - now);
        }

        self.next = Some(deadline + self.interval);
        self.emitted += 1;
        true
    }
}

use std::time::Instant;

/// Seconds allotted to each question.
pub const QUESTION_SECONDS: u64 = 15;

/// Per-question countdown based on wall-clock elapsed time, so that a stalled
/// event loop cannot make the timer drift beyond real elapsed time.
///
/// The clock is stopped and restarted on every question transition, which is
/// what makes ticks for a stale question impossible: a stopped clock never
/// reports a timeout.
#[derive(Debug)]
pub struct SessionClock {
    enabled: bool,
    duration: u64,
    started: Option<Instant>,
    frozen_remaining: u64,
    timeout_fired: bool,
}

impl SessionClock {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            duration: QUESTION_SECONDS,
            started: None,
            frozen_remaining: QUESTION_SECONDS,
            timeout_fired: false,
        }
    }

    /// Begins a fresh countdown. Re-entrant: calling on a running clock is an
    /// implicit stop-then-start.
    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }
        self.started = Some(Instant::now());
        self.frozen_remaining = self.duration;
        self.timeout_fired = false;
    }

    /// Halts the countdown, keeping the last observed remaining value for the
    /// time-taken calculation.
    pub fn stop(&mut self) {
        if self.started.is_some() {
            self.frozen_remaining = self.remaining_seconds();
            self.started = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Remaining whole seconds, clamped to `[0, duration]` and monotonically
    /// non-increasing within one countdown.
    pub fn remaining_seconds(&self) -> u64 {
        match self.started {
            Some(started) => {
                let elapsed = started.elapsed().as_millis() as u64 / 1000;
                self.duration.saturating_sub(elapsed)
            }
            None => self.frozen_remaining,
        }
    }

    /// Reports expiry exactly once per countdown. Only a running clock can
    /// time out; the consumer treats a `true` return as a "no answer" pick.
    pub fn poll_timeout(&mut self) -> bool {
        if self.started.is_some() && !self.timeout_fired && self.remaining_seconds() == 0 {
            self.timeout_fired = true;
            return true;
        }
        false
    }

    /// Seconds spent on the current question, or 0 when timing is disabled.
    pub fn time_taken_seconds(&self) -> u64 {
        if !self.enabled {
            return 0;
        }
        self.duration - self.remaining_seconds()
    }
}

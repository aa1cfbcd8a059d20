//! Frame rate reduction while the user is inactive.
use crate::runner_params::FpsIdling;
use std::time::{Duration, Instant};

/// What the event loop should do after the current iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawDecision {
    /// Redraw continuously.
    Poll,
    /// Sleep until the next event.
    Wait,
    /// Sleep until the deadline or the next event.
    WaitUntil(Instant),
}

#[derive(Clone, Copy, Debug)]
pub struct IdleTracker {
    last_event: Instant,
    last_frame: Instant,
}

impl IdleTracker {
    pub fn new(now: Instant) -> Self {
        Self {
            last_event: now,
            last_frame: now,
        }
    }

    /// Records user input; leaves idling immediately.
    pub fn on_input_event(&mut self, now: Instant) {
        self.last_event = now;
    }

    pub fn on_frame(&mut self, now: Instant) {
        self.last_frame = now;
    }

    pub fn is_idling(&self, now: Instant, cfg: &FpsIdling) -> bool {
        cfg.enable_idling
            && now.saturating_duration_since(self.last_event) >= cfg.time_active_after_last_event
    }

    pub fn decide(&self, now: Instant, cfg: &FpsIdling) -> RedrawDecision {
        if !self.is_idling(now, cfg) {
            return RedrawDecision::Poll;
        }
        // NaN, zero, negative and periods too long for an Instant all wait for events.
        if !(cfg.fps_idle > 0.0) {
            return RedrawDecision::Wait;
        }
        Duration::try_from_secs_f32(1.0 / cfg.fps_idle)
            .ok()
            .and_then(|period| self.last_frame.checked_add(period))
            .map_or(RedrawDecision::Wait, RedrawDecision::WaitUntil)
    }

    /// Whether a frame is due under `decision`.
    pub fn frame_due(&self, now: Instant, decision: RedrawDecision) -> bool {
        match decision {
            RedrawDecision::Poll => true,
            RedrawDecision::Wait => false,
            RedrawDecision::WaitUntil(deadline) => now >= deadline,
        }
    }
}

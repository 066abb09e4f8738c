// SPDX-License-Identifier: MPL-2.0
//! Run/stop state machine and per-tick animation state.
//!
//! The clock owns no timer. The host arms its own periodic source at
//! [`AnimationClock::frame_interval`] while [`AnimationClock::is_running`]
//! is true and calls [`AnimationClock::tick`] on each firing. Every tick
//! advances by the configured interval, not by measured wall time.

use crate::config::{DEFAULT_FRAME_RATE, DEFAULT_REVOLUTIONS_PER_SECOND, HUE_STEP_DEGREES};
use crate::error::{Error, Parameter, Result};
use std::time::Duration;

/// Whether the periodic tick source should be armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

/// Mutable animation state, touched only by ticks and start/stop/enable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    angle_degrees: f64,
    hue_offset_degrees: f64,
    clock: ClockState,
    grayed_out: bool,
}

impl AnimationState {
    /// Rotation of the whole ring, in `[0, 360)`.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Hue shift applied to the gradient, in `[0, 360)`.
    #[must_use]
    pub fn hue_offset_degrees(&self) -> f64 {
        self.hue_offset_degrees
    }

    #[must_use]
    pub fn clock(&self) -> ClockState {
        self.clock
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock == ClockState::Running
    }

    #[must_use]
    pub fn grayed_out(&self) -> bool {
        self.grayed_out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    state: AnimationState,
    frame_interval_ms: f64,
    revolutions_per_second: f64,
    tick_count: u64,
}

impl AnimationClock {
    /// Creates a stopped clock at angle 0 and hue offset 0.
    pub fn new(frame_rate: u32, revolutions_per_second: f64) -> Result<Self> {
        let mut clock = Self {
            state: AnimationState::default(),
            frame_interval_ms: 1000.0 / f64::from(DEFAULT_FRAME_RATE),
            revolutions_per_second: DEFAULT_REVOLUTIONS_PER_SECOND,
            tick_count: 0,
        };
        clock.set_frame_rate(frame_rate)?;
        clock.set_revolutions_per_second(revolutions_per_second)?;
        Ok(clock)
    }

    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Ticks delivered since the last start or stop.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Period at which the host should deliver ticks.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.frame_interval_ms / 1000.0)
    }

    #[must_use]
    pub fn revolutions_per_second(&self) -> f64 {
        self.revolutions_per_second
    }

    /// Degrees added to the angle on every tick.
    #[must_use]
    pub fn rotation_increment(&self) -> f64 {
        rotation_increment(self.revolutions_per_second, self.frame_interval_ms)
    }

    /// Returns `true` when the clock transitioned to running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state.clock = ClockState::Running;
        self.tick_count = 0;
        tracing::debug!(
            interval_ms = self.frame_interval_ms,
            increment = self.rotation_increment(),
            "spinner clock started"
        );
        true
    }

    /// Returns `true` when the clock transitioned to stopped.
    ///
    /// Angle and hue are kept, so the last frame stays drawable.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state.clock = ClockState::Stopped;
        self.tick_count = 0;
        tracing::debug!(angle = self.state.angle_degrees, "spinner clock stopped");
        true
    }

    /// Advances angle and hue. Ignored while stopped; returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state.angle_degrees = (self.state.angle_degrees + self.rotation_increment()) % 360.0;
        self.state.hue_offset_degrees = (self.state.hue_offset_degrees + HUE_STEP_DEGREES) % 360.0;
        self.tick_count += 1;
        tracing::trace!(
            angle = self.state.angle_degrees,
            hue = self.state.hue_offset_degrees,
            "spinner tick"
        );
        true
    }

    /// Sets the tick rate; the interval becomes `1000 / fps` milliseconds.
    pub fn set_frame_rate(&mut self, frames_per_second: u32) -> Result<()> {
        if frames_per_second == 0 {
            return Err(Error::invalid(
                Parameter::FrameRate,
                0.0,
                "frame rate must be positive",
            ));
        }
        let frame_interval_ms = 1000.0 / f64::from(frames_per_second);
        check_increment(self.revolutions_per_second, frame_interval_ms)?;
        self.frame_interval_ms = frame_interval_ms;
        Ok(())
    }

    pub fn set_revolutions_per_second(&mut self, revolutions_per_second: f64) -> Result<()> {
        if !revolutions_per_second.is_finite() || revolutions_per_second <= 0.0 {
            return Err(Error::invalid(
                Parameter::RevolutionsPerSecond,
                revolutions_per_second,
                "revolution rate must be positive and finite",
            ));
        }
        check_increment(revolutions_per_second, self.frame_interval_ms)?;
        self.revolutions_per_second = revolutions_per_second;
        Ok(())
    }

    /// Enabling colors the gradient and starts the clock; disabling grays it
    /// out and stops the clock. The angle is never reset.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.grayed_out = !enabled;
        if enabled {
            self.start();
        } else {
            self.stop();
        }
        tracing::debug!(enabled, "spinner enabled state changed");
    }
}

fn rotation_increment(revolutions_per_second: f64, frame_interval_ms: f64) -> f64 {
    revolutions_per_second * frame_interval_ms * 360.0 / 1000.0
}

/// The per-tick increment must stay finite or the angle turns NaN.
fn check_increment(revolutions_per_second: f64, frame_interval_ms: f64) -> Result<()> {
    if rotation_increment(revolutions_per_second, frame_interval_ms).is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(
            Parameter::RevolutionsPerSecond,
            revolutions_per_second,
            "revolution rate overflows the per-tick rotation",
        ))
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            state: AnimationState::default(),
            frame_interval_ms: 1000.0 / f64::from(DEFAULT_FRAME_RATE),
            revolutions_per_second: DEFAULT_REVOLUTIONS_PER_SECOND,
            tick_count: 0,
        }
    }
}

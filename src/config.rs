// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tunable constants for the tracker.
//!
//! [`TrackerConfig::default`] reproduces the calibrated values of the platform. Pin assignments
//! are board-specific and live with the firmware binary.

use crate::axis::{AngularVelocity, Axis};
use crate::error::Error;

/// 45 degrees in 10 seconds.
pub const ANGULAR_VELOCITY_PITCH: f32 = 4.5;
/// 80 degrees in 10 seconds.
pub const ANGULAR_VELOCITY_ROLL: f32 = 8.0;

/// Maximum accepted deviation from the goal, degrees.
pub const REQUIRED_ANGLE_PRECISION: f32 = 2.0;
/// Correction bursts shorter than this are not issued.
pub const MIN_ACTUATOR_BURST_MILLIS: u32 = 250;
/// One move plus three adjustments.
pub const MAX_CORRECTION_ITERATIONS: u8 = 4;
/// Duration of each half of an actuator test cycle.
pub const TEST_BURST_MILLIS: u32 = 2000;

/// Limits for one correction loop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopLimits {
    pub precision_deg: f32,
    pub min_burst_ms: u32,
    pub max_iterations: u8,
}

impl Default for LoopLimits {
    fn default() -> Self {
        Self {
            precision_deg: REQUIRED_ANGLE_PRECISION,
            min_burst_ms: MIN_ACTUATOR_BURST_MILLIS,
            max_iterations: MAX_CORRECTION_ITERATIONS,
        }
    }
}

/// Tracker configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackerConfig {
    /// Pitch angular velocity (deg/s).
    pub pitch_velocity: f32,
    /// Roll angular velocity (deg/s).
    pub roll_velocity: f32,
    pub limits: LoopLimits,
    pub test_burst_ms: u32,
    /// Reject malformed numbers instead of reading them as 0.0.
    pub strict_numbers: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            pitch_velocity: ANGULAR_VELOCITY_PITCH,
            roll_velocity: ANGULAR_VELOCITY_ROLL,
            limits: LoopLimits::default(),
            test_burst_ms: TEST_BURST_MILLIS,
            strict_numbers: false,
        }
    }
}

impl TrackerConfig {
    /// Override both angular velocities.
    pub fn with_velocities(mut self, pitch: f32, roll: f32) -> Self {
        self.pitch_velocity = pitch;
        self.roll_velocity = roll;
        self
    }

    /// Override the correction loop limits.
    pub fn with_limits(mut self, limits: LoopLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = strict;
        self
    }

    /// Angular velocity of `axis`, checked.
    pub fn velocity(&self, axis: Axis) -> Result<AngularVelocity, Error> {
        match axis {
            Axis::Pitch => AngularVelocity::new(self.pitch_velocity),
            Axis::Roll => AngularVelocity::new(self.roll_velocity),
        }
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), Error> {
        self.velocity(Axis::Pitch)?;
        self.velocity(Axis::Roll)?;

        let limits = &self.limits;
        if !(limits.precision_deg.is_finite() && limits.precision_deg > 0.0) {
            return Err(Error::InvalidConfig("angle precision must be positive"));
        }
        if limits.max_iterations == 0 {
            return Err(Error::InvalidConfig("at least one correction iteration is required"));
        }
        Ok(())
    }
}

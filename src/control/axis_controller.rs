// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Closed-loop controller for one tilt axis.
//!
//! The controller owns one actuator and corrects its axis in a bounded number of blocking bursts:
//!
//! ```text
//! Measuring -> Evaluating -> Bursting -> Measuring ...   (at most `max_iterations` times)
//!                  |  \
//!                  |   `-> BurstTooSmall (stop)
//!                  `-----> Converged     (stop)
//! ```
//!
//! Each burst is sized from the remaining error and the axis' nominal angular velocity. There is
//! no integral or derivative action; the next iteration simply measures again.
//!
//! Typical usage pattern:
//!
//! ```no_run
//! # use tracker::{control::AxisController, sensors::SimulatedTilt, TrackerConfig, Axis};
//! # fn demo<A: tracker::motors::Actuator>(actuator: A) -> Result<(), tracker::Error> {
//! let mut tilt = SimulatedTilt::level();
//! let mut pitch = AxisController::from_config(Axis::Pitch, actuator, &TrackerConfig::default())?;
//! let outcome = pitch.run_to(12.5, &mut tilt)?;
//! # Ok(()) }
//! ```

use core::fmt;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::axis::{AngularVelocity, Axis};
use crate::config::{LoopLimits, TrackerConfig};
use crate::error::Error;
use crate::motors::{Actuator, BurstIntent};
use crate::sensors::Tilt;

/// Target angle for one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveGoal {
    pub axis: Axis,
    pub target_deg: f32,
}

impl MoveGoal {
    #[inline]
    pub const fn new(axis: Axis, target_deg: f32) -> Self {
        Self { axis, target_deg }
    }
}

/// Decision for one measured angle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Evaluation {
    /// Within precision; nothing to do.
    Converged { diff: f32 },
    /// Outside precision, but the burst would be shorter than the minimum.
    TooSmall { diff: f32, millis: u32 },
    /// Issue this burst.
    Burst { diff: f32, intent: BurstIntent },
}

/// How a correction loop ended.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// `|angle - goal|` fell below the precision on measurement number `iterations`.
    Converged { iterations: u8, bursts: u8, diff: f32 },
    /// Stopped early: the estimated burst was below the minimum.
    BurstTooSmall { bursts: u8, millis: u32, diff: f32 },
    /// Every iteration issued a burst. `last_diff` is the error before the final burst.
    ConvergenceNotReached { bursts: u8, last_diff: f32 },
}

impl Outcome {
    /// Number of bursts issued.
    pub fn bursts(&self) -> u8 {
        match *self {
            Outcome::Converged { bursts, .. }
            | Outcome::BurstTooSmall { bursts, .. }
            | Outcome::ConvergenceNotReached { bursts, .. } => bursts,
        }
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, Outcome::Converged { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Converged {
                iterations,
                bursts,
                diff,
            } => write!(
                f,
                "converged, diff {:.2} after {} bursts ({} readings)",
                diff, bursts, iterations
            ),
            Outcome::BurstTooSmall {
                bursts,
                millis,
                diff,
            } => write!(
                f,
                "stopped, {} ms burst too small for diff {:.2} after {} bursts",
                millis, diff, bursts
            ),
            Outcome::ConvergenceNotReached { bursts, last_diff } => write!(
                f,
                "not converged after {} bursts, last diff {:.2}",
                bursts, last_diff
            ),
        }
    }
}

/// Milliseconds needed to travel `diff_deg` at `velocity`, rounded. Sign is ignored.
pub fn estimate_burst_millis(diff_deg: f32, velocity: AngularVelocity) -> u32 {
    let seconds = (diff_deg / velocity.deg_per_s()).abs();
    // `roundf` keeps the full f32 range and `as` saturates, so huge errors clamp to u32::MAX.
    libm::roundf(1000.0 * seconds) as u32
}

/// Correction loop for one axis.
pub struct AxisController<A> {
    axis: Axis,
    actuator: A,
    velocity: AngularVelocity,
    limits: LoopLimits,

    /// Goal of the current or last run.
    goal: Option<MoveGoal>,
}

impl<A: Actuator> AxisController<A> {
    pub fn new(axis: Axis, actuator: A, velocity: AngularVelocity, limits: LoopLimits) -> Self {
        Self {
            axis,
            actuator,
            velocity,
            limits,
            goal: None,
        }
    }

    /// Build the controller for `axis` with the velocity and limits from `config`.
    pub fn from_config(axis: Axis, actuator: A, config: &TrackerConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::new(axis, actuator, config.velocity(axis)?, config.limits))
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn velocity(&self) -> AngularVelocity {
        self.velocity
    }

    #[inline]
    pub fn limits(&self) -> LoopLimits {
        self.limits
    }

    #[inline]
    pub fn goal(&self) -> Option<MoveGoal> {
        self.goal
    }

    /// Access the underlying actuator.
    #[inline]
    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Decide what to do for a measured `angle` against `goal`.
    pub fn evaluate(&self, angle: f32, goal: f32) -> Evaluation {
        let diff = (angle - goal).abs();
        if diff < self.limits.precision_deg {
            return Evaluation::Converged { diff };
        }

        let millis = estimate_burst_millis(diff, self.velocity);
        if millis < self.limits.min_burst_ms {
            return Evaluation::TooSmall { diff, millis };
        }

        Evaluation::Burst {
            diff,
            intent: BurstIntent::for_correction(angle, goal, millis),
        }
    }

    /// Set `goal` and run the correction loop against `tilt`.
    ///
    /// Blocks for every burst. A goal for another axis is rejected before anything is sampled or
    /// moved.
    pub fn drive<T>(&mut self, goal: MoveGoal, tilt: &mut T) -> Result<Outcome, Error>
    where
        T: Tilt + ?Sized,
    {
        if goal.axis != self.axis {
            warn!("{} controller given a {} goal", self.axis, goal.axis);
            return Err(Error::AxisUnknown(goal.axis.id()));
        }
        if !goal.target_deg.is_finite() {
            warn!("{} goal is not finite", self.axis);
            return Err(Error::NonFiniteGoal);
        }
        self.goal = Some(goal);

        let mut bursts = 0u8;
        let mut last_diff = 0.0;

        for iteration in 1..=self.limits.max_iterations {
            let reading = tilt.read().map_err(|_e| {
                warn!("{} tilt read failed", self.axis);
                Error::TiltRead
            })?;
            let angle = reading.angle(self.axis);

            match self.evaluate(angle, goal.target_deg) {
                Evaluation::Converged { diff } => {
                    return Ok(Outcome::Converged {
                        iterations: iteration,
                        bursts,
                        diff,
                    });
                }
                Evaluation::TooSmall { diff, millis } => {
                    return Ok(Outcome::BurstTooSmall {
                        bursts,
                        millis,
                        diff,
                    });
                }
                Evaluation::Burst { diff, intent } => {
                    trace!(
                        "{} at {} goal {}: {} {} ms",
                        self.axis,
                        angle,
                        goal.target_deg,
                        intent.direction,
                        intent.millis
                    );
                    self.actuator.burst(intent);
                    bursts += 1;
                    last_diff = diff;
                }
            }
        }

        Ok(Outcome::ConvergenceNotReached { bursts, last_diff })
    }

    /// Drive this controller's axis to `target_deg`.
    #[inline]
    pub fn run_to<T>(&mut self, target_deg: f32, tilt: &mut T) -> Result<Outcome, Error>
    where
        T: Tilt + ?Sized,
    {
        self.drive(MoveGoal::new(self.axis, target_deg), tilt)
    }

    /// Extend then retract for `millis` each. Does not touch the goal.
    pub fn test_cycle(&mut self, millis: u32) {
        self.actuator.test_cycle(millis);
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Linear actuator capability.
//!
//! An actuator moves only in timed bursts. A burst blocks for its full duration and leaves the
//! actuator stopped on return, so a caller never has to remember to stop it.

/// Logical drive direction for a linear actuator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Extend,
    Retract,
    Stop,
}

/// One burst: a direction held for `millis` milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BurstIntent {
    pub direction: Direction,
    pub millis: u32,
}

impl BurstIntent {
    #[inline]
    pub const fn new(direction: Direction, millis: u32) -> Self {
        Self { direction, millis }
    }

    #[inline]
    pub const fn stop() -> Self {
        Self::new(Direction::Stop, 0)
    }

    /// Burst that moves a measured `angle` toward `goal`.
    ///
    /// Extending lowers the measured angle, so an angle above the goal extends and anything else
    /// retracts.
    #[inline]
    pub fn for_correction(angle: f32, goal: f32, millis: u32) -> Self {
        if angle > goal {
            Self::new(Direction::Extend, millis)
        } else {
            Self::new(Direction::Retract, millis)
        }
    }
}

/// A linear actuator driven by blocking bursts.
///
/// Implementations must never drive both directions at once, and must return with the actuator
/// stopped.
pub trait Actuator {
    /// Run one burst to completion. `Direction::Stop` only stops.
    fn burst(&mut self, intent: BurstIntent);

    /// De-energize the actuator.
    fn stop(&mut self);

    /// Extend for `millis`, then stop.
    #[inline]
    fn extend(&mut self, millis: u32) {
        self.burst(BurstIntent::new(Direction::Extend, millis));
    }

    /// Retract for `millis`, then stop.
    #[inline]
    fn retract(&mut self, millis: u32) {
        self.burst(BurstIntent::new(Direction::Retract, millis));
    }

    /// Full extend then full retract, used to check the wiring.
    fn test_cycle(&mut self, millis: u32) {
        self.extend(millis);
        self.retract(millis);
    }
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    #[inline]
    fn burst(&mut self, intent: BurstIntent) {
        (**self).burst(intent)
    }

    #[inline]
    fn stop(&mut self) {
        (**self).stop()
    }
}

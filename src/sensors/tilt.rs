// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tilt capability.
//!
//! A tilt sensor reports raw 3-axis acceleration. Pitch and roll are derived from it with a fixed
//! formula that the convergence thresholds are calibrated against:
//!
//! - `pitch = atan2(-x, z) * 180 / PI` (rotation about Y)
//! - `roll  = atan2(-y, z) * 180 / PI` (rotation about X)

use core::f32::consts::PI;
use core::fmt;

use crate::axis::Axis;

/// Raw acceleration sample. Units are whatever the sensor reports; only ratios matter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAccel {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RawAccel {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Pitch in degrees.
    #[inline]
    pub fn pitch_deg(&self) -> f32 {
        libm::atan2f(-self.x, self.z) * 180.0 / PI
    }

    /// Roll in degrees.
    #[inline]
    pub fn roll_deg(&self) -> f32 {
        libm::atan2f(-self.y, self.z) * 180.0 / PI
    }
}

/// One sample with its derived angles.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltReading {
    pub raw: RawAccel,
    pub pitch_deg: f32,
    pub roll_deg: f32,
}

impl TiltReading {
    pub fn from_raw(raw: RawAccel) -> Self {
        Self {
            raw,
            pitch_deg: raw.pitch_deg(),
            roll_deg: raw.roll_deg(),
        }
    }

    /// The angle relevant to `axis`.
    #[inline]
    pub fn angle(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Pitch => self.pitch_deg,
            Axis::Roll => self.roll_deg,
        }
    }
}

/// The `reada` diagnostic line (no terminator).
impl fmt::Display for TiltReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {:.2}, y: {:.2}, z: {:.2}, pitch: {:.2}, roll: {:.2}",
            self.raw.x, self.raw.y, self.raw.z, self.pitch_deg, self.roll_deg
        )
    }
}

/// A tilt sensor.
pub trait Tilt {
    type Error: fmt::Debug;

    /// Sample raw acceleration.
    fn read_raw(&mut self) -> Result<RawAccel, Self::Error>;

    /// Sample and derive pitch/roll.
    #[inline]
    fn read(&mut self) -> Result<TiltReading, Self::Error> {
        self.read_raw().map(TiltReading::from_raw)
    }
}

impl<T: Tilt + ?Sized> Tilt for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_raw(&mut self) -> Result<RawAccel, Self::Error> {
        (**self).read_raw()
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Platform axes and their angular velocity.

use core::fmt;

use crate::error::Error;

/// Raw id of the pitch axis (matches the pitch command number).
pub const PITCH_ID: u8 = 4;
/// Raw id of the roll axis (matches the roll command number).
pub const ROLL_ID: u8 = 5;

/// One of the two tilt axes. Each axis has its own actuator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Rotation about Y, measured as `atan2(-x, z)`.
    Pitch,
    /// Rotation about X, measured as `atan2(-y, z)`.
    Roll,
}

impl Axis {
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Axis::Pitch => PITCH_ID,
            Axis::Roll => ROLL_ID,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Pitch => "pitch",
            Axis::Roll => "roll",
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Error> {
        match id {
            PITCH_ID => Ok(Axis::Pitch),
            ROLL_ID => Ok(Axis::Roll),
            other => Err(Error::AxisUnknown(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Angular velocity of an axis in degrees per second. Always finite and strictly positive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularVelocity(f32);

impl AngularVelocity {
    pub fn new(deg_per_s: f32) -> Result<Self, Error> {
        if deg_per_s.is_finite() && deg_per_s > 0.0 {
            Ok(Self(deg_per_s))
        } else {
            Err(Error::InvalidConfig("angular velocity must be positive"))
        }
    }

    #[inline]
    pub const fn deg_per_s(self) -> f32 {
        self.0
    }
}

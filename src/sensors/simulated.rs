// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-value tilt sensor.

use core::convert::Infallible;

use crate::sensors::tilt::{RawAccel, Tilt};

/// Returns the same sample until changed with [`SimulatedTilt::set`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SimulatedTilt {
    raw: RawAccel,
}

impl SimulatedTilt {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            raw: RawAccel::new(x, y, z),
        }
    }

    /// Platform lying flat: pitch and roll both 0.
    pub const fn level() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Sample that derives to the given angles (valid for |angle| < 90).
    pub fn from_angles(pitch_deg: f32, roll_deg: f32) -> Self {
        let to_rad = core::f32::consts::PI / 180.0;
        let x = -libm::tanf(pitch_deg * to_rad);
        let y = -libm::tanf(roll_deg * to_rad);
        Self::new(x, y, 1.0)
    }

    pub fn set(&mut self, raw: RawAccel) {
        self.raw = raw;
    }

    pub fn raw(&self) -> RawAccel {
        self.raw
    }
}

impl Tilt for SimulatedTilt {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<RawAccel, Infallible> {
        Ok(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    #[test]
    fn angles_round_trip_through_formula() {
        let mut tilt = SimulatedTilt::from_angles(12.5, -30.0);
        let r = tilt.read().unwrap();
        assert!((r.angle(Axis::Pitch) - 12.5).abs() < 1e-3);
        assert!((r.angle(Axis::Roll) + 30.0).abs() < 1e-3);
    }

    #[test]
    fn set_replaces_sample() {
        let mut tilt = SimulatedTilt::level();
        assert_eq!(tilt.read().unwrap().pitch_deg, 0.0);
        tilt.set(RawAccel::new(1.0, 0.0, 1.0));
        assert_eq!(tilt.raw(), RawAccel::new(1.0, 0.0, 1.0));
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Tilt Sensing
//!
//! - [`tilt`] - The tilt capability and the pitch/roll derivation.
//! - [`simulated`] - Fixed-value sensor for bench work and tests.
//!
//! The hardware implementation is [`crate::drivers::Adxl345`].

pub mod simulated;
pub mod tilt;

pub use simulated::SimulatedTilt;
pub use tilt::{RawAccel, Tilt, TiltReading};

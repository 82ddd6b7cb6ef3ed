// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers written against `embedded-hal` traits, so they sit
//! below the application logic without tying it to one MCU.
//!
//! ## Existing drivers
//!
//! - [`linear_actuator`] – 12 V linear actuator on an enable + two direction line H-bridge
//! - [`adxl345`] – Analog Devices ADXL345 3-axis accelerometer over I2C

pub mod adxl345;
pub mod linear_actuator;

pub use adxl345::Adxl345;
pub use linear_actuator::LinearActuator;

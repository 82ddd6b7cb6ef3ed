// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! This module contains the motor-level capability the controllers are written against. Device
//! implementations live in `drivers`.
//!
//! ## Modules
//!
//! - [`actuator`] - Timed, blocking extend/retract bursts for a linear actuator.

pub mod actuator;

pub use actuator::{Actuator, BurstIntent, Direction};

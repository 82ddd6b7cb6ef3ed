// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module provides the closed-loop logic that turns tilt feedback into actuator bursts.
//!
//! ## Modules
//!
//! - [`axis_controller`] - Bounded correction loop for one axis.
//! - [`dual_axis`] - Pitch-then-roll move built from two axis controllers.

pub mod axis_controller;
pub mod dual_axis;

pub use axis_controller::{estimate_burst_millis, AxisController, Evaluation, MoveGoal, Outcome};
pub use dual_axis::{move_to, MoveOutcome};

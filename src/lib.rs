// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Dual-Axis Tracker Firmware
//!
//! This crate contains the control core of a two-axis (pitch, roll) tilt platform driven by two
//! linear actuators and an accelerometer. The library is `no_std` and hardware-agnostic; the
//! STM32F767ZI firmware binary lives in `src/main.rs` behind the `board` feature.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`protocol`] | Text command set, line assembly and command parsing |
//! | [`motors`] | Actuator capability (timed, blocking bursts) |
//! | [`sensors`] | Tilt capability (raw acceleration, derived pitch/roll) |
//! | [`drivers`] | Device drivers (3-wire linear actuator, ADXL345) |
//! | [`control`] | Closed-loop axis correction and dual-axis moves |
//! | [`dispatch`] | Routes parsed commands to the long-lived controllers |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod axis;
pub mod config;
pub mod control;
pub mod dispatch;
pub mod drivers;
pub mod error;
pub mod motors;
pub mod protocol;
pub mod sensors;

pub use axis::{AngularVelocity, Axis};
pub use config::TrackerConfig;
pub use dispatch::{Dispatcher, Report};
pub use error::Error;

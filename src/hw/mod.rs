// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board support for the STM32F767ZI tracker board.

pub mod compat;
pub mod pins;
pub mod usart;

pub use compat::{CycleDelay, I2cCompat, OutPin};
pub use pins::BoardPins;
pub use usart::Usart;

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Text command set used to drive the tracker over a serial console.
//!
//! | Line | Command |
//! | ---- | ------- |
//! | `…testp` | [`Command::TestActuator`] on pitch |
//! | `…testr` | [`Command::TestActuator`] on roll |
//! | `…reada` | [`Command::ReadTilt`] |
//! | `pitch<deg>` | [`Command::SetAxisGoal`] on pitch |
//! | `roll<deg>` | [`Command::SetAxisGoal`] on roll |
//! | `moveto<pitch>:<roll>` | [`Command::MoveTo`] |

use crate::axis::Axis;

// Suffix keywords
pub const CMD_TEST_PITCH: &str = "testp";
pub const CMD_TEST_ROLL: &str = "testr";
pub const CMD_READA: &str = "reada";

// Prefix keywords
pub const CMD_PITCH: &str = "pitch";
pub const CMD_ROLL: &str = "roll";
pub const CMD_MOVE_TO: &str = "moveto";

/// Separates the pitch and roll angles of `moveto`.
pub const MOVE_TO_SEPARATOR: char = ':';

/// One parsed command line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Extend then retract one actuator.
    TestActuator(Axis),
    /// Print raw acceleration and derived angles.
    ReadTilt,
    /// Drive one axis to an angle (degrees).
    SetAxisGoal(Axis, f32),
    /// Drive pitch, then roll, to the given angles (degrees).
    MoveTo(f32, f32),
    Unknown,
}

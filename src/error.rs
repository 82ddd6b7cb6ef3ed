// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Crate-wide error type.

/// Failures reported by controllers, the dual-axis move, and configuration.
///
/// None of these are fatal: the dispatcher reports them on the console and keeps accepting
/// commands.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A controller was handed an axis it does not drive, or a raw axis id is out of range.
    #[error("unknown axis id {0}")]
    AxisUnknown(u8),

    /// `moveto` with both angles exactly 0.
    #[error("both moveto angles are 0")]
    DegenerateMoveRequest,

    /// A goal angle is infinite or NaN.
    #[error("goal angle is not finite")]
    NonFiniteGoal,

    /// The accelerometer did not return a sample.
    #[error("accelerometer read failed")]
    TiltRead,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

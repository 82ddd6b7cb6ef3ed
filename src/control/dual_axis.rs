// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Combined pitch + roll move.
//!
//! The two axes are corrected one after the other: pitch runs all of its iterations before roll
//! starts. The actuators never move at the same time.

use crate::control::axis_controller::{AxisController, MoveGoal, Outcome};
use crate::error::Error;
use crate::motors::Actuator;
use crate::sensors::Tilt;
use crate::Axis;

/// Per-axis results of a move. A failed pitch run does not skip roll.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveOutcome {
    pub pitch: Result<Outcome, Error>,
    pub roll: Result<Outcome, Error>,
}

/// Drive pitch to `pitch_deg`, then roll to `roll_deg`.
///
/// A request with both angles exactly 0 is treated as uninitialized and rejected before anything
/// moves. One zero angle is a valid target.
pub fn move_to<P, R, T>(
    pitch: &mut AxisController<P>,
    roll: &mut AxisController<R>,
    tilt: &mut T,
    pitch_deg: f32,
    roll_deg: f32,
) -> Result<MoveOutcome, Error>
where
    P: Actuator,
    R: Actuator,
    T: Tilt + ?Sized,
{
    if pitch_deg == 0.0 && roll_deg == 0.0 {
        warn!("moveto rejected: both angles are 0");
        return Err(Error::DegenerateMoveRequest);
    }

    let pitch_goal = MoveGoal::new(Axis::Pitch, pitch_deg);
    let roll_goal = MoveGoal::new(Axis::Roll, roll_deg);

    let pitch = pitch.drive(pitch_goal, tilt);
    let roll = roll.drive(roll_goal, tilt);

    Ok(MoveOutcome { pitch, roll })
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command dispatch.
//!
//! The [`Dispatcher`] owns the tilt sensor, one long-lived controller per axis, and the console
//! that diagnostics are written to. Each call to [`Dispatcher::dispatch`] runs exactly one
//! command to completion; because it takes `&mut self`, a new goal can never be applied to a
//! controller whose previous run is still in progress.
//!
//! Console lines end with `\r\n`.

use core::fmt::{self, Write};

use crate::axis::Axis;
use crate::config::TrackerConfig;
use crate::control::{self, AxisController, MoveOutcome, Outcome};
use crate::error::Error;
use crate::motors::Actuator;
use crate::protocol::{parse_strict, Command, ParseError};
use crate::sensors::{Tilt, TiltReading};

/// What a dispatched line did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Report {
    /// Ran an extend/retract test cycle.
    Tested(Axis),
    /// Read the sensor.
    Tilt(TiltReading),
    /// The sensor read for `reada` failed.
    TiltFailed,
    /// Ran one axis controller.
    Axis {
        axis: Axis,
        result: Result<Outcome, Error>,
    },
    /// Ran (or rejected) a dual-axis move.
    Move(Result<MoveOutcome, Error>),
    /// Strict parsing rejected the line.
    Rejected(ParseError),
    /// Unknown command; nothing ran.
    Ignored,
}

/// Routes commands to the controllers.
pub struct Dispatcher<T, P, R, W> {
    tilt: T,
    pitch: AxisController<P>,
    roll: AxisController<R>,
    console: W,
    config: TrackerConfig,
}

impl<T, P, R, W> Dispatcher<T, P, R, W>
where
    T: Tilt,
    P: Actuator,
    R: Actuator,
    W: Write,
{
    /// Build the dispatcher and both controllers. Fails only on an invalid `config`.
    pub fn new(
        tilt: T,
        pitch_actuator: P,
        roll_actuator: R,
        console: W,
        config: TrackerConfig,
    ) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            tilt,
            pitch: AxisController::from_config(Axis::Pitch, pitch_actuator, &config)?,
            roll: AxisController::from_config(Axis::Roll, roll_actuator, &config)?,
            console,
            config,
        })
    }

    /// Parse and run one line.
    pub fn dispatch(&mut self, line: &str) -> Report {
        let command = if self.config.strict_numbers {
            match parse_strict(line) {
                Ok(command) => command,
                Err(ParseError::UnknownCommand) => Command::Unknown,
                Err(e) => {
                    self.say(format_args!("error: {}: {}", e, line));
                    return Report::Rejected(e);
                }
            }
        } else {
            Command::parse(line)
        };

        debug!("dispatch {}", command);
        self.execute(command)
    }

    /// Run an already parsed command.
    pub fn execute(&mut self, command: Command) -> Report {
        match command {
            Command::TestActuator(axis) => {
                let millis = self.config.test_burst_ms;
                match axis {
                    Axis::Pitch => self.pitch.test_cycle(millis),
                    Axis::Roll => self.roll.test_cycle(millis),
                }
                self.say(format_args!(
                    "{} test: extend {} ms, retract {} ms",
                    axis, millis, millis
                ));
                Report::Tested(axis)
            }

            Command::ReadTilt => match self.tilt.read() {
                Ok(reading) => {
                    self.say(format_args!("{}", reading));
                    Report::Tilt(reading)
                }
                Err(_) => {
                    self.say(format_args!("error: {}", Error::TiltRead));
                    Report::TiltFailed
                }
            },

            Command::SetAxisGoal(axis, target_deg) => {
                let result = match axis {
                    Axis::Pitch => self.pitch.run_to(target_deg, &mut self.tilt),
                    Axis::Roll => self.roll.run_to(target_deg, &mut self.tilt),
                };
                self.report_axis(axis, target_deg, &result);
                Report::Axis { axis, result }
            }

            Command::MoveTo(pitch_deg, roll_deg) => {
                let result = control::move_to(
                    &mut self.pitch,
                    &mut self.roll,
                    &mut self.tilt,
                    pitch_deg,
                    roll_deg,
                );
                match &result {
                    Ok(outcome) => {
                        self.report_axis(Axis::Pitch, pitch_deg, &outcome.pitch);
                        self.report_axis(Axis::Roll, roll_deg, &outcome.roll);
                    }
                    Err(e) => self.say(format_args!("error: moveto: {}", e)),
                }
                Report::Move(result)
            }

            Command::Unknown => {
                self.say(format_args!("unknown command"));
                Report::Ignored
            }
        }
    }

    fn report_axis(&mut self, axis: Axis, goal: f32, result: &Result<Outcome, Error>) {
        match result {
            Ok(outcome) => self.say(format_args!("{} -> {:.2}: {}", axis, goal, outcome)),
            Err(e) => self.say(format_args!("{} -> {:.2}: error: {}", axis, goal, e)),
        }
    }

    /// Write one console line. A full or failing console drops the line.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.console.write_fmt(args);
        let _ = self.console.write_str("\r\n");
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn pitch(&self) -> &AxisController<P> {
        &self.pitch
    }

    #[inline]
    pub fn roll(&self) -> &AxisController<R> {
        &self.roll
    }

    #[inline]
    pub fn tilt_mut(&mut self) -> &mut T {
        &mut self.tilt
    }

    #[inline]
    pub fn console(&self) -> &W {
        &self.console
    }

    #[inline]
    pub fn console_mut(&mut self) -> &mut W {
        &mut self.console
    }
}

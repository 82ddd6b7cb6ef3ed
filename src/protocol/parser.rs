// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line parser for the tracker command set.
//!
//! [`Parser`] assembles console bytes into lines; [`Command::parse`] turns a line into a
//! [`Command`]. Keywords are matched in a fixed priority order, so `pitchtestp` is a pitch test,
//! not a pitch goal.

use heapless::{String, Vec};

use crate::axis::Axis;
use crate::protocol::messages::*;

/// Longest accepted command line, excluding the terminator.
pub const MAX_LINE_LEN: usize = 64;

/// One complete command line.
pub type Line = String<MAX_LINE_LEN>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    #[error("line longer than {} bytes", MAX_LINE_LEN)]
    LineTooLong,
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    #[error("malformed number")]
    InvalidNumber,
    #[error("unknown command")]
    UnknownCommand,
}

#[derive(Copy, Clone)]
enum State {
    Collecting,
    /// Overflowed; drop bytes until the next newline.
    Discarding,
}

/// Assembles bytes from the console into lines.
pub struct Parser {
    state: State,
    buf: Vec<u8, MAX_LINE_LEN>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::Collecting,
            buf: Vec::new(),
        }
    }

    /// Process a single incoming byte. Returns `Some` when a line is complete.
    ///
    /// `\r` is ignored and empty lines are skipped.
    pub fn push(&mut self, byte: u8) -> Option<Result<Line, ParseError>> {
        match (self.state, byte) {
            (_, b'\r') => None,
            (State::Discarding, b'\n') => {
                self.state = State::Collecting;
                Some(Err(ParseError::LineTooLong))
            }
            (State::Discarding, _) => None,
            (State::Collecting, b'\n') => {
                if self.buf.is_empty() {
                    return None;
                }
                let line = core::str::from_utf8(&self.buf)
                    .map_err(|_| ParseError::InvalidUtf8)
                    .map(|text| {
                        let mut line = Line::new();
                        // Same capacity as the byte buffer, cannot overflow.
                        let _ = line.push_str(text);
                        line
                    });
                self.buf.clear();
                Some(line)
            }
            (State::Collecting, _) => {
                if self.buf.push(byte).is_err() {
                    self.buf.clear();
                    self.state = State::Discarding;
                }
                None
            }
        }
    }
}

impl Command {
    /// Parse a line. Never fails: anything unrecognized is [`Command::Unknown`] and malformed
    /// numbers read as `0.0`.
    pub fn parse(line: &str) -> Command {
        match split(line) {
            Some(Split::Test(axis)) => Command::TestActuator(axis),
            Some(Split::ReadTilt) => Command::ReadTilt,
            Some(Split::Goal(axis, text)) => Command::SetAxisGoal(axis, parse_float(text)),
            Some(Split::MoveTo(pitch, roll)) => {
                Command::MoveTo(parse_float(pitch), parse_float(roll))
            }
            None => Command::Unknown,
        }
    }
}

/// Same grammar as [`Command::parse`], but numbers must be complete and finite and unknown lines
/// are errors.
pub fn parse_strict(line: &str) -> Result<Command, ParseError> {
    match split(line) {
        Some(Split::Test(axis)) => Ok(Command::TestActuator(axis)),
        Some(Split::ReadTilt) => Ok(Command::ReadTilt),
        Some(Split::Goal(axis, text)) => Ok(Command::SetAxisGoal(axis, strict_float(text)?)),
        Some(Split::MoveTo(pitch, roll)) => {
            Ok(Command::MoveTo(strict_float(pitch)?, strict_float(roll)?))
        }
        None => Err(ParseError::UnknownCommand),
    }
}

/// A recognized line with its numeric fields still as text.
enum Split<'a> {
    Test(Axis),
    ReadTilt,
    Goal(Axis, &'a str),
    MoveTo(&'a str, &'a str),
}

fn split(line: &str) -> Option<Split<'_>> {
    if line.ends_with(CMD_TEST_PITCH) {
        Some(Split::Test(Axis::Pitch))
    } else if line.ends_with(CMD_TEST_ROLL) {
        Some(Split::Test(Axis::Roll))
    } else if line.ends_with(CMD_READA) {
        Some(Split::ReadTilt)
    } else if let Some(rest) = line.strip_prefix(CMD_PITCH) {
        Some(Split::Goal(Axis::Pitch, rest))
    } else if let Some(rest) = line.strip_prefix(CMD_ROLL) {
        Some(Split::Goal(Axis::Roll, rest))
    } else if let Some(rest) = line.strip_prefix(CMD_MOVE_TO) {
        // Without a separator the line is not a move.
        let (pitch, roll) = rest.split_once(MOVE_TO_SEPARATOR)?;
        Some(Split::MoveTo(pitch, roll))
    } else {
        None
    }
}

/// Lenient float parsing.
///
/// Leading whitespace is skipped and the longest numeric prefix
/// (`[+-]digits[.digits][e[+-]digits]`) is used; trailing text is ignored. No numeric prefix,
/// or a prefix that overflows `f32`, gives `0.0`.
pub fn parse_float(text: &str) -> f32 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return 0.0;
    }
    match text[..end].parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn strict_float(text: &str) -> Result<f32, ParseError> {
    let text = text.trim();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 || end != text.len() {
        return Err(ParseError::InvalidNumber);
    }
    match text.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber),
    }
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run, or 0 if it has no digits.
fn numeric_prefix_len(b: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if b.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

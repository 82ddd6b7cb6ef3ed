// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod messages;
pub mod parser;

pub use messages::Command;
pub use parser::{parse_float, parse_strict, Line, ParseError, Parser, MAX_LINE_LEN};

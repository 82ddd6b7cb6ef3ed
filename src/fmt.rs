// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Internal logging macros.
//!
//! With the `defmt` feature these forward to `defmt`; otherwise they compile to nothing. Operator
//! diagnostics go through the dispatcher's console instead.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
    }};
}

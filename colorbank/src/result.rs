//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the colorbank crate.
//!
//! Every error here is a local validation failure. Nothing is retriable, the
//! caller decides whether to fall back to plain text.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`ColorError`].
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors raised while building, registering or resolving colors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// An RGB channel was outside `0..=255`.
    #[error("Invalid RGB color: channel {channel} has value {value}, expected 0..=255")]
    InvalidRgbValue {
        /// Name of the offending channel (`"r"`, `"g"` or `"b"`)
        channel: &'static str,
        /// The rejected value
        value: i32,
    },

    /// An ANSI color code does not fit in the bank's bit width.
    #[error("Invalid ANSI color value: {value}. Should be a {bits}-bit number")]
    InvalidAnsiValue {
        /// The rejected value
        value: i32,
        /// Bits per color of the bank that rejected it
        bits: u32,
    },

    /// Name is not bound in the bank and no default color is configured.
    #[error("Color {name:?} is not in the color bank")]
    UnknownColor {
        /// The name that failed to resolve
        name: String,
    },

    /// A string presented as a hex color is malformed.
    #[error("Could not convert to RGB ({reason}): {value:?}")]
    HexParse {
        /// What was wrong with the input
        reason: HexParseReason,
        /// The input after whitespace trimming
        value: String,
    },
}

impl ColorError {
    /// Check if the error is a numeric range violation, either an RGB channel
    /// or an ANSI code.
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidRgbValue { .. } | ColorError::InvalidAnsiValue { .. }
        )
    }

    /// Check if the error is an unresolved color name
    pub fn is_unknown_color(&self) -> bool {
        matches!(self, ColorError::UnknownColor { .. })
    }
}

/// Why a hex color string was rejected.
///
/// Checks run in declaration order, so an empty string reports [`Empty`](Self::Empty)
/// rather than [`InvalidPrefix`](Self::InvalidPrefix).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexParseReason {
    /// Nothing left after trimming
    Empty,
    /// Does not start with `#`
    InvalidPrefix,
    /// Not 3, 6 or 8 digits after the `#`
    InvalidLength,
    /// Contains a character outside `[0-9a-fA-F]`
    InvalidDigit,
}

impl std::fmt::Display for HexParseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexParseReason::Empty => write!(f, "empty value"),
            HexParseReason::InvalidPrefix => write!(f, "invalid prefix"),
            HexParseReason::InvalidLength => write!(f, "invalid length"),
            HexParseReason::InvalidDigit => write!(f, "invalid hex value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_invalid_value() {
        assert!(ColorError::InvalidRgbValue { channel: "r", value: 256 }.is_invalid_value());
        assert!(ColorError::InvalidAnsiValue { value: 8, bits: 3 }.is_invalid_value());
        assert!(
            !ColorError::UnknownColor {
                name: "mauve".to_string()
            }
            .is_invalid_value()
        );
    }

    #[test]
    fn test_error_display() {
        let err = ColorError::InvalidAnsiValue { value: 256, bits: 8 };
        assert_eq!(
            err.to_string(),
            "Invalid ANSI color value: 256. Should be a 8-bit number"
        );

        let err = ColorError::UnknownColor {
            name: "mauve".to_string(),
        };
        assert_eq!(err.to_string(), "Color \"mauve\" is not in the color bank");

        let err = ColorError::HexParse {
            reason: HexParseReason::InvalidLength,
            value: "#ff00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not convert to RGB (invalid length): \"#ff00\""
        );
    }
}

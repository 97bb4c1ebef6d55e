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


//! Error types for the printing crate.

use tintspec_colorbank::ColorError;
use thiserror::Error;

/// Result type alias for rendering operations.
pub type PrintResult<T> = Result<T, PrintError>;

/// Errors raised while configuring or rendering styled segments.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PrintError {
    /// Color resolution failed in the active bank
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A specification token is neither a modifier keyword, a known color nor
    /// the placeholder
    #[error("Invalid format specifier or unknown color: {token:?}")]
    InvalidSpecToken {
        /// The offending token
        token: String,
    },

    /// A color scheme was requested by a name that does not identify one
    #[error("Color scheme must be one of basic, extended or true, not: {scheme:?}")]
    InvalidSchemeAssignment {
        /// The rejected scheme name
        scheme: String,
    },

    /// Splitter or placeholder settings that would make specifications ambiguous
    #[error("Invalid segment configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },
}

impl PrintError {
    /// Check if the error came from the specification string itself
    pub fn is_spec_error(&self) -> bool {
        matches!(self, PrintError::InvalidSpecToken { .. })
    }

    /// Check if the error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PrintError::InvalidSchemeAssignment { .. } | PrintError::InvalidConfig { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_color_error() {
        let color_error = ColorError::UnknownColor {
            name: "mauve".to_string(),
        };
        let print_error: PrintError = color_error.clone().into();

        assert_eq!(print_error, PrintError::Color(color_error));
        assert_eq!(print_error.to_string(), "Color \"mauve\" is not in the color bank");
    }

    #[test]
    fn test_error_classification() {
        let token = PrintError::InvalidSpecToken {
            token: "notacolor".to_string(),
        };
        assert!(token.is_spec_error());
        assert!(!token.is_config_error());

        let scheme = PrintError::InvalidSchemeAssignment {
            scheme: "cmyk".to_string(),
        };
        assert!(scheme.is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = PrintError::InvalidSpecToken {
            token: "notacolor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid format specifier or unknown color: \"notacolor\""
        );
    }
}

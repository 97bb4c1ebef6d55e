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

use crate::bank::{ColorBank, ColorScheme, NamedColors, SharedBank};
use crate::{ColorResult, RgbColor};
use std::sync::{Arc, LazyLock, RwLock};
use tracing::trace;

/// 24-bit RGB color bank, as specified by ISO-8613-3.
///
/// Unlike the ANSI banks, any hex color string is a valid name here even when it
/// was never registered: `#1a2b3c` resolves to `RgbColor(0x1a, 0x2b, 0x3c)`.
/// Registered names take precedence over hex parsing, and the default color is
/// only consulted when neither applies.
///
/// The standard bank starts empty with a pure white fallback. A theme is just a
/// bank built with [`with_colors`](TrueColor::with_colors):
///
/// ```
/// use tintspec_colorbank::{ColorBank, ColorScheme, RgbColor, TrueColor};
///
/// let monokai = TrueColor::with_colors(
///     [
///         ("red", RgbColor::from_u8(249, 38, 114)),
///         ("white", RgbColor::from_u8(248, 248, 242)),
///     ],
///     Some(RgbColor::from_u8(248, 248, 242)),
/// );
/// assert_eq!(monokai.fg_color_code("red").unwrap(), "38;2;249;38;114");
/// assert_eq!(monokai.bg_color_code("#000").unwrap(), "48;2;0;0;0");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TrueColor {
    colors: NamedColors<RgbColor>,
}

static SHARED_TRUE: LazyLock<SharedBank<TrueColor>> =
    LazyLock::new(|| Arc::new(RwLock::new(TrueColor::new())));

impl TrueColor {
    pub const DEFAULT_COLOR: RgbColor = RgbColor::from_u8(255, 255, 255);

    /// Empty bank with a pure white fallback.
    pub fn new() -> TrueColor {
        TrueColor {
            colors: NamedColors::with_default(Self::DEFAULT_COLOR),
        }
    }

    /// Empty bank with no fallback.
    pub fn empty() -> TrueColor {
        TrueColor {
            colors: NamedColors::new(),
        }
    }

    /// Bank preloaded with `colors`.
    pub fn with_colors<'a, I>(colors: I, default: Option<RgbColor>) -> TrueColor
    where
        I: IntoIterator<Item = (&'a str, RgbColor)>,
    {
        TrueColor {
            colors: NamedColors::from_table(colors, default),
        }
    }

    /// The process wide bank.
    pub fn shared() -> SharedBank<TrueColor> {
        Arc::clone(&SHARED_TRUE)
    }

    /// Registers a color given as a hex string.
    ///
    /// # Errors
    ///
    /// [`ColorError::HexParse`](crate::ColorError::HexParse) if `hex_color` is malformed, the bank is left
    /// unchanged.
    pub fn add_hex_color(&mut self, name: &str, hex_color: &str) -> ColorResult<()> {
        let color = RgbColor::from_hex(hex_color)?;
        self.add_color(name, color)
    }

    pub fn colors(&self) -> &NamedColors<RgbColor> {
        &self.colors
    }
}

impl Default for TrueColor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorScheme for TrueColor {
    fn scheme_name(&self) -> &'static str {
        "true"
    }

    fn has_color(&self, name: &str) -> bool {
        self.colors.contains(name) || RgbColor::is_hex_color(name)
    }

    fn fg_color_code(&self, name: &str) -> ColorResult<String> {
        let color = self.get_color(name)?;
        Ok(format!(
            "38;2;{};{};{}",
            color.red(),
            color.green(),
            color.blue()
        ))
    }

    fn bg_color_code(&self, name: &str) -> ColorResult<String> {
        let color = self.get_color(name)?;
        Ok(format!(
            "48;2;{};{};{}",
            color.red(),
            color.green(),
            color.blue()
        ))
    }
}

impl ColorBank for TrueColor {
    type Value = RgbColor;

    fn add_color(&mut self, name: &str, value: RgbColor) -> ColorResult<()> {
        self.colors.insert(name, value);
        Ok(())
    }

    fn get_color(&self, name: &str) -> ColorResult<RgbColor> {
        if let Some(color) = self.colors.lookup(name) {
            return Ok(*color);
        }
        match RgbColor::from_hex(name) {
            Ok(color) => {
                trace!(name, "Resolved color as hex literal");
                Ok(color)
            }
            Err(_) => self.colors.resolve(name),
        }
    }

    fn default_color(&self) -> Option<&RgbColor> {
        self.colors.default_value()
    }

    fn set_default_color(&mut self, value: RgbColor) -> ColorResult<()> {
        self.colors.set_default(Some(value));
        Ok(())
    }

    fn clear_default_color(&mut self) {
        self.colors.set_default(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;
    use tracing_test::traced_test;

    #[test]
    fn test_registered_name_beats_hex() {
        let mut bank = TrueColor::empty();
        bank.add_color("#fff", RgbColor::from_u8(1, 2, 3)).unwrap();
        assert_eq!(bank.get_color("#fff"), Ok(RgbColor::from_u8(1, 2, 3)));
    }

    #[test]
    #[traced_test]
    fn test_hex_beats_default() {
        let mut bank = TrueColor::new();
        bank.set_default_color(RgbColor::from_u8(0, 0, 0)).unwrap();
        assert_eq!(
            bank.get_color("#1a2b3c"),
            Ok(RgbColor::from_u8(0x1a, 0x2b, 0x3c))
        );
        assert!(logs_contain("Resolved color as hex literal"));
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        let bank = TrueColor::new();
        assert_eq!(bank.get_color("mauve"), Ok(TrueColor::DEFAULT_COLOR));
        assert_eq!(bank.fg_color_code("mauve").unwrap(), "38;2;255;255;255");
    }

    #[test]
    fn test_unknown_without_default() {
        let bank = TrueColor::empty();
        assert_eq!(
            bank.get_color("mauve"),
            Err(ColorError::UnknownColor {
                name: "mauve".to_string()
            })
        );
    }

    #[test]
    fn test_add_hex_color() {
        let mut bank = TrueColor::empty();
        bank.add_hex_color("black", "#000000").unwrap();
        assert_eq!(bank.get_color("black"), Ok(RgbColor::from_u8(0, 0, 0)));

        assert!(bank.add_hex_color("broken", "#00").is_err());
        assert!(!bank.has_color("broken"));
    }

    #[test]
    fn test_has_color_accepts_hex() {
        let mut bank = TrueColor::empty();
        bank.add_color("black", RgbColor::from_u8(0, 0, 0)).unwrap();
        assert!(bank.has_color("black"));
        assert!(bank.has_color("#00ff00"));
        assert!(!bank.has_color("invalid_color"));
    }
}

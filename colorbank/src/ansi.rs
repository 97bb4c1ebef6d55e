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

//! Palette indexed ANSI color banks.
//!
//! | Bank              | Values   | Foreground  | Background  |
//! |-------------------|----------|-------------|-------------|
//! | [`BasicColor`]    | `0..8`   | `3{n}`      | `4{n}`      |
//! | [`ExtendedColor`] | `0..256` | `38;5;{n}`  | `48;5;{n}`  |

use crate::bank::{ColorBank, ColorScheme, NamedColors, SharedBank};
use crate::consts::{BASIC_COLORS, EXTENDED_COLORS};
use crate::{ColorError, ColorResult};
use std::sync::{Arc, LazyLock, RwLock};

/// Rejects codes that do not fit in `bits` bits.
fn validate_code(value: i32, bits: u32) -> ColorResult<i32> {
    if value < 0 || i64::from(value) >= 1i64 << bits {
        return Err(ColorError::InvalidAnsiValue { value, bits });
    }
    Ok(value)
}

/// 3-bit ANSI colors, the eight colors every terminal understands.
///
/// Preloaded with `black`, `red`, `green`, `yellow`, `blue`, `purple`, `cyan`
/// and `white`, falling back to `white`.
///
/// ```
/// use tintspec_colorbank::{BasicColor, ColorScheme};
///
/// let bank = BasicColor::new();
/// assert_eq!(bank.fg_color_code("red").unwrap(), "31");
/// assert_eq!(bank.bg_color_code("blue").unwrap(), "44");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BasicColor {
    colors: NamedColors<i32>,
}

static SHARED_BASIC: LazyLock<SharedBank<BasicColor>> =
    LazyLock::new(|| Arc::new(RwLock::new(BasicColor::new())));

impl BasicColor {
    pub const BITS_PER_COLOR: u32 = 3;

    /// Bank with the standard table and a `white` fallback.
    pub fn new() -> BasicColor {
        BasicColor {
            colors: NamedColors::from_table(BASIC_COLORS, Some(7)),
        }
    }

    /// Bank with no names and no fallback.
    pub fn empty() -> BasicColor {
        BasicColor {
            colors: NamedColors::new(),
        }
    }

    /// The process wide bank.
    pub fn shared() -> SharedBank<BasicColor> {
        Arc::clone(&SHARED_BASIC)
    }

    pub fn colors(&self) -> &NamedColors<i32> {
        &self.colors
    }
}

impl Default for BasicColor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorScheme for BasicColor {
    fn scheme_name(&self) -> &'static str {
        "basic"
    }

    fn has_color(&self, name: &str) -> bool {
        self.colors.contains(name)
    }

    fn fg_color_code(&self, name: &str) -> ColorResult<String> {
        Ok(format!("3{}", self.get_color(name)?))
    }

    fn bg_color_code(&self, name: &str) -> ColorResult<String> {
        Ok(format!("4{}", self.get_color(name)?))
    }
}

impl ColorBank for BasicColor {
    type Value = i32;

    fn add_color(&mut self, name: &str, value: i32) -> ColorResult<()> {
        let value = validate_code(value, Self::BITS_PER_COLOR)?;
        self.colors.insert(name, value);
        Ok(())
    }

    fn get_color(&self, name: &str) -> ColorResult<i32> {
        self.colors.resolve(name)
    }

    fn default_color(&self) -> Option<&i32> {
        self.colors.default_value()
    }

    fn set_default_color(&mut self, value: i32) -> ColorResult<()> {
        let value = validate_code(value, Self::BITS_PER_COLOR)?;
        self.colors.set_default(Some(value));
        Ok(())
    }

    fn clear_default_color(&mut self) {
        self.colors.set_default(None);
    }
}

/// 8-bit ANSI colors, the xterm 256 color palette.
///
/// Preloaded with the xterm color names (`maroon`, `navy_blue`, `grey_50`, ...),
/// falling back to `white` (15).
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedColor {
    colors: NamedColors<i32>,
}

static SHARED_EXTENDED: LazyLock<SharedBank<ExtendedColor>> =
    LazyLock::new(|| Arc::new(RwLock::new(ExtendedColor::new())));

impl ExtendedColor {
    pub const BITS_PER_COLOR: u32 = 8;

    pub fn new() -> ExtendedColor {
        ExtendedColor {
            colors: NamedColors::from_table(EXTENDED_COLORS, Some(15)),
        }
    }

    pub fn empty() -> ExtendedColor {
        ExtendedColor {
            colors: NamedColors::new(),
        }
    }

    /// The process wide bank.
    pub fn shared() -> SharedBank<ExtendedColor> {
        Arc::clone(&SHARED_EXTENDED)
    }

    pub fn colors(&self) -> &NamedColors<i32> {
        &self.colors
    }
}

impl Default for ExtendedColor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorScheme for ExtendedColor {
    fn scheme_name(&self) -> &'static str {
        "extended"
    }

    fn has_color(&self, name: &str) -> bool {
        self.colors.contains(name)
    }

    fn fg_color_code(&self, name: &str) -> ColorResult<String> {
        Ok(format!("38;5;{}", self.get_color(name)?))
    }

    fn bg_color_code(&self, name: &str) -> ColorResult<String> {
        Ok(format!("48;5;{}", self.get_color(name)?))
    }
}

impl ColorBank for ExtendedColor {
    type Value = i32;

    fn add_color(&mut self, name: &str, value: i32) -> ColorResult<()> {
        let value = validate_code(value, Self::BITS_PER_COLOR)?;
        self.colors.insert(name, value);
        Ok(())
    }

    fn get_color(&self, name: &str) -> ColorResult<i32> {
        self.colors.resolve(name)
    }

    fn default_color(&self) -> Option<&i32> {
        self.colors.default_value()
    }

    fn set_default_color(&mut self, value: i32) -> ColorResult<()> {
        let value = validate_code(value, Self::BITS_PER_COLOR)?;
        self.colors.set_default(Some(value));
        Ok(())
    }

    fn clear_default_color(&mut self) {
        self.colors.set_default(None);
    }
}

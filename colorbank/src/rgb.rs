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

use crate::{ColorError, ColorResult, HexParseReason};

/// A 24-bit RGB color value.
///
/// `RgbColor` is an immutable value object: three 8-bit channels with structural
/// equality. It can be built from integers (range checked), from raw bytes, or
/// from a hex string.
///
/// # Hex Format
///
/// [`from_hex`](RgbColor::from_hex) accepts `#` followed by 3, 6 or 8 hex digits,
/// in any case, with surrounding whitespace ignored:
///
/// - `#RGB` expands each digit by doubling it (`#abc` is `#aabbcc`)
/// - `#RRGGBB` is taken as is
/// - `#RRGGBBAA` drops the trailing alpha pair
///
/// [`to_hex`](RgbColor::to_hex) always emits the lowercase `#rrggbb` form.
///
/// # Examples
///
/// ```
/// use tintspec_colorbank::RgbColor;
///
/// let teal = RgbColor::from_hex("  #0AF  ").unwrap();
/// assert_eq!(teal, RgbColor::from_u8(0x00, 0xaa, 0xff));
/// assert_eq!(teal.to_hex(), "#00aaff");
/// assert_eq!(teal.to_string(), "(0, 170, 255)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RgbColor {
    /// Creates a color from integer channels.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRgbValue`] for the first channel outside
    /// `0..=255`.
    pub fn new(r: i32, g: i32, b: i32) -> ColorResult<RgbColor> {
        Ok(RgbColor {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }

    /// Creates a color from bytes. Infallible, every `u8` is a valid channel.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> RgbColor {
        RgbColor { r, g, b }
    }

    /// Parses a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::HexParse`] describing the first check that failed
    /// on the trimmed input.
    pub fn from_hex(hex_color: &str) -> ColorResult<RgbColor> {
        let trimmed = hex_color.trim();
        let value = parse_hex_value(trimmed).map_err(|reason| ColorError::HexParse {
            reason,
            value: trimmed.to_string(),
        })?;

        Ok(RgbColor::from(value))
    }

    /// Returns `true` if `value` would be accepted by [`from_hex`](RgbColor::from_hex).
    pub fn is_hex_color(value: &str) -> bool {
        parse_hex_value(value.trim()).is_ok()
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        format!("{:x}", self)
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }
}

fn channel(name: &'static str, value: i32) -> ColorResult<u8> {
    u8::try_from(value).map_err(|_| ColorError::InvalidRgbValue {
        channel: name,
        value,
    })
}

/// Validates a trimmed hex string and returns its 24-bit `0xRRGGBB` value.
fn parse_hex_value(hex_color: &str) -> Result<u32, HexParseReason> {
    if hex_color.is_empty() {
        return Err(HexParseReason::Empty);
    }

    let digits = hex_color
        .strip_prefix('#')
        .ok_or(HexParseReason::InvalidPrefix)?;

    let expanded = match digits.chars().count() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        // Alpha is discarded
        8 => digits.chars().take(6).collect::<String>(),
        _ => return Err(HexParseReason::InvalidLength),
    };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexParseReason::InvalidDigit);
    }

    u32::from_str_radix(&expanded, 16).map_err(|_| HexParseReason::InvalidDigit)
}

impl From<u32> for RgbColor {
    /// Big-endian `0x__RRGGBB`, the top byte is ignored.
    fn from(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        RgbColor { r, g, b }
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        RgbColor { r, g, b }
    }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self {
        (color.r, color.g, color.b)
    }
}

impl TryFrom<(i32, i32, i32)> for RgbColor {
    type Error = ColorError;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Self::Error> {
        RgbColor::new(r, g, b)
    }
}

impl std::str::FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RgbColor::from_hex(s)
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl std::fmt::LowerHex for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::UpperHex for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let color = RgbColor::new(0, 128, 255).unwrap();
        assert_eq!((color.red(), color.green(), color.blue()), (0, 128, 255));
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(
            RgbColor::new(-1, 0, 0),
            Err(ColorError::InvalidRgbValue {
                channel: "r",
                value: -1
            })
        );
        assert_eq!(
            RgbColor::new(0, 256, 0),
            Err(ColorError::InvalidRgbValue {
                channel: "g",
                value: 256
            })
        );
        assert!(RgbColor::new(0, 0, 1000).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_from_hex_forms() {
        let expected = RgbColor::from_u8(0x1a, 0x2b, 0x3c);
        assert_eq!(RgbColor::from_hex("#1a2b3c").unwrap(), expected);
        assert_eq!(RgbColor::from_hex("#1A2B3C").unwrap(), expected);
        assert_eq!(RgbColor::from_hex("#1a2b3cff").unwrap(), expected);
        assert_eq!(RgbColor::from_hex("\t#1a2B3c00 \n").unwrap(), expected);
        assert_eq!(
            RgbColor::from_hex("#abc").unwrap(),
            RgbColor::from_u8(0xaa, 0xbb, 0xcc)
        );
        assert_eq!(
            RgbColor::from_hex("#fff").unwrap(),
            RgbColor::from_u8(255, 255, 255)
        );
    }

    #[test]
    fn test_from_hex_failures() {
        let reason = |s: &str| match RgbColor::from_hex(s) {
            Err(ColorError::HexParse { reason, .. }) => reason,
            other => panic!("Expected hex parse error, got {:?}", other),
        };

        assert_eq!(reason(""), HexParseReason::Empty);
        assert_eq!(reason("   "), HexParseReason::Empty);
        assert_eq!(reason("fff"), HexParseReason::InvalidPrefix);
        assert_eq!(reason("0x123456"), HexParseReason::InvalidPrefix);
        assert_eq!(reason("#"), HexParseReason::InvalidLength);
        assert_eq!(reason("#ff"), HexParseReason::InvalidLength);
        assert_eq!(reason("#ff000"), HexParseReason::InvalidLength);
        assert_eq!(reason("#ff00000"), HexParseReason::InvalidLength);
        assert_eq!(reason("#ggg"), HexParseReason::InvalidDigit);
        assert_eq!(reason("#12345z"), HexParseReason::InvalidDigit);
        assert_eq!(reason("#+12"), HexParseReason::InvalidDigit);
        // Alpha digits are still validated
        assert_eq!(reason("#123456zz"), HexParseReason::InvalidDigit);
    }

    #[test]
    fn test_from_hex_reports_trimmed_value() {
        let err = RgbColor::from_hex("  #12  ").unwrap_err();
        assert_eq!(
            err,
            ColorError::HexParse {
                reason: HexParseReason::InvalidLength,
                value: "#12".to_string()
            }
        );
    }

    #[test]
    fn test_is_hex_color() {
        assert!(RgbColor::is_hex_color("#fff"));
        assert!(RgbColor::is_hex_color("#FFFFFF"));
        assert!(RgbColor::is_hex_color("#00ff00aa"));
        assert!(!RgbColor::is_hex_color("fff"));
        assert!(!RgbColor::is_hex_color("#ffff"));
        assert!(!RgbColor::is_hex_color("#éé"));
        assert!(!RgbColor::is_hex_color("red"));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::from_u8(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::from_u8(1, 10, 255).to_hex(), "#010aff");
        assert_eq!(format!("{:X}", RgbColor::from_u8(1, 10, 255)), "#010AFF");
    }

    #[test]
    fn test_conversions() {
        let color: RgbColor = (1u8, 2u8, 3u8).into();
        let tuple: (u8, u8, u8) = color.into();
        assert_eq!(tuple, (1, 2, 3));

        assert_eq!(RgbColor::from(0xff8000u32), RgbColor::from_u8(255, 128, 0));
        assert!(RgbColor::try_from((0, 0, 300)).is_err());
        assert_eq!("#102030".parse::<RgbColor>(), Ok(RgbColor::from_u8(16, 32, 48)));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(RgbColor::new(1, 2, 3).unwrap(), RgbColor::from_u8(1, 2, 3));
        assert_ne!(RgbColor::from_u8(1, 2, 3), RgbColor::from_u8(3, 2, 1));
    }
}

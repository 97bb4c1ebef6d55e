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


//! SGR attribute codes a style specification can request.
//!
//! Modifiers come in two disjoint kinds. A [`ColorModifier`] changes how the
//! colors themselves are rendered and at most one is active at a time. A
//! [`TextModifier`] decorates the text and any subset can be active.

/// Color intensity modifiers, SGR codes `0` to `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorModifier {
    /// Reset all attributes, SGR `0`.
    Reset,
    /// Bold or increased intensity, SGR `1`.
    Bold,
    /// Faint or decreased intensity, SGR `2`.
    Faint,
}

impl ColorModifier {
    /// Converts the modifier to its SGR code.
    ///
    /// ```
    /// use tintspec_printing::ColorModifier;
    ///
    /// assert_eq!(ColorModifier::Reset.to_u8(), 0);
    /// assert_eq!(ColorModifier::Bold.to_u8(), 1);
    /// assert_eq!(ColorModifier::Faint.to_u8(), 2);
    /// ```
    pub fn to_u8(&self) -> u8 {
        match self {
            ColorModifier::Reset => 0,
            ColorModifier::Bold => 1,
            ColorModifier::Faint => 2,
        }
    }

    /// Converts an SGR code back to a modifier, `None` for anything outside `0..=2`.
    pub fn from_u8(value: u8) -> Option<ColorModifier> {
        match value {
            0 => Some(ColorModifier::Reset),
            1 => Some(ColorModifier::Bold),
            2 => Some(ColorModifier::Faint),
            _ => None,
        }
    }
}

/// Text decoration modifiers, SGR codes `3` to `9`.
///
/// The derived ordering follows the SGR code, which is also the order the
/// modifiers are emitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextModifier {
    /// SGR `3`.
    Italic,
    /// SGR `4`.
    Underline,
    /// Slow blink, SGR `5`.
    Blink,
    /// Rapid blink, SGR `6`.
    BlinkFast,
    /// Swap foreground and background, SGR `7`.
    ReverseVideo,
    /// Concealed text, SGR `8`.
    Erase,
    /// SGR `9`.
    Strikethrough,
}

impl TextModifier {
    pub const ALL: [TextModifier; 7] = [
        TextModifier::Italic,
        TextModifier::Underline,
        TextModifier::Blink,
        TextModifier::BlinkFast,
        TextModifier::ReverseVideo,
        TextModifier::Erase,
        TextModifier::Strikethrough,
    ];

    /// Converts the modifier to its SGR code.
    pub fn to_u8(&self) -> u8 {
        match self {
            TextModifier::Italic => 3,
            TextModifier::Underline => 4,
            TextModifier::Blink => 5,
            TextModifier::BlinkFast => 6,
            TextModifier::ReverseVideo => 7,
            TextModifier::Erase => 8,
            TextModifier::Strikethrough => 9,
        }
    }

    pub fn from_u8(value: u8) -> Option<TextModifier> {
        match value {
            3 => Some(TextModifier::Italic),
            4 => Some(TextModifier::Underline),
            5 => Some(TextModifier::Blink),
            6 => Some(TextModifier::BlinkFast),
            7 => Some(TextModifier::ReverseVideo),
            8 => Some(TextModifier::Erase),
            9 => Some(TextModifier::Strikethrough),
            _ => None,
        }
    }
}

/// Either kind of modifier, the value side of the keyword table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Color(ColorModifier),
    Text(TextModifier),
}

impl Modifier {
    pub fn to_u8(&self) -> u8 {
        match self {
            Modifier::Color(modifier) => modifier.to_u8(),
            Modifier::Text(modifier) => modifier.to_u8(),
        }
    }

    pub fn from_u8(value: u8) -> Option<Modifier> {
        ColorModifier::from_u8(value)
            .map(Modifier::Color)
            .or_else(|| TextModifier::from_u8(value).map(Modifier::Text))
    }
}

impl From<ColorModifier> for Modifier {
    fn from(modifier: ColorModifier) -> Self {
        Modifier::Color(modifier)
    }
}

impl From<TextModifier> for Modifier {
    fn from(modifier: TextModifier) -> Self {
        Modifier::Text(modifier)
    }
}

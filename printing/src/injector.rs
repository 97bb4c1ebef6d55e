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


use crate::{ColorModifier, TextModifier};
use std::collections::BTreeSet;
use tintspec_colorbank::{ColorResult, ColorScheme};

/// Accumulates the style requested by one specification and renders it.
///
/// An injector is built per render, filled in by the specification parser and
/// consumed by [`apply`](ColorInjector::apply). Colors are kept as names and only
/// resolved against the bound scheme when the sequence is rendered.
///
/// # Output
///
/// Parameters are emitted in a fixed order, joined by `;`:
///
/// 1. the color modifier, if set
/// 2. the foreground color, if set
/// 3. the background color, if set
/// 4. every text modifier, in ascending SGR code order
///
/// and wrapped as `ESC[<params>m<text>ESC[0m`. With no parameters the text is
/// returned untouched.
///
/// ```
/// use tintspec_colorbank::BasicColor;
/// use tintspec_printing::{ColorInjector, ColorModifier, TextModifier};
///
/// let bank = BasicColor::new();
/// let mut injector = ColorInjector::new(&bank);
/// injector.set_fg_color("red");
/// injector.set_color_modifier(ColorModifier::Bold);
/// injector.add_text_modifier(TextModifier::Underline);
///
/// assert_eq!(injector.apply("x").unwrap(), "\x1b[1;31;4mx\x1b[0m");
/// ```
#[derive(Clone, Debug)]
pub struct ColorInjector<'a> {
    color_scheme: &'a dyn ColorScheme,
    fg_color: Option<String>,
    bg_color: Option<String>,
    color_mod: Option<ColorModifier>,
    text_mods: BTreeSet<TextModifier>,
}

impl<'a> ColorInjector<'a> {
    /// Empty injector resolving colors through `color_scheme`.
    pub fn new(color_scheme: &'a dyn ColorScheme) -> ColorInjector<'a> {
        ColorInjector {
            color_scheme,
            fg_color: None,
            bg_color: None,
            color_mod: None,
            text_mods: BTreeSet::new(),
        }
    }

    pub fn color_scheme(&self) -> &'a dyn ColorScheme {
        self.color_scheme
    }

    pub fn fg_color(&self) -> Option<&str> {
        self.fg_color.as_deref()
    }

    pub fn bg_color(&self) -> Option<&str> {
        self.bg_color.as_deref()
    }

    pub fn color_modifier(&self) -> Option<ColorModifier> {
        self.color_mod
    }

    pub fn text_modifiers(&self) -> &BTreeSet<TextModifier> {
        &self.text_mods
    }

    /// Replaces the foreground color name.
    pub fn set_fg_color(&mut self, name: &str) {
        self.fg_color = Some(name.to_string());
    }

    /// Replaces the background color name.
    pub fn set_bg_color(&mut self, name: &str) {
        self.bg_color = Some(name.to_string());
    }

    /// Replaces the color modifier, only the last one set is rendered.
    pub fn set_color_modifier(&mut self, modifier: ColorModifier) {
        self.color_mod = Some(modifier);
    }

    /// Adds a text modifier. Adding one twice has no further effect.
    pub fn add_text_modifier(&mut self, modifier: TextModifier) {
        self.text_mods.insert(modifier);
    }

    /// Returns `true` if nothing has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.color_mod.is_none()
            && self.fg_color.is_none()
            && self.bg_color.is_none()
            && self.text_mods.is_empty()
    }

    /// SGR parameter fragments in output order.
    ///
    /// # Errors
    ///
    /// Whatever the scheme raises resolving a color name, typically
    /// [`ColorError::UnknownColor`](tintspec_colorbank::ColorError::UnknownColor).
    pub fn codes(&self) -> ColorResult<Vec<String>> {
        let mut codes = Vec::with_capacity(3 + self.text_mods.len());

        if let Some(modifier) = self.color_mod {
            codes.push(modifier.to_u8().to_string());
        }
        if let Some(fg_color) = &self.fg_color {
            codes.push(self.color_scheme.fg_color_code(fg_color)?);
        }
        if let Some(bg_color) = &self.bg_color {
            codes.push(self.color_scheme.bg_color_code(bg_color)?);
        }
        codes.extend(self.text_mods.iter().map(|modifier| modifier.to_u8().to_string()));

        Ok(codes)
    }

    /// Wraps `text` in the accumulated escape sequence.
    pub fn apply(self, text: &str) -> ColorResult<String> {
        let codes = self.codes()?;

        if codes.is_empty() {
            return Ok(text.to_string());
        }

        Ok(format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text))
    }
}

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


//! Terminal text styling from compact specifications.
//!
//! ```
//! use tintspec_printing::{ColorSchemeKind, ColorSegment, SegmentConfig};
//!
//! let config = SegmentConfig::with_scheme_kind(ColorSchemeKind::Basic);
//! let styled = ColorSegment::new("x").render_with("red/blue italic", &config).unwrap();
//! assert_eq!(styled, "\x1b[31;44;3mx\x1b[0m");
//! ```
//!
//! The pieces, leaf first:
//!
//! - [`ColorModifier`] / [`TextModifier`] - the SGR attribute codes
//! - [`ColorInjector`] - accumulates a style and renders the escape sequence
//! - [`SegmentConfig`] - scheme, splitter, placeholder and keyword table
//! - [`ColorSegment`] - parses a specification and renders text with it

mod config;
mod injector;
mod modifiers;
mod result;
mod segment;

pub use self::config::{
    ColorSchemeKind, DEFAULT_PLACEHOLDER, DEFAULT_SPLITTER, SegmentConfig,
    default_modifier_keywords,
};
pub use self::injector::ColorInjector;
pub use self::modifiers::{ColorModifier, Modifier, TextModifier};
pub use self::result::{PrintError, PrintResult};
pub use self::segment::{ColorSegment, style};
pub use tintspec_colorbank::{
    BasicColor, ColorBank, ColorError, ColorScheme, ExtendedColor, RgbColor, SharedBank,
    SharedScheme, TrueColor,
};

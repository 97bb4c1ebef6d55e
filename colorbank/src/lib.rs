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


//! Named color banks for terminal styling.
//!
//! A bank resolves user facing color names to SGR parameter fragments for one
//! color scheme:
//!
//! - [`BasicColor`] - 3-bit ANSI colors (`31`, `44`)
//! - [`ExtendedColor`] - 8-bit xterm palette (`38;5;n`, `48;5;n`)
//! - [`TrueColor`] - 24-bit RGB (`38;2;r;g;b`, `48;2;r;g;b`), also accepting
//!   hex strings as names
//!
//! Each bank has a process wide, pre-populated instance behind
//! [`shared()`](BasicColor::shared). Standalone banks can be built and passed
//! around instead when global state is not wanted.

mod ansi;
mod bank;
mod consts;
mod result;
mod rgb;
mod truecolor;

pub use self::ansi::{BasicColor, ExtendedColor};
pub use self::bank::{
    ColorBank, ColorScheme, NamedColors, SharedBank, SharedScheme, read_shared, write_shared,
};
pub use self::consts::{BASIC_COLORS, EXTENDED_COLORS};
pub use self::result::{ColorError, ColorResult, HexParseReason};
pub use self::rgb::RgbColor;
pub use self::truecolor::TrueColor;

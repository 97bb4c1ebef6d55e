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


use crate::{ColorModifier, Modifier, PrintError, PrintResult, TextModifier};
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};
use tintspec_colorbank::{BasicColor, ExtendedColor, SharedScheme, TrueColor};

/// Character separating foreground and background in a split token.
pub const DEFAULT_SPLITTER: char = '/';

/// Token meaning "leave this color unset".
pub const DEFAULT_PLACEHOLDER: &str = "_";

/// The three built in color schemes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSchemeKind {
    /// 3-bit ANSI, [`BasicColor`]
    Basic,
    /// 8-bit ANSI, [`ExtendedColor`]
    Extended,
    /// 24-bit RGB, [`TrueColor`]
    True,
}

impl ColorSchemeKind {
    /// The process wide bank for this scheme.
    pub fn shared(&self) -> SharedScheme {
        match self {
            ColorSchemeKind::Basic => BasicColor::shared(),
            ColorSchemeKind::Extended => ExtendedColor::shared(),
            ColorSchemeKind::True => TrueColor::shared(),
        }
    }
}

impl std::str::FromStr for ColorSchemeKind {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "ansi" | "16" => Ok(ColorSchemeKind::Basic),
            "extended" | "256" | "fixed" => Ok(ColorSchemeKind::Extended),
            "true" | "truecolor" | "24bit" | "rgb" => Ok(ColorSchemeKind::True),
            _ => Err(PrintError::InvalidSchemeAssignment {
                scheme: s.to_string(),
            }),
        }
    }
}

/// Keyword table shipped by default.
///
/// | Modifier        | Keywords                       |
/// |-----------------|--------------------------------|
/// | reset           | `reset`, `normal`              |
/// | bold            | `bold`, `strong`, `b`          |
/// | faint           | `faint`, `dim`, `f`            |
/// | italic          | `italic`, `cursive`, `i`       |
/// | underline       | `underline`, `u`               |
/// | blink           | `blink`, `bl`                  |
/// | blink fast      | `blink_fast`, `blf`            |
/// | reverse video   | `reverse_video`, `rv`          |
/// | erase           | `erase`, `hidden`, `e`         |
/// | strikethrough   | `strikethrough`, `strike`, `s` |
pub fn default_modifier_keywords() -> HashMap<String, Modifier> {
    let table: [(Modifier, &[&str]); 10] = [
        (ColorModifier::Reset.into(), &["reset", "normal"]),
        (ColorModifier::Bold.into(), &["bold", "strong", "b"]),
        (ColorModifier::Faint.into(), &["faint", "dim", "f"]),
        (TextModifier::Italic.into(), &["italic", "cursive", "i"]),
        (TextModifier::Underline.into(), &["underline", "u"]),
        (TextModifier::Blink.into(), &["blink", "bl"]),
        (TextModifier::BlinkFast.into(), &["blink_fast", "blf"]),
        (TextModifier::ReverseVideo.into(), &["reverse_video", "rv"]),
        (TextModifier::Erase.into(), &["erase", "hidden", "e"]),
        (
            TextModifier::Strikethrough.into(),
            &["strikethrough", "strike", "s"],
        ),
    ];

    table
        .into_iter()
        .flat_map(|(modifier, keywords)| {
            keywords
                .iter()
                .map(move |keyword| (keyword.to_string(), modifier))
        })
        .collect()
}

/// Settings shared by every [`ColorSegment`](crate::ColorSegment) render.
#[derive(Clone, Debug)]
pub struct SegmentConfig {
    /// Bank color names are validated and resolved against
    pub scheme: SharedScheme,
    /// Separates foreground from background in a split token
    pub splitter: char,
    /// Leaves a color slot unset
    pub placeholder: String,
    /// User facing words mapped to modifiers
    pub modifier_keywords: HashMap<String, Modifier>,
}

impl SegmentConfig {
    /// Basic ANSI colors with the default splitter, placeholder and keywords.
    pub fn new() -> SegmentConfig {
        SegmentConfig::with_scheme_kind(ColorSchemeKind::Basic)
    }

    /// Defaults with one of the built in schemes.
    pub fn with_scheme_kind(kind: ColorSchemeKind) -> SegmentConfig {
        SegmentConfig {
            scheme: kind.shared(),
            splitter: DEFAULT_SPLITTER,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            modifier_keywords: default_modifier_keywords(),
        }
    }

    pub fn with_scheme(mut self, scheme: SharedScheme) -> SegmentConfig {
        self.scheme = scheme;
        self
    }

    pub fn with_splitter(mut self, splitter: char) -> SegmentConfig {
        self.splitter = splitter;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> SegmentConfig {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_modifier_keywords(mut self, keywords: HashMap<String, Modifier>) -> SegmentConfig {
        self.modifier_keywords = keywords;
        self
    }

    /// Maps `keyword` to `modifier`, replacing any previous mapping.
    pub fn add_modifier_keyword(&mut self, keyword: &str, modifier: Modifier) {
        self.modifier_keywords.insert(keyword.to_string(), modifier);
    }

    /// Rejects settings under which tokens cannot be told apart.
    ///
    /// Tokens are whitespace separated, so neither the splitter nor the
    /// placeholder may contain whitespace, and the placeholder must be a
    /// non-empty token that does not contain the splitter.
    pub fn validate(&self) -> PrintResult<()> {
        if self.splitter.is_whitespace() {
            return Err(PrintError::InvalidConfig {
                reason: format!("splitter {:?} is whitespace", self.splitter),
            });
        }
        if self.placeholder.is_empty() {
            return Err(PrintError::InvalidConfig {
                reason: "placeholder is empty".to_string(),
            });
        }
        if self.placeholder.chars().any(char::is_whitespace) {
            return Err(PrintError::InvalidConfig {
                reason: format!("placeholder {:?} contains whitespace", self.placeholder),
            });
        }
        if self.placeholder.contains(self.splitter) {
            return Err(PrintError::InvalidConfig {
                reason: format!(
                    "placeholder {:?} contains splitter {:?}",
                    self.placeholder, self.splitter
                ),
            });
        }
        Ok(())
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CONFIG: LazyLock<RwLock<SegmentConfig>> =
    LazyLock::new(|| RwLock::new(SegmentConfig::default()));

/// The process wide configuration used by [`ColorSegment::render`](crate::ColorSegment::render).
pub(crate) fn global_config() -> &'static RwLock<SegmentConfig> {
    &GLOBAL_CONFIG
}

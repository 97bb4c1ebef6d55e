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


//! Compact style specifications.
//!
//! A specification is a whitespace separated list of tokens, each one of:
//!
//! - a modifier keyword: `bold`, `i`, `strike`, ...
//! - a color name, or a hex code when the true color scheme is active
//! - the placeholder `_`, which sets nothing
//! - a split token `fg/bg`, where each half is a color name or the placeholder
//!
//! Later tokens overwrite earlier ones for the same color slot, so
//! `"red/blue green"` renders green on blue.

use crate::config::global_config;
use crate::{
    ColorInjector, ColorSchemeKind, Modifier, PrintError, PrintResult, SegmentConfig,
};
use std::collections::HashMap;
use tintspec_colorbank::{ColorScheme, SharedScheme, read_shared, write_shared};
use tracing::{debug, instrument};

/// A piece of text to be rendered with a style specification.
///
/// Rendering either uses the process wide [`SegmentConfig`], managed through the
/// associated functions on this type, or an explicit one passed to
/// [`render_with`](ColorSegment::render_with).
///
/// ```
/// use tintspec_printing::{ColorSchemeKind, ColorSegment, SegmentConfig};
///
/// let config = SegmentConfig::with_scheme_kind(ColorSchemeKind::True);
/// let hi = ColorSegment::new("hi");
///
/// assert_eq!(
///     hi.render_with("bold _/#fff", &config).unwrap(),
///     "\x1b[1;48;2;255;255;255mhi\x1b[0m"
/// );
/// assert_eq!(hi.render_with("", &config).unwrap(), "hi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorSegment {
    text: String,
}

impl ColorSegment {
    pub fn new(text: impl Into<String>) -> ColorSegment {
        ColorSegment { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the text styled by `spec` under the process wide configuration.
    ///
    /// # Errors
    ///
    /// See [`render_with`](ColorSegment::render_with).
    pub fn render(&self, spec: &str) -> PrintResult<String> {
        let config = read_shared(global_config());
        self.render_with(spec, &config)
    }

    /// Renders the text styled by `spec` under `config`.
    ///
    /// Tokens are validated and applied left to right. Rendering is all or
    /// nothing: the first invalid token aborts with no output.
    ///
    /// # Errors
    ///
    /// - [`PrintError::InvalidSpecToken`] for a token that is not a modifier
    ///   keyword, a color known to the scheme or the placeholder
    /// - [`PrintError::Color`] if a color fails to resolve while rendering
    #[instrument(level = "trace", skip_all, fields(spec = %spec))]
    pub fn render_with(&self, spec: &str, config: &SegmentConfig) -> PrintResult<String> {
        let scheme = read_shared(&*config.scheme);
        let parser = TokenParser::new(config, &*scheme);
        let mut injector = ColorInjector::new(&*scheme);

        for token in spec.split_whitespace() {
            if !parser.validate_token(token) {
                debug!(token, scheme = scheme.scheme_name(), "Rejected specification token");
                return Err(PrintError::InvalidSpecToken {
                    token: token.to_string(),
                });
            }
            parser.handle_token(token, &mut injector);
        }

        Ok(injector.apply(&self.text)?)
    }

    /// Snapshot of the process wide configuration.
    pub fn config() -> SegmentConfig {
        read_shared(global_config()).clone()
    }

    /// Replaces the process wide configuration.
    pub fn set_config(config: SegmentConfig) -> PrintResult<()> {
        Self::update_config(|current| *current = config)
    }

    /// Restores the process wide defaults: basic colors, `/`, `_` and the
    /// default keyword table.
    pub fn reset_config() {
        *write_shared(global_config()) = SegmentConfig::default();
        debug!("Segment configuration reset");
    }

    /// Makes `scheme` the process wide color scheme.
    pub fn set_color_scheme(scheme: SharedScheme) {
        let mut config = write_shared(global_config());
        config.scheme = scheme;
        debug!(
            scheme = read_shared(&*config.scheme).scheme_name(),
            "Color scheme changed"
        );
    }

    /// Makes one of the built in banks the process wide color scheme.
    pub fn set_color_scheme_kind(kind: ColorSchemeKind) {
        Self::set_color_scheme(kind.shared());
    }

    /// Selects a built in scheme by name (`basic`, `extended`, `true`, ...).
    ///
    /// # Errors
    ///
    /// [`PrintError::InvalidSchemeAssignment`] for an unknown name, the current
    /// scheme is kept.
    pub fn set_color_scheme_by_name(name: &str) -> PrintResult<()> {
        let kind: ColorSchemeKind = name.parse()?;
        Self::set_color_scheme_kind(kind);
        Ok(())
    }

    pub fn set_splitter(splitter: char) -> PrintResult<()> {
        Self::update_config(|config| config.splitter = splitter)
    }

    pub fn set_placeholder(placeholder: &str) -> PrintResult<()> {
        Self::update_config(|config| config.placeholder = placeholder.to_string())
    }

    pub fn set_modifier_keywords(keywords: HashMap<String, Modifier>) {
        write_shared(global_config()).modifier_keywords = keywords;
        debug!("Modifier keywords replaced");
    }

    pub fn add_modifier_keyword(keyword: &str, modifier: Modifier) {
        write_shared(global_config()).add_modifier_keyword(keyword, modifier);
        debug!(keyword, ?modifier, "Modifier keyword added");
    }

    /// Applies `update` to a copy of the process wide configuration and stores
    /// it only if it validates.
    fn update_config(update: impl FnOnce(&mut SegmentConfig)) -> PrintResult<()> {
        let mut config = write_shared(global_config());
        let mut candidate = config.clone();
        update(&mut candidate);
        candidate.validate()?;
        debug!(
            splitter = ?candidate.splitter,
            placeholder = %candidate.placeholder,
            "Segment configuration changed"
        );
        *config = candidate;
        Ok(())
    }
}

impl std::fmt::Display for ColorSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for ColorSegment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for ColorSegment {
    fn from(text: &str) -> Self {
        ColorSegment::new(text)
    }
}

impl From<String> for ColorSegment {
    fn from(text: String) -> Self {
        ColorSegment::new(text)
    }
}

/// Renders `text` styled by `spec` under the process wide configuration.
pub fn style(text: &str, spec: &str) -> PrintResult<String> {
    ColorSegment::new(text).render(spec)
}

/// Validates specification tokens and routes them into an injector.
pub(crate) struct TokenParser<'a> {
    config: &'a SegmentConfig,
    scheme: &'a dyn ColorScheme,
}

impl<'a> TokenParser<'a> {
    pub(crate) fn new(config: &'a SegmentConfig, scheme: &'a dyn ColorScheme) -> TokenParser<'a> {
        TokenParser { config, scheme }
    }

    /// Halves of a split token. Only a single splitter strictly inside the token
    /// makes it a split token.
    pub(crate) fn split_token<'t>(&self, token: &'t str) -> Option<(&'t str, &'t str)> {
        let splitter = self.config.splitter;
        if token.matches(splitter).count() != 1
            || token.starts_with(splitter)
            || token.ends_with(splitter)
        {
            return None;
        }
        token.split_once(splitter)
    }

    #[cfg(test)]
    pub(crate) fn is_split_token(&self, token: &str) -> bool {
        self.split_token(token).is_some()
    }

    pub(crate) fn validate_token(&self, token: &str) -> bool {
        match self.split_token(token) {
            Some((fg, bg)) => self.is_known_token(fg) && self.is_known_token(bg),
            None => self.is_known_token(token),
        }
    }

    fn is_known_token(&self, token: &str) -> bool {
        self.config.modifier_keywords.contains_key(token)
            || self.scheme.has_color(token)
            || token == self.config.placeholder
    }

    pub(crate) fn handle_token(&self, token: &str, injector: &mut ColorInjector<'_>) {
        match self.config.modifier_keywords.get(token) {
            Some(modifier) => Self::handle_modifier(*modifier, injector),
            None => self.handle_color_token(token, injector),
        }
    }

    pub(crate) fn handle_modifier(modifier: Modifier, injector: &mut ColorInjector<'_>) {
        match modifier {
            Modifier::Color(modifier) => injector.set_color_modifier(modifier),
            Modifier::Text(modifier) => injector.add_text_modifier(modifier),
        }
    }

    pub(crate) fn handle_color_token(&self, token: &str, injector: &mut ColorInjector<'_>) {
        let placeholder = self.config.placeholder.as_str();
        let (fg_color, bg_color) = self.split_token(token).unwrap_or((token, placeholder));

        if fg_color != placeholder {
            injector.set_fg_color(fg_color);
        }
        if bg_color != placeholder {
            injector.set_bg_color(bg_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorModifier, TextModifier};
    use std::collections::BTreeSet;
    use std::sync::{Arc, RwLock};
    use tintspec_colorbank::{BasicColor, ColorBank, RgbColor, TrueColor};
    use tracing_test::traced_test;

    fn true_color_config() -> SegmentConfig {
        SegmentConfig::new().with_scheme(Arc::new(RwLock::new(TrueColor::new())))
    }

    #[test]
    fn test_checking_for_split_token() {
        let config = true_color_config();
        let bank = TrueColor::new();
        let parser = TokenParser::new(&config, &bank);

        assert!(parser.is_split_token("value1/value2"));
        assert!(!parser.is_split_token("value/"));
        assert!(!parser.is_split_token("/value"));
        assert!(!parser.is_split_token("/"));
        assert!(!parser.is_split_token("value"));
        assert!(!parser.is_split_token("a/b/c"));
        assert_eq!(parser.split_token("#fff/_"), Some(("#fff", "_")));
    }

    #[test]
    fn test_validating_split_color_token() {
        let config = true_color_config();
        let bank = TrueColor::new();
        let parser = TokenParser::new(&config, &bank);

        let cases = [
            ("#fff/#000", true),
            ("_/#1a2b3c", true),
            ("#3c2b1a/_", true),
            ("invalid_color/invalid_color", false),
            ("_/invalid_color", false),
            ("invalid_color/_", false),
            ("_/_", true),
            ("/#fff", false),
            ("#fff/", false),
            ("/", false),
            ("#fff/#000/#111", false),
        ];
        for (token, expected) in cases {
            assert_eq!(parser.validate_token(token), expected, "token {token:?}");
        }
    }

    #[test]
    fn test_validating_color_and_modifier_tokens() {
        let config = true_color_config();
        let bank = TrueColor::new();
        let parser = TokenParser::new(&config, &bank);

        assert!(parser.validate_token("#fff"));
        assert!(parser.validate_token("_"));
        assert!(!parser.validate_token("invalid_color"));
        assert!(parser.validate_token("bold"));
        assert!(!parser.validate_token("unknown_modifier"));
    }

    #[test]
    fn test_edge_splitter_token_can_match_registered_name() {
        let config = true_color_config();
        let mut bank = TrueColor::empty();
        bank.add_color("odd/", RgbColor::from_u8(1, 2, 3)).unwrap();
        let parser = TokenParser::new(&config, &bank);
        let mut injector = ColorInjector::new(&bank);

        assert!(parser.validate_token("odd/"));
        parser.handle_token("odd/", &mut injector);
        assert_eq!(injector.fg_color(), Some("odd/"));
        assert_eq!(injector.bg_color(), None);
    }

    #[test]
    fn test_adding_multiple_color_modifiers() {
        let bank = TrueColor::new();
        let mut injector = ColorInjector::new(&bank);
        for modifier in [ColorModifier::Bold, ColorModifier::Reset, ColorModifier::Faint] {
            TokenParser::handle_modifier(modifier.into(), &mut injector);
        }
        assert_eq!(injector.color_modifier(), Some(ColorModifier::Faint));
    }

    #[test]
    fn test_adding_multiple_text_modifiers() {
        let bank = TrueColor::new();
        let mut injector = ColorInjector::new(&bank);
        let modifiers = [
            TextModifier::Italic,
            TextModifier::Strikethrough,
            TextModifier::ReverseVideo,
        ];
        for modifier in modifiers {
            TokenParser::handle_modifier(modifier.into(), &mut injector);
        }
        assert_eq!(
            injector.text_modifiers(),
            &modifiers.into_iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_adding_mix_split_and_single_colors() {
        let config = true_color_config();
        let bank = TrueColor::new();
        let parser = TokenParser::new(&config, &bank);
        let mut injector = ColorInjector::new(&bank);

        let tokens = [
            "#fff",
            "#abcdef",
            "#aaa/#bbb",
            "#420",
            "#ccc/#4d5e6f",
            "#dead69",
            "#1a2b3c",
        ];
        for token in tokens {
            parser.handle_color_token(token, &mut injector);
        }

        assert_eq!(injector.fg_color(), Some("#1a2b3c"));
        assert_eq!(injector.bg_color(), Some("#4d5e6f"));
    }

    #[test]
    fn test_placeholder_leaves_slot_untouched() {
        let config = true_color_config();
        let bank = TrueColor::new();
        let parser = TokenParser::new(&config, &bank);
        let mut injector = ColorInjector::new(&bank);

        parser.handle_color_token("_/#000", &mut injector);
        assert_eq!(injector.fg_color(), None);
        parser.handle_color_token("#fff/_", &mut injector);
        parser.handle_color_token("_", &mut injector);
        assert_eq!(injector.fg_color(), Some("#fff"));
        assert_eq!(injector.bg_color(), Some("#000"));
    }

    #[test]
    fn test_handling_tokens() {
        let config = true_color_config();
        let bank = TrueColor::new();
        let parser = TokenParser::new(&config, &bank);
        let mut injector = ColorInjector::new(&bank);

        for token in [
            "faint",
            "italic",
            "#111",
            "_/#fff",
            "bold",
            "#1a2b3c/#4d5e6f",
            "blink",
        ] {
            parser.handle_token(token, &mut injector);
        }

        assert_eq!(injector.color_modifier(), Some(ColorModifier::Bold));
        assert_eq!(
            injector.text_modifiers().iter().copied().collect::<Vec<_>>(),
            vec![TextModifier::Italic, TextModifier::Blink]
        );
        assert_eq!(injector.fg_color(), Some("#1a2b3c"));
        assert_eq!(injector.bg_color(), Some("#4d5e6f"));
    }

    #[test]
    fn test_render_with_basic_scheme() {
        let config = SegmentConfig::new().with_scheme(Arc::new(RwLock::new(BasicColor::new())));
        let segment = ColorSegment::new("x");
        assert_eq!(
            segment.render_with("red/blue italic", &config).unwrap(),
            "\x1b[31;44;3mx\x1b[0m"
        );
    }

    #[test]
    #[traced_test]
    fn test_render_rejects_unknown_token() {
        let config = SegmentConfig::new().with_scheme(Arc::new(RwLock::new(BasicColor::new())));
        let segment = ColorSegment::new("x");
        assert_eq!(
            segment.render_with("bold notacolor red", &config),
            Err(PrintError::InvalidSpecToken {
                token: "notacolor".to_string()
            })
        );
        assert!(logs_contain("Rejected specification token"));
    }

    #[test]
    fn test_custom_splitter_and_placeholder() {
        let config = true_color_config()
            .with_splitter(':')
            .with_placeholder("-");
        let segment = ColorSegment::new("x");

        assert_eq!(
            segment.render_with("-:#000", &config).unwrap(),
            "\x1b[48;2;0;0;0mx\x1b[0m"
        );
        // The default splitter is now an ordinary character
        assert!(segment.render_with("#fff/#000", &config).is_err());
    }

    #[test]
    fn test_display_is_plain_text() {
        let segment = ColorSegment::from("plain");
        assert_eq!(segment.to_string(), "plain");
        assert_eq!(segment.as_ref(), "plain");
    }
}

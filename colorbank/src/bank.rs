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

//! Named color registries.
//!
//! A color bank maps user facing names to values of one color scheme and
//! renders them as SGR parameter fragments. Two traits split the capability:
//!
//! - [`ColorScheme`] is the object safe, read only half used at render time.
//! - [`ColorBank`] adds typed registration and lookup on top of it.

use crate::{ColorError, ColorResult};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

/// A bank shared between configuration and rendering.
pub type SharedBank<B> = Arc<RwLock<B>>;

/// A type erased, shared color scheme.
pub type SharedScheme = Arc<RwLock<dyn ColorScheme + Send + Sync>>;

/// Render time view of a color bank.
pub trait ColorScheme: std::fmt::Debug {
    /// Short scheme identifier used in logs and errors.
    fn scheme_name(&self) -> &'static str;

    /// Returns `true` if `name` resolves in this scheme without relying on the
    /// default color.
    fn has_color(&self, name: &str) -> bool;

    /// SGR foreground fragment for `name`, without the `ESC[` / `m` framing.
    fn fg_color_code(&self, name: &str) -> ColorResult<String>;

    /// SGR background fragment for `name`, without the `ESC[` / `m` framing.
    fn bg_color_code(&self, name: &str) -> ColorResult<String>;
}

/// Typed registry half of a color bank.
pub trait ColorBank: ColorScheme {
    /// Scheme specific color value.
    type Value: Clone + PartialEq + std::fmt::Debug;

    /// Binds `name` to `value`, replacing any previous binding.
    fn add_color(&mut self, name: &str, value: Self::Value) -> ColorResult<()>;

    /// Resolves `name`, falling back to the default color.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownColor`] when `name` is unbound and no default is set.
    fn get_color(&self, name: &str) -> ColorResult<Self::Value>;

    /// The fallback used for unbound names, if any.
    fn default_color(&self) -> Option<&Self::Value>;

    /// Replaces the fallback color.
    fn set_default_color(&mut self, value: Self::Value) -> ColorResult<()>;

    /// Removes the fallback color, unbound names become errors.
    fn clear_default_color(&mut self);

    /// Replaces the fallback color with the value `name` resolves to.
    ///
    /// Resolution goes through [`get_color`](ColorBank::get_color), so an unbound
    /// name keeps the current default rather than failing when one exists.
    fn set_default_color_from_bank(&mut self, name: &str) -> ColorResult<()> {
        let value = self.get_color(name)?;
        self.set_default_color(value)
    }
}

/// Name to value storage with an optional fallback, shared by every bank.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedColors<V> {
    colors: HashMap<String, V>,
    default: Option<V>,
}

impl<V: Clone + std::fmt::Debug> NamedColors<V> {
    /// Empty storage with no fallback.
    pub fn new() -> NamedColors<V> {
        NamedColors {
            colors: HashMap::new(),
            default: None,
        }
    }

    /// Empty storage with a fallback.
    pub fn with_default(default: V) -> NamedColors<V> {
        NamedColors {
            colors: HashMap::new(),
            default: Some(default),
        }
    }

    /// Storage preloaded from `table`. Later entries overwrite earlier ones.
    pub fn from_table<'a, I>(table: I, default: Option<V>) -> NamedColors<V>
    where
        I: IntoIterator<Item = (&'a str, V)>,
    {
        NamedColors {
            colors: table
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            default,
        }
    }

    pub fn insert(&mut self, name: &str, value: V) {
        self.colors.insert(name.to_string(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.colors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    pub fn set_default(&mut self, value: Option<V>) {
        debug!(default = ?value, "Color bank default changed");
        self.default = value;
    }

    /// Bound value, else the fallback.
    pub fn resolve(&self, name: &str) -> ColorResult<V> {
        if let Some(value) = self.colors.get(name) {
            return Ok(value.clone());
        }
        match &self.default {
            Some(value) => {
                trace!(name, default = ?value, "Unknown color, using default");
                Ok(value.clone())
            }
            None => Err(ColorError::UnknownColor {
                name: name.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Bound names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<V: Clone + std::fmt::Debug> Default for NamedColors<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to a shared bank.
///
/// Bank state is valid after any panic, so a poisoned lock is recovered.
pub fn read_shared<T: ?Sized>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access to a shared bank, recovering a poisoned lock.
pub fn write_shared<T: ?Sized>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn sample() -> NamedColors<i32> {
        NamedColors::from_table([("black", 0), ("red", 1)], None)
    }

    #[test]
    fn test_insert_overwrites() {
        let mut colors = sample();
        colors.insert("red", 9);
        assert_eq!(colors.lookup("red"), Some(&9));
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_resolve_without_default() {
        let colors = sample();
        assert_eq!(colors.resolve("black"), Ok(0));
        assert_eq!(
            colors.resolve("mauve"),
            Err(ColorError::UnknownColor {
                name: "mauve".to_string()
            })
        );
    }

    #[test]
    #[traced_test]
    fn test_resolve_with_default_logs_fallback() {
        let mut colors = sample();
        colors.set_default(Some(0));
        assert_eq!(colors.resolve("mauve"), Ok(0));
        assert!(logs_contain("Unknown color, using default"));
    }

    #[test]
    fn test_falsy_default_is_still_a_default() {
        let mut colors: NamedColors<i32> = NamedColors::new();
        colors.set_default(Some(0));
        assert_eq!(colors.resolve("anything"), Ok(0));
    }

    #[test]
    fn test_names_sorted() {
        let colors = NamedColors::from_table([("red", 1), ("black", 0), ("blue", 4)], None);
        assert_eq!(colors.names(), vec!["black", "blue", "red"]);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let lock = Arc::new(RwLock::new(sample()));
        let poisoner = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(lock.is_poisoned());
        assert_eq!(read_shared(&lock).resolve("red"), Ok(1));
        write_shared(&lock).insert("green", 2);
        assert!(read_shared(&lock).contains("green"));
    }
}

//! Named style and theme tables.
//!
//! [`Registry`] holds three maps:
//!
//! - styles: name to [`Style`]
//! - themes: name to [`Theme`]
//! - aliases: short name to canonical style name
//!
//! Names are case-sensitive and later registrations replace earlier ones.
//! Aliases are consulted by [`Registry::get_style`] only; theme lookup is
//! exact.
//!
//! # Lookup asymmetry
//!
//! An unknown style name yields an empty style, which renders text
//! unchanged. An unknown theme name yields `None`; callers that want a
//! fallback must supply it themselves:
//!
//! ```rust
//! use ansitheme::Registry;
//!
//! let registry = Registry::new();
//! assert!(registry.get_style("nope").is_empty());
//! assert!(registry.get_theme("nope").is_none());
//! ```
//!
//! # Process-wide registry
//!
//! The free functions ([`add_style`], [`get_style`], [`add_theme`],
//! [`get_theme`], ...) operate on one shared instance that starts out with
//! the built-ins. [`Style::save`] and [`Theme::save`] write to it as well.
//! Access is guarded by a read-write lock, so it is memory safe from any
//! thread, but when several threads register the same name the last writer
//! wins; serializing such writers is up to the caller.
//!
//! Neither [`with_registry`] nor [`with_registry_mut`] is reentrant. Their
//! closures must not call the process-wide mutators or `save`, or the
//! calling thread blocks forever waiting on its own lock.
//!
//! A style and a theme registered separately under the same name are not
//! kept in sync: `get_style(name)` and `get_theme(name).style()` may differ.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::style::{Style, StylesheetError};
use crate::stylesheet::Stylesheet;
use crate::theme::{builtin_themes, Theme, BUILTIN_ALIASES};

/// Named styles, themes and style aliases.
#[derive(Debug, Clone)]
pub struct Registry {
    styles: HashMap<String, Style>,
    themes: HashMap<String, Theme>,
    aliases: HashMap<String, String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry seeded with the built-in themes, their styles and
    /// the `err`, `suc` and `warn` aliases.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for theme in builtin_themes() {
            registry.add_theme(theme.name(), theme.style().clone());
        }
        for (alias, target) in BUILTIN_ALIASES {
            registry.add_alias(alias, target);
        }
        registry
    }

    /// Creates a registry with nothing in it.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
            themes: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Inserts or replaces a style.
    pub fn add_style(&mut self, name: &str, style: Style) {
        self.styles.insert(name.to_string(), style);
    }

    /// Looks up a style by exact name, then through the alias table.
    ///
    /// Never fails: unknown names yield an empty style.
    pub fn get_style(&self, name: &str) -> Style {
        if let Some(style) = self.styles.get(name) {
            return style.clone();
        }
        self.resolve_alias(name)
            .and_then(|target| self.styles.get(target))
            .cloned()
            .unwrap_or_default()
    }

    /// Inserts or replaces a theme named `name`, and the style of the same name.
    pub fn add_theme(&mut self, name: &str, style: Style) {
        self.themes
            .insert(name.to_string(), Theme::new(name, style.clone()));
        self.styles.insert(name.to_string(), style);
    }

    /// Looks up a theme by exact name. Aliases are not consulted.
    pub fn get_theme(&self, name: &str) -> Option<Theme> {
        self.themes.get(name).cloned()
    }

    /// Makes `alias` resolve to the style named `target`.
    ///
    /// The target need not exist yet; it is looked up on every
    /// [`Registry::get_style`] call.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    /// Returns the canonical name an alias points at.
    pub fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// True if `name` is a registered style (aliases excluded).
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// True if `name` is a registered theme.
    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Returns the registered style names, sorted.
    pub fn style_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the registered theme names, sorted.
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parses a YAML (or JSON) stylesheet and registers everything in it.
    ///
    /// On error the registry is left untouched.
    ///
    /// ```rust
    /// use ansitheme::Registry;
    ///
    /// let mut registry = Registry::empty();
    /// registry
    ///     .load_yaml("deploy: [bold, blue]\nalias:\n  dep: deploy\n")
    ///     .unwrap();
    /// assert_eq!(registry.get_style("dep").code(), "1;34");
    /// assert_eq!(registry.get_theme("deploy").unwrap().title(), "DEPLOY");
    /// ```
    pub fn load_yaml(&mut self, source: &str) -> Result<(), StylesheetError> {
        let sheet = Stylesheet::from_yaml(source)?;
        sheet.apply(self);
        Ok(())
    }
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

/// Runs `f` with shared access to the process-wide registry.
///
/// `f` must not call [`add_style`], [`add_theme`], [`add_alias`],
/// [`reset_registry`], nor `save` on a style or theme: the read lock is
/// still held and the write would wait on it forever. Collect what you need
/// inside `f` and register it afterwards.
pub fn with_registry<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let guard = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Runs `f` with exclusive access to the process-wide registry.
///
/// `f` must not call the other process-wide registry functions, nor
/// `save` on a style or theme: the lock is not reentrant.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    let mut guard = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Restores the process-wide registry to the built-ins.
pub fn reset_registry() {
    with_registry_mut(|registry| *registry = Registry::new());
}

/// [`Registry::add_style`] on the process-wide registry.
pub fn add_style(name: &str, style: Style) {
    with_registry_mut(|registry| registry.add_style(name, style));
}

/// [`Registry::get_style`] on the process-wide registry.
pub fn get_style(name: &str) -> Style {
    with_registry(|registry| registry.get_style(name))
}

/// [`Registry::add_theme`] on the process-wide registry.
pub fn add_theme(name: &str, style: Style) {
    with_registry_mut(|registry| registry.add_theme(name, style));
}

/// [`Registry::get_theme`] on the process-wide registry.
pub fn get_theme(name: &str) -> Option<Theme> {
    with_registry(|registry| registry.get_theme(name))
}

/// [`Registry::add_alias`] on the process-wide registry.
pub fn add_alias(alias: &str, target: &str) {
    with_registry_mut(|registry| registry.add_alias(alias, target));
}

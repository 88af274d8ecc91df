//! Declarative style definitions.
//!
//! A stylesheet is a YAML mapping from theme name to definition. JSON works
//! too, being a subset of YAML. Two definition shapes are accepted:
//!
//! ```yaml
//! # a list of color names or codes, emitted in order
//! deploy: [bold, blue]
//! raw: [1, 34]
//!
//! # grouped fields; options come first, then fg, then bg
//! alert:
//!   fg: light_white
//!   bg: red
//!   options: [bold, underscore]
//!
//! # reserved key: style aliases
//! alias:
//!   dep: deploy
//! ```
//!
//! Every entry is registered with [`Registry::add_theme`] semantics, so it is
//! available both as a theme and as a style.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::color::{Color, ColorKind};
use crate::registry::Registry;
use crate::style::{Style, StylesheetError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorRef {
    Code(u8),
    Name(String),
}

impl ColorRef {
    fn label(&self) -> String {
        match self {
            ColorRef::Code(code) => code.to_string(),
            ColorRef::Name(name) => name.clone(),
        }
    }

    fn resolve(&self, style: &str) -> Result<Color, StylesheetError> {
        match self {
            ColorRef::Code(code) => Ok(Color(*code)),
            ColorRef::Name(name) => {
                Color::from_name(name).ok_or_else(|| StylesheetError::UnknownColor {
                    style: style.to_string(),
                    color: name.clone(),
                })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StyleDef {
    Codes(Vec<ColorRef>),
    Parts(StyleParts),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleParts {
    #[serde(default)]
    fg: Option<ColorRef>,
    #[serde(default)]
    bg: Option<ColorRef>,
    #[serde(default)]
    options: Vec<ColorRef>,
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    #[serde(default)]
    alias: BTreeMap<String, String>,
    #[serde(flatten)]
    styles: BTreeMap<String, StyleDef>,
}

/// A parsed set of named styles and aliases, ready to register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    styles: Vec<(String, Style)>,
    aliases: Vec<(String, String)>,
}

impl Stylesheet {
    /// Parses a YAML or JSON stylesheet.
    ///
    /// Entries come back sorted by name. A blank document is an empty sheet.
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSheet = serde_yaml::from_str(source)?;

        let mut styles = Vec::with_capacity(raw.styles.len());
        for (name, def) in raw.styles {
            let style = build_style(&name, def)?;
            styles.push((name, style));
        }

        Ok(Self {
            styles,
            aliases: raw.alias.into_iter().collect(),
        })
    }

    /// Returns the named styles, sorted by name.
    pub fn styles(&self) -> &[(String, Style)] {
        &self.styles
    }

    /// Returns the `(alias, target)` pairs, sorted by alias.
    pub fn aliases(&self) -> &[(String, String)] {
        &self.aliases
    }

    /// Registers every style as a theme and every alias in `registry`.
    pub fn apply(&self, registry: &mut Registry) {
        for (name, style) in &self.styles {
            registry.add_theme(name, style.clone());
        }
        for (alias, target) in &self.aliases {
            registry.add_alias(alias, target);
        }
    }
}

fn build_style(name: &str, def: StyleDef) -> Result<Style, StylesheetError> {
    match def {
        StyleDef::Codes(refs) => refs.iter().map(|r| r.resolve(name)).collect(),
        StyleDef::Parts(parts) => {
            let mut codes = Vec::new();
            for option in &parts.options {
                codes.push(checked(name, "options", option, ColorKind::Option)?);
            }
            if let Some(fg) = &parts.fg {
                codes.push(checked(name, "fg", fg, ColorKind::Foreground)?);
            }
            if let Some(bg) = &parts.bg {
                codes.push(checked_bg(name, bg)?);
            }
            Ok(Style::from(codes))
        }
    }
}

/// Resolves `color` and makes sure it belongs to `expected`.
fn checked(
    style: &str,
    field: &str,
    color: &ColorRef,
    expected: ColorKind,
) -> Result<Color, StylesheetError> {
    let resolved = color.resolve(style)?;
    if resolved.kind() == expected {
        Ok(resolved)
    } else {
        Err(StylesheetError::WrongGroup {
            style: style.to_string(),
            field: field.to_string(),
            color: color.label(),
        })
    }
}

/// Background fields also accept foreground names (`bg: red`), shifted into
/// the background range.
fn checked_bg(style: &str, color: &ColorRef) -> Result<Color, StylesheetError> {
    let resolved = color.resolve(style)?;
    match resolved.kind() {
        ColorKind::Background => Ok(resolved),
        ColorKind::Foreground => Ok(Color(resolved.code() + 10)),
        _ => Err(StylesheetError::WrongGroup {
            style: style.to_string(),
            field: "bg".to_string(),
            color: color.label(),
        }),
    }
}

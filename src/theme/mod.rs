//! Themes: named styles with title-prefixed output.
//!
//! This module provides:
//!
//! - [`Theme`]: a name plus a [`Style`](crate::Style), with `tips`, `prompt`
//!   and `block` helpers that print the uppercased name as a label
//! - the built-in themes ([`INFO`], [`WARN`], [`ERROR`], ...) that seed the
//!   registry and back the quick-access functions

mod builtin;
#[allow(clippy::module_inception)]
mod theme;

pub(crate) use builtin::{builtin_themes, BUILTIN_ALIASES};
pub use builtin::{
    COMMENT, DANGER, DEBUG, ERROR, INFO, LIGHT, NOTE, NOTICE, PRIMARY, QUESTION, SECONDARY,
    SUCCESS, WARN,
};
pub use theme::Theme;

//! Styles: ordered bundles of codes.
//!
//! - [`Style`]: a reusable combination such as bold + red
//! - [`StylesheetError`]: errors raised while loading styles from configuration
//!
//! A style renders text by wrapping it in the SGR sequence made from its
//! codes. An empty style renders text unchanged.

mod error;
#[allow(clippy::module_inception)]
mod style;

pub use error::StylesheetError;
pub use style::Style;

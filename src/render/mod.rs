//! Escape-sequence rendering.
//!
//! This module turns codes into ANSI SGR sequences and wraps text with them:
//!
//! - [`codes_to_sequence`]: `[1, 31, 45]` becomes `"1;31;45"`
//! - [`render_code`]: print-style join, then wrap
//! - [`render_with_spaces`]: println-style join, then wrap
//! - [`render_string`]: wrap already formatted text
//!
//! Argument joining is kept separate from wrapping so the same wrapper serves
//! every print variant. See [`join_print`] and [`join_println`].

mod args;
mod code;

pub use args::{join_print, join_println};
pub use code::{
    clear_code, codes_to_sequence, ensure_newline, render_code, render_string,
    render_with_spaces, RESET_SEQUENCE,
};

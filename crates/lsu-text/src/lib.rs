#![forbid(unsafe_code)]

//! Text helpers for ls-utils.
//!
//! # Role in ls-utils
//! `lsu-text` holds the pure string transforms. `lsu-bind` uses
//! [`escape_html`] when an observable value is rendered into a markup
//! target; the line helpers are standalone utilities for tidying up indented
//! snippets.
//!
//! Everything here is stateless, allocation-light and panic-free.

pub mod escape;
pub mod lines;

pub use escape::escape_html;
pub use lines::{
    Linebreak, determine_linebreaks, remove_leading_linebreaks, remove_surrounding_whitespace,
    remove_trailing_linebreaks, shift_lines_left, split_lines, trim_lines,
};

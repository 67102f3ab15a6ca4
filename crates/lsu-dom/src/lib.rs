#![forbid(unsafe_code)]

//! Browser-side DOM helpers.
//!
//! # Role in ls-utils
//! `lsu-dom` is the browser layer: it parses HTML strings into DOM nodes,
//! copies attributes and children between elements, and lets an
//! `lsu_bind::ObservableValue` render into a DOM element through
//! [`ElementTarget`].
//!
//! Only [`DomError`] exists outside `wasm32`; everything else needs a
//! browser.

pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod copy;
#[cfg(target_arch = "wasm32")]
pub mod parse;
#[cfg(target_arch = "wasm32")]
pub mod target;

pub use error::DomError;

#[cfg(target_arch = "wasm32")]
pub use copy::{copy_attributes, copy_child_nodes, move_child_nodes};
#[cfg(target_arch = "wasm32")]
pub use parse::{parse_html, parse_html_elements, window_document};
#[cfg(target_arch = "wasm32")]
pub use target::ElementTarget;

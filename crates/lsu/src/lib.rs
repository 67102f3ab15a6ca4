#![forbid(unsafe_code)]

//! ls-utils: small helpers for browser-side Rust.
//!
//! - [`bind`]: observable values with validators and one-way bindings.
//! - [`text`]: HTML escaping and line/indentation trimming.
//! - `dom` (feature `web`): HTML fragment parsing, attribute and child
//!   copying, DOM element render targets.
//!
//! Most code only needs the [`prelude`].

pub use lsu_bind as bind;
#[cfg(feature = "web")]
pub use lsu_dom as dom;
pub use lsu_text as text;

pub use lsu_bind::{ObservableValue, RenderTarget, WriteOutcome};
pub use lsu_text::escape_html;

pub mod prelude {
    //! Common imports.

    pub use lsu_bind::{
        Callback, ObservableValue, RenderTarget, Validator, WeakObservableValue, WriteOutcome,
        callback, validator,
    };
    pub use lsu_text::{escape_html, remove_surrounding_whitespace};

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    pub use lsu_dom::{ElementTarget, parse_html};
}

#![forbid(unsafe_code)]

//! DOM elements as render targets.

use lsu_bind::RenderTarget;
use web_sys::Element;

/// A [`RenderTarget`] that writes into an element's `innerHTML`.
///
/// Bind it with escaping enabled (the default of `bind_target`) unless the
/// value is trusted markup.
#[derive(Debug, Clone)]
pub struct ElementTarget {
    element: Element,
}

impl ElementTarget {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl From<Element> for ElementTarget {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl RenderTarget for ElementTarget {
    fn set_content(&self, content: &str) {
        self.element.set_inner_html(content);
    }
}

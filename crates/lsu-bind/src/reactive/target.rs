#![forbid(unsafe_code)]

//! Render targets: surfaces that display a value as a string.

use std::cell::RefCell;
use std::rc::Rc;

/// A surface whose displayed content can be replaced with a string.
///
/// Targets are shared through `Rc` and updated through `&self`, so
/// implementations use interior mutability (a DOM element already does).
pub trait RenderTarget {
    /// Replace the displayed content with `content`.
    fn set_content(&self, content: &str);
}

/// Conversion of a shared target handle into the type-erased form stored by a
/// binding.
///
/// Implemented for every sized [`RenderTarget`] and for `dyn RenderTarget`
/// itself, so both `Rc<MyTarget>` and `Rc<dyn RenderTarget>` can be bound.
pub trait IntoRenderTarget {
    /// Erase the concrete target type.
    fn into_render_target(self: Rc<Self>) -> Rc<dyn RenderTarget>;
}

impl<T: RenderTarget + 'static> IntoRenderTarget for T {
    fn into_render_target(self: Rc<Self>) -> Rc<dyn RenderTarget> {
        self
    }
}

impl IntoRenderTarget for dyn RenderTarget {
    fn into_render_target(self: Rc<Self>) -> Rc<dyn RenderTarget> {
        self
    }
}

/// Headless target: the content is kept in a string.
impl RenderTarget for RefCell<String> {
    fn set_content(&self, content: &str) {
        let mut buf = self.borrow_mut();
        buf.clear();
        buf.push_str(content);
    }
}

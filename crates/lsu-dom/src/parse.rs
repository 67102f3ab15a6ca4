#![forbid(unsafe_code)]

//! HTML fragment parsing.
//!
//! A fragment is parsed by assigning it to the `innerHTML` of a temporary
//! `<div>` and detaching the resulting top-level nodes. Text between elements
//! is kept as text nodes, and nested elements stay inside their parents.
//!
//! # Sandboxing
//!
//! With `sandbox == false` the temporary element belongs to the window's
//! document. That is fine for trusted markup. Untrusted markup should be
//! parsed with `sandbox == true`: the fragment is then parsed inside a fresh
//! HTML document that has no browsing context, so inline scripts and event-handler
//! attributes such as `<img onerror=..>` never run during parsing. Nodes from
//! the sandbox can be adopted into the page later with `Document::adopt_node`
//! or appended directly (the DOM adopts them implicitly).

use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::error::DomError;

/// The document of the global window.
pub fn window_document() -> Result<Document, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window.document().ok_or(DomError::NoDocument)
}

/// A fresh HTML document without a browsing context.
///
/// Markup parsed into it is inert: scripts do not run and resources are not
/// fetched. It has to be an HTML document (not a bare `new Document()`), or
/// `innerHTML` would switch to strict XML parsing.
fn sandbox_document() -> Result<Document, DomError> {
    Document::new()?
        .implementation()?
        .create_html_document()
        .map_err(DomError::from)
}

/// Parse `html` into its top-level DOM nodes, in document order.
///
/// The returned nodes have no parent.
pub fn parse_html(html: &str, sandbox: bool) -> Result<Vec<Node>, DomError> {
    let document = if sandbox {
        sandbox_document()?
    } else {
        window_document()?
    };

    let container = document.create_element("div")?;
    container.set_inner_html(html);

    let mut nodes = Vec::with_capacity(container.child_element_count() as usize);
    while let Some(child) = container.first_child() {
        container.remove_child(&child)?;
        nodes.push(child);
    }

    trace!(nodes = nodes.len(), sandbox, "parsed html fragment");
    Ok(nodes)
}

/// Parse `html` and keep only the top-level elements (text and comments are
/// dropped).
pub fn parse_html_elements(html: &str, sandbox: bool) -> Result<Vec<Element>, DomError> {
    Ok(parse_html(html, sandbox)?
        .into_iter()
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

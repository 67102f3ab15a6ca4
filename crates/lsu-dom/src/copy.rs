#![forbid(unsafe_code)]

//! Copying attributes and children between DOM nodes.

use web_sys::{Element, Node};

use crate::error::DomError;

/// Set every attribute of `from` on `to`.
///
/// Attributes already present on `to` are overwritten; attributes only on
/// `to` are kept. Namespaced attributes keep their namespace.
pub fn copy_attributes(from: &Element, to: &Element) -> Result<(), DomError> {
    let attributes = from.attributes();

    for index in 0..attributes.length() {
        let Some(attr) = attributes.item(index) else {
            continue;
        };
        match attr.namespace_uri() {
            Some(ns) => to.set_attribute_ns(Some(&ns), &attr.name(), &attr.value())?,
            None => to.set_attribute(&attr.name(), &attr.value())?,
        }
    }

    Ok(())
}

/// Append deep clones of all children of `from` to `to`, in order.
///
/// `from` is left untouched.
pub fn copy_child_nodes(from: &Node, to: &Node) -> Result<(), DomError> {
    let children = from.child_nodes();
    // `childNodes` is live; fix the length before appending.
    let count = children.length();

    for index in 0..count {
        let Some(child) = children.item(index) else {
            continue;
        };
        let clone = child.clone_node_with_deep(true)?;
        to.append_child(&clone)?;
    }

    Ok(())
}

/// Move all children of `from` to the end of `to`, in order.
///
/// Moving a node's children onto itself is a no-op.
pub fn move_child_nodes(from: &Node, to: &Node) -> Result<(), DomError> {
    if from.is_same_node(Some(to)) {
        return Ok(());
    }

    while let Some(child) = from.first_child() {
        to.append_child(&child)?;
    }

    Ok(())
}

#![forbid(unsafe_code)]

//! Observer and validator handles.
//!
//! Callbacks, validators and targets are registered as `Rc` handles. The
//! observable keeps its own clone; the caller keeps another to unbind later.
//! Two handles refer to the same registration iff they point to the same
//! allocation.

use std::fmt;
use std::rc::Rc;

use super::target::RenderTarget;

/// Observer callback, invoked as `callback(new_value, old_value)`.
pub type Callback<V> = Rc<dyn Fn(&V, &V)>;

/// Validator predicate, invoked as `validator(new_value, old_value)`.
/// Returning `false` rejects the write.
pub type Validator<V> = Rc<dyn Fn(&V, &V) -> bool>;

/// Wrap a closure as a [`Callback`] handle.
pub fn callback<V>(f: impl Fn(&V, &V) + 'static) -> Callback<V> {
    Rc::new(f)
}

/// Wrap a closure as a [`Validator`] handle.
pub fn validator<V>(f: impl Fn(&V, &V) -> bool + 'static) -> Validator<V> {
    Rc::new(f)
}

/// Address identity, ignoring vtable metadata.
#[inline]
pub(crate) fn same_rc<A: ?Sized, B: ?Sized>(a: &Rc<A>, b: &Rc<B>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Convert a value to the string shown by a render target.
pub(crate) fn render_display<V: fmt::Display>(value: &V) -> String {
    value.to_string()
}

/// A registered observer.
pub(crate) enum Binding<V> {
    Function(Callback<V>),
    Target {
        target: Rc<dyn RenderTarget>,
        escape_html: bool,
        render: fn(&V) -> String,
    },
}

// Manual Clone: only the handles are cloned, `V` need not be `Clone`.
impl<V> Clone for Binding<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Function(cb) => Self::Function(Rc::clone(cb)),
            Self::Target {
                target,
                escape_html,
                render,
            } => Self::Target {
                target: Rc::clone(target),
                escape_html: *escape_html,
                render: *render,
            },
        }
    }
}

impl<V> Binding<V> {
    pub(crate) fn is_function(&self, handle: &Callback<V>) -> bool {
        matches!(self, Self::Function(cb) if same_rc(cb, handle))
    }

    pub(crate) fn is_target<T: ?Sized>(&self, handle: &Rc<T>) -> bool {
        matches!(self, Self::Target { target, .. } if same_rc(target, handle))
    }

    /// Deliver one notification.
    pub(crate) fn notify(&self, new: &V, old: &V) {
        match self {
            Self::Function(cb) => cb(new, old),
            Self::Target {
                target,
                escape_html,
                render,
            } => {
                let text = render(new);
                if *escape_html {
                    target.set_content(&lsu_text::escape_html(&text));
                } else {
                    target.set_content(&text);
                }
            }
        }
    }
}

impl<V> fmt::Debug for Binding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(cb) => f
                .debug_tuple("Function")
                .field(&Rc::as_ptr(cb).cast::<()>())
                .finish(),
            Self::Target {
                target,
                escape_html,
                ..
            } => f
                .debug_struct("Target")
                .field("target", &Rc::as_ptr(target).cast::<()>())
                .field("escape_html", escape_html)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn same_rc_distinguishes_allocations() {
        let a = callback(|_: &i32, _: &i32| {});
        let b = callback(|_: &i32, _: &i32| {});
        let a2 = Rc::clone(&a);
        assert!(same_rc(&a, &a2));
        assert!(!same_rc(&a, &b));
    }

    #[test]
    fn same_rc_across_unsizing() {
        let concrete = Rc::new(RefCell::new(String::new()));
        let erased: Rc<dyn RenderTarget> = concrete.clone();
        assert!(same_rc(&erased, &concrete));
    }

    #[test]
    fn target_binding_escapes_when_asked() {
        let target = Rc::new(RefCell::new(String::new()));
        let escaped: Binding<String> = Binding::Target {
            target: target.clone(),
            escape_html: true,
            render: render_display::<String>,
        };
        escaped.notify(&"<b>".to_string(), &String::new());
        assert_eq!(*target.borrow(), "&lt;b&gt;");

        let raw: Binding<String> = Binding::Target {
            target: target.clone(),
            escape_html: false,
            render: render_display::<String>,
        };
        raw.notify(&"<b>".to_string(), &String::new());
        assert_eq!(*target.borrow(), "<b>");
    }

    #[test]
    fn kind_checks_respect_variant() {
        let cb = callback(|_: &u8, _: &u8| {});
        let binding = Binding::Function(cb.clone());
        assert!(binding.is_function(&cb));
        assert!(!binding.is_target(&cb));
    }
}

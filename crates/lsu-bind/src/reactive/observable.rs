#![forbid(unsafe_code)]

//! Observable value with validators and one-way bindings.
//!
//! # Design
//!
//! [`ObservableValue<V>`] wraps a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). A write first runs the registered validators; if all
//! accept, the value is committed and every binding is notified in
//! registration order with `(new, old)`.
//!
//! Bindings are a closed set: plain callbacks and
//! [`RenderTarget`](super::RenderTarget)s that receive the value's string
//! form, HTML-escaped by default.
//!
//! # Performance
//!
//! | Operation     | Complexity                          |
//! |---------------|-------------------------------------|
//! | `read()`      | O(1) + clone of `V`                 |
//! | `write()`     | O(W + B) where W = validators, B = bindings |
//! | `bind_*()`    | O(1) amortized                      |
//! | `unbind_*()`  | O(B)                                |
//!
//! # Re-entrancy
//!
//! No `RefCell` borrow is held while user code runs. Validators and observers
//! may read, write, bind and unbind on the same observable. A nested write
//! runs its whole validate-then-notify cycle before the outer pass moves on.
//!
//! The `old` passed to observers is the value the commit actually replaced.
//! When a validator commits a nested write, the outer write still commits
//! afterwards and its observers see the nested value as `old`.
//!
//! Each pipeline iterates a snapshot taken when it starts: a binding removed
//! mid-pass still receives that pass, a binding added mid-pass does not.
//!
//! # Failure Modes
//!
//! - **Rejected write**: a validator returned `false`. The value stays as it
//!   was, nobody is notified, and [`WriteOutcome::Rejected`] names the
//!   validator. Not an error.
//! - **Unknown removal**: unbinding or removing something that was never
//!   registered does nothing.
//! - **Panicking observer**: the panic unwinds out of `write`/`refresh`. The
//!   value is already committed, the observers after the failing one miss
//!   that pass, and the observable remains fully usable.
//! - **Reference cycles**: an observer that captures a strong handle to its
//!   own observable keeps both alive forever. Capture a
//!   [`WeakObservableValue`] instead.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use super::binding::{Binding, Callback, Validator, callback, render_display, same_rc};
use super::target::IntoRenderTarget;

/// Result of [`ObservableValue::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOutcome {
    /// The value was committed and observers were notified.
    Committed,
    /// Validator number `validator` (registration order, zero-based) rejected
    /// the value. Nothing changed.
    Rejected { validator: usize },
}

impl WriteOutcome {
    /// Whether the write took effect.
    #[must_use]
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }
}

struct ObservableInner<V> {
    value: V,
    /// Number of committed writes.
    version: u64,
    validators: Vec<Validator<V>>,
    bindings: Vec<Binding<V>>,
}

/// A shared value cell with validators and one-way bindings.
///
/// Cloning an `ObservableValue` creates a new handle to the **same** inner
/// state: all handles see the same value, validators and bindings.
///
/// # Invariants
///
/// 1. The value only changes through a write whose validators all accepted.
/// 2. Validators run in registration order and stop at the first rejection.
/// 3. Observers are notified in registration order, each exactly once per
///    pass and once per registration (duplicates are not merged).
/// 4. `version` increments by exactly 1 per committed write.
pub struct ObservableValue<V> {
    inner: Rc<RefCell<ObservableInner<V>>>,
}

impl<V> Clone for ObservableValue<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ObservableValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableValue")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("validator_count", &inner.validators.len())
            .field("bindings", &inner.bindings)
            .finish()
    }
}

impl<V: Clone + 'static> ObservableValue<V> {
    /// Create an observable holding `value`, with no validators and no
    /// bindings. Validators never see the initial value.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                validators: Vec::new(),
                bindings: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn read(&self) -> V {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    ///
    /// # Panics
    ///
    /// Panics if `f` writes to this observable.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Propose a new value.
    ///
    /// Runs the validators with `(new, current)`. If any rejects, nothing
    /// changes and no observer runs. Otherwise the value is committed and all
    /// observers are notified with `(new, replaced)`, where `replaced` is the
    /// value held at commit time.
    pub fn write(&self, value: V) -> WriteOutcome {
        let (current, validators) = {
            let inner = self.inner.borrow();
            (inner.value.clone(), inner.validators.clone())
        };

        if let Some(index) = validators.iter().position(|accept| !accept(&value, &current)) {
            trace!(validator = index, "write rejected");
            return WriteOutcome::Rejected { validator: index };
        }

        // A validator may have committed a nested write in the meantime.
        let old = {
            let mut inner = self.inner.borrow_mut();
            inner.version += 1;
            std::mem::replace(&mut inner.value, value.clone())
        };
        self.dispatch(&value, &old);

        WriteOutcome::Committed
    }

    /// Compute a new value from a copy of the current one and
    /// [`write`](Self::write) it.
    pub fn update(&self, f: impl FnOnce(&mut V)) -> WriteOutcome {
        let mut next = self.read();
        f(&mut next);
        self.write(next)
    }

    /// Notify all observers again with `(current, current)`.
    ///
    /// Validators are not consulted and the version does not change. Useful
    /// after mutating state the value refers to (e.g. through an `Rc`).
    pub fn refresh(&self) {
        let value = self.read();
        self.dispatch(&value, &value);
    }

    /// Append a validator. Adding the same handle twice makes it run twice.
    pub fn add_validator(&self, validator: &Validator<V>) {
        self.inner
            .borrow_mut()
            .validators
            .push(Rc::clone(validator));
    }

    /// Remove every registration of `validator`. Unknown handles are ignored.
    pub fn remove_validator(&self, validator: &Validator<V>) {
        self.inner
            .borrow_mut()
            .validators
            .retain(|v| !same_rc(v, validator));
    }

    /// Bind a callback, invoked as `callback(new, old)` on every commit and
    /// refresh.
    pub fn bind_function(&self, callback: &Callback<V>) {
        self.inner
            .borrow_mut()
            .bindings
            .push(Binding::Function(Rc::clone(callback)));
    }

    /// Unbind every registration of `callback`. Unknown handles are ignored.
    pub fn unbind_function(&self, callback: &Callback<V>) {
        self.inner
            .borrow_mut()
            .bindings
            .retain(|b| !b.is_function(callback));
    }

    /// Bind a closure and return its handle for a later
    /// [`unbind_function`](Self::unbind_function).
    pub fn observe(&self, f: impl Fn(&V, &V) + 'static) -> Callback<V> {
        let handle = callback(f);
        self.bind_function(&handle);
        handle
    }

    /// Unbind every registration of `target`, whatever its escaping mode.
    /// Unknown targets are ignored.
    pub fn unbind_target<T: ?Sized>(&self, target: &Rc<T>) {
        self.inner
            .borrow_mut()
            .bindings
            .retain(|b| !b.is_target(target));
    }

    /// Number of registered validators.
    #[must_use]
    pub fn validator_count(&self) -> usize {
        self.inner.borrow().validators.len()
    }

    /// Number of registered bindings (callbacks and targets).
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    /// Number of committed writes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Create a handle that does not keep the value alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakObservableValue<V> {
        WeakObservableValue {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Run one notification pass over a snapshot of the bindings.
    fn dispatch(&self, new: &V, old: &V) {
        let bindings = self.inner.borrow().bindings.clone();
        trace!(bindings = bindings.len(), "notifying observers");

        for binding in &bindings {
            binding.notify(new, old);
        }
    }
}

impl<V: Clone + fmt::Display + 'static> ObservableValue<V> {
    /// Bind a render target with HTML escaping. On every commit and refresh
    /// the target's content becomes the escaped `to_string()` of the value.
    ///
    /// Accepts a concrete `Rc<T>` as well as an `Rc<dyn RenderTarget>`.
    pub fn bind_target<T: IntoRenderTarget + ?Sized>(&self, target: &Rc<T>) {
        self.bind_target_with(target, true);
    }

    /// Bind a render target, choosing whether the value's string form is
    /// HTML-escaped before it is displayed.
    pub fn bind_target_with<T: IntoRenderTarget + ?Sized>(
        &self,
        target: &Rc<T>,
        escape_html: bool,
    ) {
        let target = Rc::clone(target).into_render_target();
        self.inner.borrow_mut().bindings.push(Binding::Target {
            target,
            escape_html,
            render: render_display::<V>,
        });
    }
}

/// Non-owning handle to an [`ObservableValue`].
pub struct WeakObservableValue<V> {
    inner: Weak<RefCell<ObservableInner<V>>>,
}

impl<V> Clone for WeakObservableValue<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for WeakObservableValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakObservableValue")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl<V> WeakObservableValue<V> {
    /// Get a strong handle if the observable is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<ObservableValue<V>> {
        self.inner.upgrade().map(|inner| ObservableValue { inner })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

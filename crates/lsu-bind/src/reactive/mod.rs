#![forbid(unsafe_code)]

//! One-way data bindings.
//!
//! - [`ObservableValue`]: a shared value cell that validates proposed values
//!   and notifies bound observers on commit.
//! - [`Callback`] / [`Validator`]: `Rc` handles identifying registrations.
//! - [`RenderTarget`]: a string display surface an observable can drive.
//!
//! # Architecture
//!
//! `ObservableValue<V>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership. Registrations are identified by `Rc` address, so unbinding
//! needs the same handle that was bound.
//!
//! # Invariants
//!
//! 1. A rejected write changes nothing and notifies nobody.
//! 2. Validators and observers run in registration order.
//! 3. Every pass iterates a snapshot of the list it walks.
//! 4. Unbinding an unknown handle is a no-op.

pub mod binding;
pub mod observable;
pub mod target;

pub use binding::{Callback, Validator, callback, validator};
pub use observable::{ObservableValue, WeakObservableValue, WriteOutcome};
pub use target::{IntoRenderTarget, RenderTarget};

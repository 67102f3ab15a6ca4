#![forbid(unsafe_code)]

//! Observable values with validators and one-way bindings.
//!
//! # Role in ls-utils
//! `lsu-bind` is the stateful core. A value lives in an [`ObservableValue`];
//! writes pass through validators, and committed values are pushed to bound
//! callbacks and [`RenderTarget`]s. HTML escaping for targets comes from
//! `lsu-text`; DOM element targets live in `lsu-dom`.
//!
//! ```
//! use lsu_bind::{ObservableValue, validator};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let count = ObservableValue::new(0);
//! count.add_validator(&validator(|new: &i32, _: &i32| *new >= 0));
//!
//! let label = Rc::new(RefCell::new(String::new()));
//! count.bind_target(&label);
//!
//! count.write(5);
//! count.write(-1);
//! assert_eq!(count.read(), 5);
//! assert_eq!(*label.borrow(), "5");
//! ```
//!
//! Everything runs synchronously on the calling thread; the types are not
//! `Send`.

pub mod reactive;

pub use reactive::{
    Callback, IntoRenderTarget, ObservableValue, RenderTarget, Validator, WeakObservableValue,
    WriteOutcome, callback, validator,
};

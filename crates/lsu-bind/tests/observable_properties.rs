//! Property-based invariant tests for `ObservableValue`.
//!
//! A random sequence of validator registrations, removals, writes and
//! refreshes is replayed against the observable and against a plain model:
//!
//! 1. A write commits iff every registered validator accepts it.
//! 2. The reported rejecting validator is the first one that refuses.
//! 3. Rejected writes never notify and never change the value.
//! 4. Refresh always notifies with `(current, current)` and never validates.
//! 5. Unknown removals are no-ops.

use lsu_bind::{ObservableValue, Validator, WriteOutcome, callback, validator};
use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Validator pool: validator `i` accepts values `>= THRESHOLDS[i]`.
const THRESHOLDS: [i32; 4] = [-50, 0, 25, 50];

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Write(i32),
    Refresh,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..THRESHOLDS.len()).prop_map(Op::Add),
        (0..THRESHOLDS.len()).prop_map(Op::Remove),
        (-100i32..=100).prop_map(Op::Write),
        Just(Op::Refresh),
    ]
}

struct Harness {
    obs: ObservableValue<i32>,
    pool: Vec<Validator<i32>>,
    calls: Rc<Cell<u32>>,
    validations: Rc<Cell<u32>>,
    notified: Rc<RefCell<Vec<(i32, i32)>>>,
}

fn harness() -> Harness {
    let obs = ObservableValue::new(0);
    let validations = Rc::new(Cell::new(0u32));
    let pool = THRESHOLDS
        .iter()
        .map(|&min| {
            let validations = Rc::clone(&validations);
            validator(move |new: &i32, _: &i32| {
                validations.set(validations.get() + 1);
                *new >= min
            })
        })
        .collect();

    let calls = Rc::new(Cell::new(0u32));
    let notified = Rc::new(RefCell::new(Vec::new()));
    let calls_clone = Rc::clone(&calls);
    let notified_clone = Rc::clone(&notified);
    obs.bind_function(&callback(move |new: &i32, old: &i32| {
        calls_clone.set(calls_clone.get() + 1);
        notified_clone.borrow_mut().push((*new, *old));
    }));

    Harness {
        obs,
        pool,
        calls,
        validations,
        notified,
    }
}

proptest! {
    #[test]
    fn observable_matches_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let h = harness();
        let mut registered: Vec<usize> = Vec::new();
        let mut value = 0i32;
        let mut version = 0u64;

        for op in ops {
            match op {
                Op::Add(i) => {
                    h.obs.add_validator(&h.pool[i]);
                    registered.push(i);
                }
                Op::Remove(i) => {
                    h.obs.remove_validator(&h.pool[i]);
                    registered.retain(|&r| r != i);
                }
                Op::Write(v) => {
                    let calls_before = h.calls.get();
                    let validations_before = h.validations.get();
                    let first_reject = registered.iter().position(|&i| v < THRESHOLDS[i]);

                    let outcome = h.obs.write(v);
                    let evaluated = h.validations.get() - validations_before;

                    match first_reject {
                        Some(index) => {
                            prop_assert_eq!(outcome, WriteOutcome::Rejected { validator: index });
                            prop_assert_eq!(evaluated as usize, index + 1);
                            prop_assert_eq!(h.calls.get(), calls_before);
                        }
                        None => {
                            prop_assert_eq!(outcome, WriteOutcome::Committed);
                            prop_assert_eq!(evaluated as usize, registered.len());
                            prop_assert_eq!(h.calls.get(), calls_before + 1);
                            prop_assert_eq!(h.notified.borrow().last().copied(), Some((v, value)));
                            value = v;
                            version += 1;
                        }
                    }
                }
                Op::Refresh => {
                    let calls_before = h.calls.get();
                    let validations_before = h.validations.get();
                    h.obs.refresh();
                    prop_assert_eq!(h.validations.get(), validations_before);
                    prop_assert_eq!(h.calls.get(), calls_before + 1);
                    prop_assert_eq!(h.notified.borrow().last().copied(), Some((value, value)));
                }
            }

            prop_assert_eq!(h.obs.read(), value);
            prop_assert_eq!(h.obs.version(), version);
            prop_assert_eq!(h.obs.validator_count(), registered.len());
        }
    }

    #[test]
    fn observers_run_in_registration_order(count in 1usize..12, value in any::<i32>()) {
        let obs = ObservableValue::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..count {
            let order = Rc::clone(&order);
            obs.observe(move |_: &i32, _: &i32| order.borrow_mut().push(i));
        }

        obs.write(value);
        prop_assert_eq!(order.borrow().clone(), (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn escaped_target_shows_escaped_text(text in ".*") {
        let obs = ObservableValue::new(String::new());
        let target = Rc::new(RefCell::new(String::new()));
        obs.bind_target(&target);

        obs.write(text.clone());
        prop_assert_eq!(target.borrow().clone(), lsu_text::escape_html(&text).into_owned());
    }
}

//! Scoped comparison precision for geometric predicates.
//!
//! Every epsilon-based comparison in this crate reads the active value from
//! a thread-local stack instead of a hardcoded literal, so a caller (or a
//! test harness) can tighten or loosen robustness for an entire computation
//! without touching individual call sites.
//!
//! Scopes are strictly nested: [`PrecisionGuard`] pushes a value on
//! construction and pops it when dropped. Guards are not `Send`, so a scope
//! cannot leak across a thread boundary.

use std::cell::RefCell;
use std::marker::PhantomData;

/// Epsilon in effect when no scope is active.
pub const DEFAULT_EPSILON: f64 = 1e-9;

thread_local! {
    static EPSILON_STACK: RefCell<Vec<f64>> = RefCell::new(vec![DEFAULT_EPSILON]);
}

/// The active comparison epsilon (top of the precision stack).
#[inline]
pub fn epsilon() -> f64 {
    EPSILON_STACK.with(|stack| stack.borrow().last().copied().unwrap_or(DEFAULT_EPSILON))
}

/// Check two scalars for equality under the active epsilon.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= epsilon()
}

/// Check whether a scalar is zero under the active epsilon.
#[inline]
pub fn approx_zero(v: f64) -> bool {
    v.abs() <= epsilon()
}

/// RAII scope that overrides the active epsilon for its lifetime.
///
/// Dropping the guard pops exactly the value it pushed.
pub struct PrecisionGuard {
    _not_send: PhantomData<*const ()>,
}

impl PrecisionGuard {
    /// Push `eps` as the active epsilon until the guard is dropped.
    pub fn new(eps: f64) -> Self {
        EPSILON_STACK.with(|stack| stack.borrow_mut().push(eps));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for PrecisionGuard {
    fn drop(&mut self) {
        EPSILON_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            // The bottom entry is the default and is never popped.
            if stack.len() > 1 {
                stack.pop();
            }
        });
    }
}

/// Run `f` with `eps` as the active epsilon.
pub fn with_epsilon<T>(eps: f64, f: impl FnOnce() -> T) -> T {
    let _guard = PrecisionGuard::new(eps);
    f()
}

//! State Bridge - observable value cell with synchronous side effects.
//!
//! The core primitive: a single value cell plus an ordered list of side
//! effects, fixed at construction, that run synchronously after every update.
//! Construction returns an accessor/setter pair; both are cheap clones over
//! the same cell.
//!
//! # Update dispatch
//!
//! A [`Setter::set`] call:
//! 1. Applies the update to the cell (replacement value or transform of the
//!    current value) with no intermediate state observable
//! 2. Invokes every side effect, in registration order, with the accessor's
//!    current output and a self-referential setter
//! 3. Returns once all effects have returned
//!
//! Effects are not value-change-gated: setting the same value still fires
//! them. An effect may call the setter again; the nested update and its full
//! effect sequence complete, depth-first, before the outer sequence resumes.
//! Unbounded effect chains are a caller error - the bridge tracks dispatch
//! depth and warns once past [`REENTRANT_WARN_DEPTH`], but does not stop them.
//!
//! # Panics
//!
//! A transform or side effect that panics propagates to the `set` caller
//! uncaught; the remainder of that update's effect sequence is abandoned.
//! The bridge performs no containment.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{trace, warn};

use crate::value::BridgeValue;

/// Dispatch depth past which a one-time warning is logged.
///
/// Reentrant setter calls from inside a side effect are legal and recurse
/// synchronously; a chain this deep almost certainly means an effect that
/// unconditionally re-sets.
pub const REENTRANT_WARN_DEPTH: usize = 64;

// =============================================================================
// Types
// =============================================================================

/// Ordered callback run after every update.
///
/// Receives the current value (read at invocation time, so an effect running
/// after a nested set sees the newest state) and a self-referential setter,
/// so an effect can itself trigger further updates (effect chains).
pub type SideEffect<T> = Box<dyn Fn(&T, &Setter<T>)>;

/// One update: either a replacement value or a transform of the current value.
///
/// Exactly one variant applies per `set` call, dispatched explicitly at the
/// call site.
pub enum Update<T> {
    /// The value becomes current as-is.
    Replace(T),
    /// The next value is computed from the current one.
    Apply(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Update<T> {
    /// Replace the current value outright.
    pub fn replace(value: T) -> Self {
        Update::Replace(value)
    }

    /// Compute the next value from the current one.
    pub fn apply(transform: impl FnOnce(&T) -> T + 'static) -> Self {
        Update::Apply(Box::new(transform))
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Replace(value)
    }
}

struct BridgeInner<T> {
    cell: RefCell<T>,
    effects: Vec<SideEffect<T>>,
    depth: Cell<usize>,
    depth_warned: Cell<bool>,
}

/// Read half of a bridge. Cloning aliases the same cell.
pub struct Accessor<T> {
    inner: Rc<BridgeInner<T>>,
}

/// Write half of a bridge. Cloning aliases the same cell.
pub struct Setter<T> {
    inner: Rc<BridgeInner<T>>,
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Accessor {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Setter {
            inner: self.inner.clone(),
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Create a bridge with no side effects.
///
/// The accessor returns `initial` until the first `set`.
pub fn bridge<T: BridgeValue>(initial: T) -> (Accessor<T>, Setter<T>) {
    bridge_with(initial, Vec::new())
}

/// Create a bridge with an ordered list of side effects.
///
/// Effects are fixed at construction; none may be added or removed afterward.
/// Construction never fails.
pub fn bridge_with<T: BridgeValue>(
    initial: T,
    effects: Vec<SideEffect<T>>,
) -> (Accessor<T>, Setter<T>) {
    let inner = Rc::new(BridgeInner {
        cell: RefCell::new(initial),
        effects,
        depth: Cell::new(0),
        depth_warned: Cell::new(false),
    });
    (
        Accessor {
            inner: inner.clone(),
        },
        Setter { inner },
    )
}

/// Box a closure as a [`SideEffect`].
pub fn side_effect<T>(effect: impl Fn(&T, &Setter<T>) + 'static) -> SideEffect<T> {
    Box::new(effect)
}

// =============================================================================
// Accessor
// =============================================================================

impl<T: BridgeValue> Accessor<T> {
    /// Clone of the current value. No side effects.
    ///
    /// Always reflects the most recently completed update; before the first
    /// `set` this is the initial value.
    pub fn get(&self) -> T {
        self.inner.cell.borrow().clone()
    }

    /// Current value as untyped plain structured data.
    pub fn snapshot(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&*self.inner.cell.borrow())
    }
}

// =============================================================================
// Setter
// =============================================================================

impl<T: BridgeValue> Setter<T> {
    /// Apply an update, then run every side effect in registration order.
    ///
    /// The cell is fully updated before any effect observes it. All effects
    /// for this update return before `set` does, so callers can rely on
    /// observers being synchronized when control returns.
    pub fn set(&self, update: impl Into<Update<T>>) {
        {
            let mut cell = self.inner.cell.borrow_mut();
            match update.into() {
                Update::Replace(next) => *cell = next,
                Update::Apply(transform) => {
                    let next = transform(&*cell);
                    *cell = next;
                }
            }
        }
        self.dispatch();
    }

    /// Sugar for `set(Update::Replace(value))`.
    pub fn replace(&self, value: T) {
        self.set(Update::Replace(value));
    }

    /// Sugar for `set(Update::apply(transform))`.
    pub fn apply(&self, transform: impl FnOnce(&T) -> T + 'static) {
        self.set(Update::apply(transform));
    }

    /// Run all effects, each against the accessor's output at its own
    /// invocation time.
    ///
    /// The cell borrow is released before every invocation, so effects are
    /// free to call `set` again; nested dispatches complete depth-first, and
    /// effects running after one see the newest state.
    fn dispatch(&self) {
        let depth = self.inner.depth.get() + 1;
        self.inner.depth.set(depth);
        if depth >= REENTRANT_WARN_DEPTH && !self.inner.depth_warned.get() {
            self.inner.depth_warned.set(true);
            warn!(depth, "deep reentrant dispatch; unbounded effect chain?");
        }
        trace!(depth, effects = self.inner.effects.len(), "bridge update");

        for effect in &self.inner.effects {
            let current = self.inner.cell.borrow().clone();
            effect(&current, self);
        }

        self.inner.depth.set(self.inner.depth.get() - 1);
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Mount API - render-effect lifecycle over a bridge.
//!
//! The conventional bridge usage: one side effect re-renders an externally
//! owned UI mount point after every update, passing the current value and the
//! setter into the tree so UI events can round-trip state changes. This
//! module packages that pattern: [`mount`] constructs the bridge with a render
//! effect appended and returns a [`MountHandle`] for detaching the tree.
//!
//! Unmounting belongs to the mounting collaborator, not the bridge: the
//! handle flips a mounted flag so the render effect becomes inert and runs
//! renderer teardown. The bridge itself has no teardown operation - ceasing
//! to call its setter is sufficient to make it inert.
//!
//! # Example
//!
//! ```ignore
//! use tether::{mount, LineRenderer};
//!
//! let renderer = LineRenderer::stdout(|score: &i64| format!("Score: {score}"));
//! let (score, set_score, handle) = mount(0i64, Vec::new(), renderer)?;
//!
//! // Engine loop
//! for _ in 0..60 {
//!     set_score.set(tether::Update::apply(|s| s + 1));
//! }
//!
//! handle.unmount();
//! ```

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use tracing::debug;

use crate::bridge::{Accessor, Setter, SideEffect, bridge_with};
use crate::value::BridgeValue;

// =============================================================================
// Renderer Seam
// =============================================================================

/// The seam behind which the declarative UI tree lives.
///
/// `render` receives the current value and the setter; the tree passes
/// the setter into its event handlers to round-trip state changes. Setter
/// calls must come from event handling outside `render` - a renderer that
/// calls the setter from inside `render` recurses into the render effect
/// while the renderer is borrowed and will panic.
pub trait Renderer<T> {
    /// Re-render the tree for the given value.
    fn render(&mut self, value: &T, setter: &Setter<T>) -> io::Result<()>;

    /// Detach the rendered tree. Called once, on unmount.
    fn teardown(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that allows unmounting.
///
/// Holds the mounted flag the render effect checks, and the renderer
/// teardown closure.
pub struct MountHandle {
    mounted: Rc<Cell<bool>>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl MountHandle {
    /// Detach the rendered tree.
    ///
    /// The render effect becomes a no-op; further setter calls still update
    /// the cell and run any caller-registered effects. Renderer teardown
    /// runs once.
    pub fn unmount(mut self) {
        self.mounted.set(false);
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
        debug!("unmounted");
    }

    /// Whether the render effect is still live.
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best-effort teardown if the handle is dropped without unmount()
        self.mounted.set(false);
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Construct a bridge whose last side effect renders `renderer`.
///
/// Caller-supplied `effects` run first, in order; the render effect runs
/// after them, so observers see state before the UI repaints. One initial
/// render happens before this returns, so the tree reflects `initial` prior
/// to the first tick; its error surfaces here. Render errors inside the
/// effect are dropped.
pub fn mount<T, R>(
    initial: T,
    mut effects: Vec<SideEffect<T>>,
    renderer: R,
) -> io::Result<(Accessor<T>, Setter<T>, MountHandle)>
where
    T: BridgeValue,
    R: Renderer<T> + 'static,
{
    let mounted = Rc::new(Cell::new(true));
    let renderer = Rc::new(RefCell::new(renderer));

    let mounted_for_effect = mounted.clone();
    let renderer_for_effect = renderer.clone();
    effects.push(Box::new(move |value: &T, setter: &Setter<T>| {
        if !mounted_for_effect.get() {
            return;
        }
        let _ = renderer_for_effect.borrow_mut().render(value, setter);
    }));

    let (accessor, setter) = bridge_with(initial, effects);

    // Initial render - synchronize the tree before the first tick
    renderer.borrow_mut().render(&accessor.get(), &setter)?;
    debug!("mounted");

    let teardown: Box<dyn FnOnce()> = Box::new(move || {
        let _ = renderer.borrow_mut().teardown();
    });

    Ok((
        accessor,
        setter,
        MountHandle {
            mounted,
            teardown: Some(teardown),
        },
    ))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{Update, side_effect};

    /// Renderer that records every value it is asked to paint.
    struct RecordingRenderer {
        frames: Rc<RefCell<Vec<i64>>>,
        torn_down: Rc<Cell<u32>>,
    }

    impl Renderer<i64> for RecordingRenderer {
        fn render(&mut self, value: &i64, _setter: &Setter<i64>) -> io::Result<()> {
            self.frames.borrow_mut().push(*value);
            Ok(())
        }

        fn teardown(&mut self) -> io::Result<()> {
            self.torn_down.set(self.torn_down.get() + 1);
            Ok(())
        }
    }

    fn recording() -> (RecordingRenderer, Rc<RefCell<Vec<i64>>>, Rc<Cell<u32>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let torn_down = Rc::new(Cell::new(0));
        (
            RecordingRenderer {
                frames: frames.clone(),
                torn_down: torn_down.clone(),
            },
            frames,
            torn_down,
        )
    }

    #[test]
    fn test_initial_render_before_first_tick() {
        let (renderer, frames, _) = recording();
        let (_value, _set, handle) = mount(5i64, Vec::new(), renderer).unwrap();

        assert!(handle.is_mounted());
        assert_eq!(frames.borrow().as_slice(), &[5]);
    }

    #[test]
    fn test_render_effect_follows_every_set() {
        let (renderer, frames, _) = recording();
        let (_value, set, _handle) = mount(0i64, Vec::new(), renderer).unwrap();

        set.set(1);
        set.set(Update::apply(|v| v + 1));
        assert_eq!(frames.borrow().as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_caller_effects_run_before_render() {
        let order: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));
        let order_effect = order.clone();
        let order_render = order.clone();

        struct OrderRenderer {
            order: Rc<RefCell<Vec<&'static str>>>,
        }
        impl Renderer<i64> for OrderRenderer {
            fn render(&mut self, _value: &i64, _setter: &Setter<i64>) -> io::Result<()> {
                self.order.borrow_mut().push("render");
                Ok(())
            }
        }

        let (_value, set, _handle) = mount(
            0i64,
            vec![side_effect(move |_v: &i64, _set| {
                order_effect.borrow_mut().push("effect")
            })],
            OrderRenderer {
                order: order_render,
            },
        )
        .unwrap();

        set.set(1);
        // Initial render has no effect pass; the set interleaves effect first
        assert_eq!(order.borrow().as_slice(), &["render", "effect", "render"]);
    }

    #[test]
    fn test_unmount_makes_render_inert() {
        let (renderer, frames, torn_down) = recording();
        let (value, set, handle) = mount(0i64, Vec::new(), renderer).unwrap();

        set.set(1);
        handle.unmount();
        set.set(2);

        // Cell still updates; render effect no longer fires
        assert_eq!(value.get(), 2);
        assert_eq!(frames.borrow().as_slice(), &[0, 1]);
        assert_eq!(torn_down.get(), 1);
    }

    #[test]
    fn test_drop_tears_down_once() {
        let (renderer, _frames, torn_down) = recording();
        {
            let (_value, _set, _handle) = mount(0i64, Vec::new(), renderer).unwrap();
        }
        assert_eq!(torn_down.get(), 1);
    }

    #[test]
    fn test_ui_round_trip_through_setter() {
        // A renderer that captures the setter like a UI event handler would,
        // then "clicks" after mount: the round-trip set re-renders.
        struct CapturingRenderer {
            frames: Rc<RefCell<Vec<i64>>>,
            captured: Rc<RefCell<Option<Setter<i64>>>>,
        }
        impl Renderer<i64> for CapturingRenderer {
            fn render(&mut self, value: &i64, setter: &Setter<i64>) -> io::Result<()> {
                self.frames.borrow_mut().push(*value);
                *self.captured.borrow_mut() = Some(setter.clone());
                Ok(())
            }
        }

        let frames = Rc::new(RefCell::new(Vec::new()));
        let captured = Rc::new(RefCell::new(None));
        let (value, _set, _handle) = mount(
            0i64,
            Vec::new(),
            CapturingRenderer {
                frames: frames.clone(),
                captured: captured.clone(),
            },
        )
        .unwrap();

        let ui_setter = captured.borrow().clone().unwrap();
        ui_setter.set(Update::apply(|v| v + 10));

        assert_eq!(value.get(), 10);
        assert_eq!(frames.borrow().as_slice(), &[0, 10]);
    }
}

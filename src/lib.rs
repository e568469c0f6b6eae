//! # tether
//!
//! Signal-style state bridge between imperative engine loops and declarative UIs.
//!
//! A game engine (or any non-reactive simulation loop) mutates state once per
//! tick. A declarative UI tree wants to re-render whenever that state changes,
//! but the loop lives outside the UI framework's change detection. tether
//! connects the two with one primitive: an observable value cell whose setter
//! synchronously runs an ordered list of side effects after every update.
//!
//! ## Architecture
//!
//! ```text
//! engine tick → Setter::set → value cell → side effects (in order) → render
//!                    ↑                                                  │
//!                    └──────────── UI event round-trip ─────────────────┘
//! ```
//!
//! The conventional side effect re-renders a UI subtree at an externally
//! managed mount point, passing the current value and the setter back into
//! the tree so UI events can round-trip state changes.
//!
//! ## Modules
//!
//! - [`bridge`](mod@bridge) - The core primitive: accessor/setter pair over one value cell
//! - [`mount`](mod@mount) - Render-effect lifecycle ([`mount()`], [`MountHandle`])
//! - [`renderer`] - Concrete terminal renderer for single-line status output
//! - [`value`] - The constrained value model ([`BridgeValue`])
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tether::{bridge_with, side_effect, Update};
//!
//! let log: Rc<RefCell<Vec<i64>>> = Rc::new(RefCell::new(Vec::new()));
//! let log_effect = log.clone();
//!
//! let (score, set_score) = bridge_with(
//!     0i64,
//!     vec![side_effect(move |value, _setter| {
//!         log_effect.borrow_mut().push(*value);
//!     })],
//! );
//!
//! // Engine tick: transform the current value.
//! set_score.set(Update::apply(|score| score + 10));
//! assert_eq!(score.get(), 10);
//!
//! // UI event: replace it outright.
//! set_score.set(0);
//! assert_eq!(log.borrow().as_slice(), &[10, 0]);
//! ```

pub mod bridge;
pub mod mount;
pub mod renderer;
pub mod value;

// Re-export commonly used items
pub use bridge::{Accessor, Setter, SideEffect, Update, bridge, bridge_with, side_effect};
pub use mount::{MountHandle, Renderer, mount};
pub use renderer::LineRenderer;
pub use value::{BridgeValue, Value};

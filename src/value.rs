//! Value Model - what a bridge cell is allowed to hold.
//!
//! Cells are restricted to plain structured data: strings, numbers, booleans,
//! null, and nested sequences/mappings thereof. Opaque live handles (engine
//! handles, file descriptors, raw pointers) are excluded so the cell can
//! always be snapshotted, logged, or shipped across a process boundary.
//!
//! The restriction is expressed through [`BridgeValue`], a blanket trait over
//! `Clone + Serialize + 'static`: anything serde can turn into plain
//! structured data qualifies, anything it cannot is rejected at compile time.

use serde::Serialize;

/// Untyped plain-data value, for bridges that carry dynamic state.
pub use serde_json::Value;

/// Marker for types a bridge cell may hold.
///
/// Blanket-implemented; never implement this by hand. Derive `Serialize`
/// (and `Clone`) on your state type instead.
pub trait BridgeValue: Clone + Serialize + 'static {}

impl<T: Clone + Serialize + 'static> BridgeValue for T {}

//! Terminal Renderers - concrete [`Renderer`](crate::mount::Renderer) impls.
//!
//! - [`LineRenderer`] - redraws a single status line in place

mod line;

pub use line::LineRenderer;

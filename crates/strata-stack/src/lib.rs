//! # strata-stack
//!
//! Layer lifecycle management and the CPU compositor.
//!
//! A [`LayerStack`] owns an ordered set of [`Layer`]s over a fixed canvas;
//! [`LayerStack::composite`] flattens them bottom-to-top into a single
//! straight-alpha RGBA [`strata_core::PixelBuffer`], applying each layer's
//! opacity, optional mask and [`strata_blend::BlendMode`] per pixel.
//!
//! # Modules
//!
//! - [`layer`] - a single layer: buffer, mask, compositing properties
//! - [`stack`] - ordered stack with add/insert/remove/move/duplicate
//! - [`compositor`] - the per-pixel flattening pass
//!
//! # Example
//!
//! ```rust
//! use strata_stack::LayerStack;
//! use strata_blend::BlendMode;
//!
//! let mut stack = LayerStack::new(256, 256);
//! stack.set_background([0, 0, 0, 255]);
//!
//! stack.add_layer("Glow");
//! stack.active_layer_mut().fill([40, 120, 255, 255]);
//! stack.active_layer_mut().set_mode(BlendMode::Screen);
//! stack.active_layer_mut().set_opacity(0.6);
//!
//! let frame = stack.composite();
//! assert_eq!(frame.dimensions(), (256, 256));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - composite rows across a Rayon thread pool
//!
//! # Concurrency
//!
//! Compositing is a pure synchronous computation; layer buffers are only
//! read during a pass. The stack itself provides no locking — callers
//! serialize edits against composite calls.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod compositor;
pub mod layer;
pub mod stack;

pub use compositor::composite;
pub use layer::{Layer, LayerId};
pub use stack::LayerStack;

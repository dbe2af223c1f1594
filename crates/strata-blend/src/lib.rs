//! # strata-blend
//!
//! The composite mode table for layer compositing: color-mix functions and
//! Porter-Duff alpha operators, as pure stateless functions over normalized
//! `f32` channels.
//!
//! # Modules
//!
//! - [`mode`] - the [`BlendMode`] enumeration and per-pixel dispatch
//! - [`separable`] - per-channel blend functions (Multiply, Screen, ...)
//! - [`nonseparable`] - HSL-based blend functions (Hue, Color, ...)
//! - [`operator`] - the [`PorterDuff`] coefficient algebra
//!
//! # Example
//!
//! ```rust
//! use strata_blend::{BlendMode, PorterDuff};
//!
//! let src = [1.0, 0.0, 0.0, 0.5]; // half-covered red
//! let dst = [0.0, 0.0, 1.0, 1.0]; // opaque blue
//!
//! let out = BlendMode::Normal.composite_pixel(src, dst);
//! assert!((out[0] - 0.5).abs() < 1e-6);
//!
//! // The same algebra is reachable directly.
//! let (fs, fd) = PorterDuff::SrcOver.coefficients(0.5, 1.0);
//! assert_eq!((fs, fd), (1.0, 0.5));
//! ```
//!
//! Everything here is deterministic and allocation-free; the compositor in
//! `strata-stack` is the only intended caller, but the table is public so
//! it can be verified in isolation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod mode;
pub mod nonseparable;
pub mod operator;
pub mod separable;

pub use mode::BlendMode;
pub use operator::PorterDuff;

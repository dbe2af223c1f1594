//! # strata-core
//!
//! Core types for CPU layer compositing.
//!
//! This crate provides the leaf data structures the rest of the strata
//! workspace builds on:
//!
//! - [`PixelBuffer`] - owned 8-bit straight-alpha RGBA buffer
//! - [`Mask`] - single-channel coverage mask
//! - [`Affine`] - 2D affine transform metadata
//! - [`pixel`] - conversions between 8-bit samples and normalized floats
//!
//! ## Crate Structure
//!
//! `strata-core` has no internal dependencies; the other strata crates
//! depend on it:
//!
//! ```text
//! strata-core (this crate)
//!    ^
//!    |
//!    +-- strata-blend (mode table, Porter-Duff algebra)
//!    +-- strata-stack (layers, stack, compositor)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use strata_core::{Mask, PixelBuffer};
//!
//! let mut buf = PixelBuffer::new(320, 240);
//! buf.fill([30, 30, 60, 255]);
//!
//! let mask = Mask::new(320, 240); // full coverage
//! assert_eq!(mask.coverage(0, 0), 255);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod affine;
pub mod buffer;
pub mod error;
pub mod mask;
pub mod pixel;

pub use affine::Affine;
pub use buffer::{PixelBuffer, CHANNELS};
pub use error::{Error, Result};
pub use mask::Mask;

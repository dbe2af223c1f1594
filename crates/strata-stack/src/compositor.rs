//! Flattening a layer stack into one output buffer.
//!
//! Compositing is a strict bottom-to-top fold per pixel: each layer's
//! contribution depends on the accumulated result beneath it, so layers are
//! always applied in order. Independent pixels share nothing, which is why
//! the work is partitioned along rows — with the `parallel` feature (on by
//! default) each Rayon worker owns a disjoint row range of the accumulator
//! and reads the immutable layer buffers with zero synchronization.
//!
//! The accumulator holds normalized `f32` channels so repeated blending
//! does not collect 8-bit rounding error; quantization happens once, after
//! the last layer.
//!
//! The pass never mutates the stack and has no failure path: given a
//! well-formed stack it always produces a buffer.

use crate::layer::Layer;
use crate::stack::LayerStack;
use strata_core::pixel::{normalize, normalize_channel, quantize};
use strata_core::{PixelBuffer, CHANNELS};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Composites every visible layer of the stack, bottom to top, into a new
/// straight-alpha RGBA buffer sized to the canvas.
///
/// The result depends only on layer order, per-layer state and pixel
/// content; compositing the same stack twice yields bit-identical buffers.
pub fn composite(stack: &LayerStack) -> PixelBuffer {
    let (width, height) = stack.dimensions();
    debug!(width, height, layers = stack.len(), "composite stack");

    let row_len = width as usize * CHANNELS;
    if row_len == 0 || height == 0 {
        return PixelBuffer::new(width, height);
    }

    // Accumulator starts as the background color everywhere.
    let bg = normalize(stack.background());
    let mut acc = vec![0.0f32; row_len * height as usize];
    for px in acc.chunks_exact_mut(CHANNELS) {
        px.copy_from_slice(&bg);
    }

    #[cfg(feature = "parallel")]
    acc.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| composite_row(stack, y as u32, row));

    #[cfg(not(feature = "parallel"))]
    for (y, row) in acc.chunks_exact_mut(row_len).enumerate() {
        composite_row(stack, y as u32, row);
    }

    let mut out = PixelBuffer::new(width, height);
    let data = out.data_mut();
    for (src, dst) in acc.chunks_exact(CHANNELS).zip(data.chunks_exact_mut(CHANNELS)) {
        dst.copy_from_slice(&quantize([src[0], src[1], src[2], src[3]]));
    }
    out
}

/// Applies every visible layer to one accumulator row.
fn composite_row(stack: &LayerStack, y: u32, row: &mut [f32]) {
    for layer in stack.layers() {
        if !layer.is_visible() {
            continue;
        }
        apply_layer_row(layer, y, row);
    }
}

/// Folds a single layer's row into the accumulator row.
fn apply_layer_row(layer: &Layer, y: u32, row: &mut [f32]) {
    let mode = layer.mode();
    let opacity = layer.opacity();
    let skip_transparent = mode.skips_transparent_source();
    let src_row = layer.buffer().row(y);
    let mask_row = layer.mask().map(|m| m.row(y));

    for (x, (dst, src)) in row
        .chunks_exact_mut(CHANNELS)
        .zip(src_row.chunks_exact(CHANNELS))
        .enumerate()
    {
        let mut sa = normalize_channel(src[3]) * opacity;
        if let Some(mask) = mask_row {
            sa *= normalize_channel(mask[x]);
        }
        // Transparent source leaves the pixel untouched for SrcOver-paired
        // modes; set operators still rewrite alpha and must run.
        if sa <= 0.0 && skip_transparent {
            continue;
        }

        let s = [
            normalize_channel(src[0]),
            normalize_channel(src[1]),
            normalize_channel(src[2]),
            sa,
        ];
        let d = [dst[0], dst[1], dst[2], dst[3]];
        let out = mode.composite_pixel(s, d);
        dst.copy_from_slice(&out);
    }
}

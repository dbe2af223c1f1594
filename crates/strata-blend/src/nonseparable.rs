//! Non-separable blend functions.
//!
//! Hue, Saturation, Color and Luminosity cannot be computed per channel:
//! they swap one or more of the backdrop's HSL components for the source's,
//! which requires the full RGB triplet. The decomposition follows the W3C
//! Compositing and Blending Level 1 definitions, including its luma weights
//! (0.3, 0.59, 0.11 — not Rec.709).

/// Luma weight of the red channel.
const LUMA_R: f32 = 0.3;
/// Luma weight of the green channel.
const LUMA_G: f32 = 0.59;
/// Luma weight of the blue channel.
const LUMA_B: f32 = 0.11;

/// Returns the luminosity of an RGB triplet.
#[inline]
pub fn lum(c: [f32; 3]) -> f32 {
    LUMA_R * c[0] + LUMA_G * c[1] + LUMA_B * c[2]
}

/// Returns the saturation (max - min channel) of an RGB triplet.
#[inline]
pub fn sat(c: [f32; 3]) -> f32 {
    c[0].max(c[1]).max(c[2]) - c[0].min(c[1]).min(c[2])
}

/// Pulls out-of-gamut channels back into [0, 1] while preserving luminosity.
fn clip_color(mut c: [f32; 3]) -> [f32; 3] {
    let l = lum(c);
    let n = c[0].min(c[1]).min(c[2]);
    let x = c[0].max(c[1]).max(c[2]);
    // Guards keep the degenerate all-channels-equal case out of the division.
    if n < 0.0 && l > n {
        for ch in &mut c {
            *ch = l + (*ch - l) * l / (l - n);
        }
    }
    if x > 1.0 && x > l {
        for ch in &mut c {
            *ch = l + (*ch - l) * (1.0 - l) / (x - l);
        }
    }
    c
}

/// Replaces the luminosity of `c` with `l`, clipping back into gamut.
#[inline]
pub fn set_lum(c: [f32; 3], l: f32) -> [f32; 3] {
    let d = l - lum(c);
    clip_color([c[0] + d, c[1] + d, c[2] + d])
}

/// Replaces the saturation of `c` with `s`, keeping its hue ordering.
///
/// The minimum channel goes to 0, the maximum to `s`, and the middle channel
/// is rescaled proportionally.
pub fn set_sat(c: [f32; 3], s: f32) -> [f32; 3] {
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&a, &b| c[a].total_cmp(&c[b]));
    let (lo, mid, hi) = (idx[0], idx[1], idx[2]);

    let mut out = [0.0f32; 3];
    if c[hi] > c[lo] {
        out[mid] = (c[mid] - c[lo]) * s / (c[hi] - c[lo]);
        out[hi] = s;
    }
    out
}

/// Hue: source hue with the backdrop's saturation and luminosity.
#[inline]
pub fn hue(cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
    set_lum(set_sat(cs, sat(cb)), lum(cb))
}

/// Saturation: source saturation with the backdrop's hue and luminosity.
#[inline]
pub fn saturation(cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
    set_lum(set_sat(cb, sat(cs)), lum(cb))
}

/// Color: source hue and saturation with the backdrop's luminosity.
#[inline]
pub fn color(cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
    set_lum(cs, lum(cb))
}

/// Luminosity: source luminosity with the backdrop's hue and saturation.
#[inline]
pub fn luminosity(cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
    set_lum(cb, lum(cs))
}

//! The composite mode table.
//!
//! A [`BlendMode`] names one entry of a single flat enumeration covering
//! both the Photoshop-style blend functions (Multiply, Screen, Hue, ...)
//! and the Porter-Duff set operators (Clear, SrcIn, Xor, ...). Every entry
//! decomposes into two independent pieces:
//!
//! 1. a color-mix function `mix(cb, cs)` (alpha never participates), and
//! 2. a [`PorterDuff`] alpha operator.
//!
//! Blend functions always pair with [`PorterDuff::SrcOver`]; set operators
//! always mix as `cs` (no color blending, only alpha algebra). The table is
//! stateless and dispatches through a `match`, so the compiler sees the
//! whole closed set.

use crate::nonseparable;
use crate::operator::PorterDuff;
use crate::separable;

/// A layer composite mode: either a blend function or a Porter-Duff
/// operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// No color mixing; plain source-over compositing.
    #[default]
    Normal,
    /// Multiply (darken).
    Multiply,
    /// Screen (lighten).
    Screen,
    /// Overlay (contrast, keyed on the backdrop).
    Overlay,
    /// Soft light.
    SoftLight,
    /// Hard light (contrast, keyed on the source).
    HardLight,
    /// Color dodge.
    ColorDodge,
    /// Color burn.
    ColorBurn,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
    /// Absolute difference.
    Difference,
    /// Difference with lower contrast.
    Exclusion,
    /// Source hue, backdrop saturation and luminosity.
    Hue,
    /// Source saturation, backdrop hue and luminosity.
    Saturation,
    /// Source hue and saturation, backdrop luminosity.
    Color,
    /// Source luminosity, backdrop hue and saturation.
    Luminosity,
    /// Porter-Duff Clear.
    Clear,
    /// Porter-Duff Source (copy).
    Source,
    /// Porter-Duff Dest.
    Dest,
    /// Porter-Duff SrcOver (explicit spelling of Normal's operator).
    SrcOver,
    /// Porter-Duff DstOver.
    DstOver,
    /// Porter-Duff SrcIn.
    SrcIn,
    /// Porter-Duff SrcOut.
    SrcOut,
    /// Porter-Duff DstIn.
    DstIn,
    /// Porter-Duff DstOut.
    DstOut,
    /// Porter-Duff SrcAtop.
    SrcAtop,
    /// Porter-Duff DstAtop.
    DstAtop,
    /// Porter-Duff Xor.
    Xor,
    /// Porter-Duff Add (Lighter).
    Add,
}

/// Applies a per-channel mix function to two RGB triplets.
#[inline]
fn per_channel(cb: [f32; 3], cs: [f32; 3], f: fn(f32, f32) -> f32) -> [f32; 3] {
    [f(cb[0], cs[0]), f(cb[1], cs[1]), f(cb[2], cs[2])]
}

impl BlendMode {
    /// Every mode, blend functions first, then operators.
    pub const ALL: [Self; 29] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::SoftLight,
        Self::HardLight,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::Darken,
        Self::Lighten,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
        Self::Clear,
        Self::Source,
        Self::Dest,
        Self::SrcOver,
        Self::DstOver,
        Self::SrcIn,
        Self::SrcOut,
        Self::DstIn,
        Self::DstOut,
        Self::SrcAtop,
        Self::DstAtop,
        Self::Xor,
        Self::Add,
    ];

    /// Returns `true` for the Porter-Duff operator group.
    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Clear
                | Self::Source
                | Self::Dest
                | Self::SrcOver
                | Self::DstOver
                | Self::SrcIn
                | Self::SrcOut
                | Self::DstIn
                | Self::DstOut
                | Self::SrcAtop
                | Self::DstAtop
                | Self::Xor
                | Self::Add
        )
    }

    /// Returns `true` for the blend-function group (Normal..Luminosity).
    #[inline]
    pub fn is_blend_function(self) -> bool {
        !self.is_operator()
    }

    /// Returns `true` if a fully transparent source pixel cannot change the
    /// destination under this mode.
    ///
    /// Holds for the blend-function group, which always composites SrcOver;
    /// operators like `Clear` or `SrcIn` rewrite the destination even where
    /// the source is empty, so the compositor must not skip them.
    #[inline]
    pub fn skips_transparent_source(self) -> bool {
        self.is_blend_function()
    }

    /// Returns the Porter-Duff operator this mode composites with.
    ///
    /// Blend functions pair with [`PorterDuff::SrcOver`]; operator entries
    /// map to themselves.
    #[inline]
    pub fn operator(self) -> PorterDuff {
        match self {
            Self::Clear => PorterDuff::Clear,
            Self::Source => PorterDuff::Source,
            Self::Dest => PorterDuff::Dest,
            Self::SrcOver => PorterDuff::SrcOver,
            Self::DstOver => PorterDuff::DstOver,
            Self::SrcIn => PorterDuff::SrcIn,
            Self::SrcOut => PorterDuff::SrcOut,
            Self::DstIn => PorterDuff::DstIn,
            Self::DstOut => PorterDuff::DstOut,
            Self::SrcAtop => PorterDuff::SrcAtop,
            Self::DstAtop => PorterDuff::DstAtop,
            Self::Xor => PorterDuff::Xor,
            Self::Add => PorterDuff::Add,
            _ => PorterDuff::SrcOver,
        }
    }

    /// Mixes backdrop and source colors, ignoring alpha.
    ///
    /// Operator entries return `cs` unchanged.
    #[inline]
    pub fn mix(self, cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Normal => cs,
            Self::Multiply => per_channel(cb, cs, separable::multiply),
            Self::Screen => per_channel(cb, cs, separable::screen),
            Self::Overlay => per_channel(cb, cs, separable::overlay),
            Self::SoftLight => per_channel(cb, cs, separable::soft_light),
            Self::HardLight => per_channel(cb, cs, separable::hard_light),
            Self::ColorDodge => per_channel(cb, cs, separable::color_dodge),
            Self::ColorBurn => per_channel(cb, cs, separable::color_burn),
            Self::Darken => per_channel(cb, cs, separable::darken),
            Self::Lighten => per_channel(cb, cs, separable::lighten),
            Self::Difference => per_channel(cb, cs, separable::difference),
            Self::Exclusion => per_channel(cb, cs, separable::exclusion),
            Self::Hue => nonseparable::hue(cb, cs),
            Self::Saturation => nonseparable::saturation(cb, cs),
            Self::Color => nonseparable::color(cb, cs),
            Self::Luminosity => nonseparable::luminosity(cb, cs),
            _ => cs,
        }
    }

    /// Composites one source pixel onto one destination pixel.
    ///
    /// Both pixels are normalized straight-alpha `[r, g, b, a]`; the source
    /// alpha is expected to already include layer opacity and mask. This is
    /// the complete per-pixel pipeline: mix, then alpha-combine.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_blend::BlendMode;
    ///
    /// // Opaque red multiplied onto opaque blue annihilates every channel.
    /// let out = BlendMode::Multiply.composite_pixel(
    ///     [1.0, 0.0, 0.0, 1.0],
    ///     [0.0, 0.0, 1.0, 1.0],
    /// );
    /// assert_eq!(out, [0.0, 0.0, 0.0, 1.0]);
    /// ```
    #[inline]
    pub fn composite_pixel(self, src: [f32; 4], dst: [f32; 4]) -> [f32; 4] {
        let cs = [src[0], src[1], src[2]];
        let cb = [dst[0], dst[1], dst[2]];
        let cm = self.mix(cb, cs);
        self.operator().combine(cm, src[3], cb, dst[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(BlendMode::default(), BlendMode::Normal);
        assert_eq!(BlendMode::Normal.operator(), PorterDuff::SrcOver);
    }

    #[test]
    fn test_group_classification() {
        assert!(BlendMode::Multiply.is_blend_function());
        assert!(BlendMode::Luminosity.is_blend_function());
        assert!(BlendMode::Clear.is_operator());
        assert!(BlendMode::Add.is_operator());
        assert!(!BlendMode::Normal.is_operator());
    }

    #[test]
    fn test_all_covers_every_entry_once() {
        for (i, a) in BlendMode::ALL.iter().enumerate() {
            for b in &BlendMode::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(BlendMode::ALL.len(), 29);
    }

    #[test]
    fn test_operator_entries_do_not_mix() {
        let cb = [0.2, 0.4, 0.6];
        let cs = [0.9, 0.1, 0.5];
        for mode in BlendMode::ALL.iter().filter(|m| m.is_operator()) {
            assert_eq!(mode.mix(cb, cs), cs, "{:?} must not mix colors", mode);
        }
    }

    #[test]
    fn test_normal_equals_srcover_pixel() {
        let src = [0.8, 0.1, 0.3, 0.4];
        let dst = [0.2, 0.9, 0.5, 0.7];
        assert_eq!(
            BlendMode::Normal.composite_pixel(src, dst),
            BlendMode::SrcOver.composite_pixel(src, dst),
        );
    }

    #[test]
    fn test_multiply_pairs_with_srcover() {
        // Transparent backdrop: SrcOver keeps the mixed color at source alpha
        let out = BlendMode::Multiply.composite_pixel([0.5, 0.5, 0.5, 1.0], [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(out[3], 1.0);
    }

    #[test]
    fn test_skip_classification() {
        assert!(BlendMode::Normal.skips_transparent_source());
        assert!(BlendMode::Hue.skips_transparent_source());
        assert!(!BlendMode::Clear.skips_transparent_source());
        assert!(!BlendMode::DstIn.skips_transparent_source());
    }
}

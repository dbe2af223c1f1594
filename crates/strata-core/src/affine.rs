//! 2D affine transforms carried as layer metadata.
//!
//! # Convention
//!
//! Transforms map column vectors:
//!
//! ```text
//! | xx xy x0 |   | x |   | xx*x + xy*y + x0 |
//! | yx yy y0 | * | y | = | yx*x + yy*y + y0 |
//! |  0  0  1 |   | 1 |   |        1         |
//! ```
//!
//! The compositor itself consumes buffers already resolved into canvas
//! space; this type exists so editing code can accumulate a layer's
//! placement and bake it into the buffer before a composite pass.

/// A 2D affine transform (rotation, scale, shear, translation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    /// Row 0, column 0
    pub xx: f32,
    /// Row 1, column 0
    pub yx: f32,
    /// Row 0, column 1
    pub xy: f32,
    /// Row 1, column 1
    pub yy: f32,
    /// X translation
    pub x0: f32,
    /// Y translation
    pub y0: f32,
}

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    /// Creates a translation transform.
    #[inline]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            xx: 1.0,
            yx: 0.0,
            xy: 0.0,
            yy: 1.0,
            x0: x,
            y0: y,
        }
    }

    /// Creates a scaling transform about the origin.
    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            xx: sx,
            yx: 0.0,
            xy: 0.0,
            yy: sy,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// Creates a counter-clockwise rotation about the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_core::Affine;
    ///
    /// let quarter = Affine::rotate(std::f32::consts::FRAC_PI_2);
    /// let (x, y) = quarter.transform_point(1.0, 0.0);
    /// assert!(x.abs() < 1e-6);
    /// assert!((y - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            xx: cos,
            yx: sin,
            xy: -sin,
            yy: cos,
            x0: 0.0,
            y0: 0.0,
        }
    }

    /// Composes two transforms: the result applies `other` first, then `self`.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self {
            xx: self.xx * other.xx + self.xy * other.yx,
            yx: self.yx * other.xx + self.yy * other.yx,
            xy: self.xx * other.xy + self.xy * other.yy,
            yy: self.yx * other.xy + self.yy * other.yy,
            x0: self.xx * other.x0 + self.xy * other.y0 + self.x0,
            y0: self.yx * other.x0 + self.yy * other.y0 + self.y0,
        }
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn transform_point(self, x: f32, y: f32) -> (f32, f32) {
        (
            self.xx * x + self.xy * y + self.x0,
            self.yx * x + self.yy * y + self.y0,
        )
    }

    /// Returns `true` if this is the identity transform.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let (x, y) = Affine::IDENTITY.transform_point(3.5, -2.0);
        assert_eq!((x, y), (3.5, -2.0));
        assert!(Affine::default().is_identity());
    }

    #[test]
    fn test_translate() {
        let (x, y) = Affine::translate(10.0, 5.0).transform_point(1.0, 1.0);
        assert_eq!((x, y), (11.0, 6.0));
    }

    #[test]
    fn test_scale() {
        let (x, y) = Affine::scale(2.0, 3.0).transform_point(4.0, 4.0);
        assert_eq!((x, y), (8.0, 12.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let (x, y) = Affine::rotate(std::f32::consts::FRAC_PI_2).transform_point(1.0, 0.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_compose_order() {
        // Scale then translate: point (1,0) -> (2,0) -> (12,0)
        let m = Affine::translate(10.0, 0.0).multiply(Affine::scale(2.0, 2.0));
        let (x, y) = m.transform_point(1.0, 0.0);
        assert_abs_diff_eq!(x, 12.0, epsilon = 1e-6);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-6);
    }
}

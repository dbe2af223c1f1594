//! A single editable layer: pixel content plus compositing metadata.

use strata_blend::BlendMode;
use strata_core::{Affine, Error, Mask, PixelBuffer, Result};

/// Stable identifier of a layer within its stack.
///
/// Ids are assigned monotonically by the owning [`crate::LayerStack`] and
/// survive reordering, so editing code can hold on to one across structural
/// mutations instead of a raw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub(crate) u64);

/// One layer of a stack: an owned RGBA buffer, an optional coverage mask,
/// and the properties the compositor reads.
///
/// Layers are created through [`crate::LayerStack`], which sizes the buffer
/// to the canvas and assigns the id. Property setters only ever touch this
/// layer's own state.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    name: String,
    buffer: PixelBuffer,
    mask: Option<Mask>,
    opacity: f32,
    mode: BlendMode,
    visible: bool,
    locked: bool,
    transform: Affine,
}

impl Layer {
    /// Creates a fully transparent layer sized to the canvas.
    pub(crate) fn new(id: LayerId, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id,
            name: name.into(),
            buffer: PixelBuffer::new(width, height),
            mask: None,
            opacity: 1.0,
            mode: BlendMode::Normal,
            visible: true,
            locked: false,
            transform: Affine::IDENTITY,
        }
    }

    /// Returns the layer's stable id.
    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Replaces the id; used when a duplicated layer joins the stack.
    pub(crate) fn set_id(&mut self, id: LayerId) {
        self.id = id;
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the layer's pixel content.
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Returns the pixel content for drawing into.
    ///
    /// Must not be held across structural stack mutations; re-resolve the
    /// layer by id or index afterwards.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Returns the coverage mask, if one is attached.
    #[inline]
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Returns the coverage mask for painting into.
    #[inline]
    pub fn mask_mut(&mut self) -> Option<&mut Mask> {
        self.mask.as_mut()
    }

    /// Attaches a fresh full-coverage mask sized to the layer.
    pub fn add_mask(&mut self) {
        let (w, h) = self.buffer.dimensions();
        self.mask = Some(Mask::new(w, h));
    }

    /// Attaches an existing mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the mask's dimensions differ
    /// from the layer's buffer; the mask is never cropped or stretched.
    pub fn set_mask(&mut self, mask: Mask) -> Result<()> {
        if mask.dimensions() != self.buffer.dimensions() {
            return Err(Error::dimension_mismatch(
                self.buffer.dimensions(),
                mask.dimensions(),
            ));
        }
        self.mask = Some(mask);
        Ok(())
    }

    /// Detaches and returns the mask, if any.
    pub fn remove_mask(&mut self) -> Option<Mask> {
        self.mask.take()
    }

    /// Returns the layer opacity in [0.0, 1.0].
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the layer opacity, clamping into [0.0, 1.0].
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Returns the composite mode.
    #[inline]
    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    /// Sets the composite mode.
    pub fn set_mode(&mut self, mode: BlendMode) {
        self.mode = mode;
    }

    /// Returns `true` if the layer participates in compositing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the layer. Hidden layers contribute nothing,
    /// regardless of opacity or mode.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns `true` if the layer is locked against editing.
    ///
    /// Locking is advisory metadata for the editing application; it does not
    /// affect compositing.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Locks or unlocks the layer.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Returns the layer's placement transform.
    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Sets the placement transform.
    ///
    /// The compositor reads buffers already resolved into canvas space; the
    /// transform is carried for the editing application to bake in.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Resets the layer content to fully transparent.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Fills the layer content with one RGBA value.
    pub fn fill(&mut self, px: [u8; 4]) {
        self.buffer.fill(px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> Layer {
        Layer::new(LayerId(1), "test", 16, 16)
    }

    #[test]
    fn test_new_layer_defaults() {
        let l = layer();
        assert_eq!(l.name(), "test");
        assert_eq!(l.opacity(), 1.0);
        assert_eq!(l.mode(), BlendMode::Normal);
        assert!(l.is_visible());
        assert!(!l.is_locked());
        assert!(l.mask().is_none());
        assert!(l.transform().is_identity());
        assert_eq!(l.buffer().pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_opacity_clamps() {
        let mut l = layer();
        l.set_opacity(1.5);
        assert_eq!(l.opacity(), 1.0);
        l.set_opacity(-0.25);
        assert_eq!(l.opacity(), 0.0);
    }

    #[test]
    fn test_add_mask_full_coverage() {
        let mut l = layer();
        l.add_mask();
        let mask = l.mask().unwrap();
        assert_eq!(mask.dimensions(), (16, 16));
        assert_eq!(mask.coverage(5, 5), 255);
    }

    #[test]
    fn test_set_mask_rejects_wrong_size() {
        let mut l = layer();
        assert!(l.set_mask(Mask::new(16, 16)).is_ok());
        assert!(l.set_mask(Mask::new(8, 16)).is_err());
        // The mismatched mask did not replace the good one
        assert_eq!(l.mask().unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn test_remove_mask() {
        let mut l = layer();
        l.add_mask();
        assert!(l.remove_mask().is_some());
        assert!(l.mask().is_none());
        assert!(l.remove_mask().is_none());
    }

    #[test]
    fn test_fill_and_clear() {
        let mut l = layer();
        l.fill([9, 9, 9, 255]);
        assert_eq!(l.buffer().pixel(3, 3), [9, 9, 9, 255]);
        l.clear();
        assert_eq!(l.buffer().pixel(3, 3), [0, 0, 0, 0]);
    }
}

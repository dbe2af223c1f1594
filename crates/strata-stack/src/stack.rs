//! The ordered layer stack and its lifecycle operations.
//!
//! Index 0 is the bottom layer; compositing walks upward from there. The
//! stack owns every layer and its buffers exclusively. All index-based
//! operations report failure through `bool`/`Option` returns — invalid
//! indices and last-layer removal are expected, recoverable conditions at
//! the editing-application boundary, never panics.

use crate::compositor;
use crate::layer::{Layer, LayerId};
use strata_core::pixel::OPAQUE_WHITE;
use strata_core::PixelBuffer;
use tracing::debug;

/// An ordered stack of layers over a fixed-size canvas.
///
/// A stack is never empty: construction creates a default background layer
/// and [`remove_layer`](Self::remove_layer) refuses to take the last one.
/// The active layer is the target of subsequent drawing operations; its
/// index is kept valid across every mutation.
///
/// # Example
///
/// ```rust
/// use strata_stack::LayerStack;
/// use strata_blend::BlendMode;
///
/// let mut stack = LayerStack::new(640, 480);
/// stack.add_layer("Sketch");
/// stack.active_layer_mut().set_mode(BlendMode::Multiply);
///
/// let frame = stack.composite();
/// assert_eq!(frame.dimensions(), (640, 480));
/// ```
#[derive(Debug, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
    active: usize,
    width: u32,
    height: u32,
    background: [u8; 4],
    next_id: u64,
}

impl LayerStack {
    /// Creates a stack with one transparent `"Background"` layer over an
    /// opaque white canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let mut stack = Self {
            layers: Vec::new(),
            active: 0,
            width,
            height,
            background: OPAQUE_WHITE,
            next_id: 0,
        };
        stack.add_layer("Background");
        stack
    }

    fn alloc_id(&mut self) -> LayerId {
        self.next_id += 1;
        LayerId(self.next_id)
    }

    /// Appends a new fully transparent layer on top and makes it active.
    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = self.alloc_id();
        let layer = Layer::new(id, name, self.width, self.height);
        debug!(name = layer.name(), index = self.layers.len(), "add layer");
        self.layers.push(layer);
        self.active = self.layers.len() - 1;
        id
    }

    /// Inserts a new layer at `index`, shifting later layers up by one.
    ///
    /// An index beyond the current count degrades to an append. The new
    /// layer becomes active.
    pub fn insert_layer(&mut self, index: usize, name: impl Into<String>) -> LayerId {
        if index > self.layers.len() {
            return self.add_layer(name);
        }
        let id = self.alloc_id();
        let layer = Layer::new(id, name, self.width, self.height);
        debug!(name = layer.name(), index, "insert layer");
        self.layers.insert(index, layer);
        self.active = index;
        id
    }

    /// Removes the layer at `index`.
    ///
    /// Returns `false` without touching the stack if the index is invalid or
    /// only one layer remains. On success the active index is clamped back
    /// into range.
    pub fn remove_layer(&mut self, index: usize) -> bool {
        if index >= self.layers.len() || self.layers.len() <= 1 {
            return false;
        }
        debug!(index, "remove layer");
        self.layers.remove(index);
        if self.active >= self.layers.len() {
            self.active = self.layers.len() - 1;
        }
        true
    }

    /// Moves the layer at `from` so it ends up at index `to`, preserving the
    /// relative order of all other layers.
    ///
    /// Returns `false` if either index is out of range. The moved layer
    /// becomes active.
    pub fn move_layer(&mut self, from: usize, to: usize) -> bool {
        if from >= self.layers.len() || to >= self.layers.len() {
            return false;
        }
        if from != to {
            debug!(from, to, "move layer");
            let layer = self.layers.remove(from);
            self.layers.insert(to, layer);
        }
        self.active = to;
        true
    }

    /// Deep-copies the layer at `index` — buffer, mask and metadata — and
    /// inserts the copy immediately above the source.
    ///
    /// The copy gets a `" Copy"` name suffix and its own id, becomes active,
    /// and is independently mutable from the original. Returns `None` if the
    /// index is invalid.
    pub fn duplicate_layer(&mut self, index: usize) -> Option<LayerId> {
        if index >= self.layers.len() {
            return None;
        }
        let id = self.alloc_id();
        let mut copy = self.layers[index].clone();
        copy.set_id(id);
        let name = format!("{} Copy", copy.name());
        copy.set_name(name);
        debug!(index, name = copy.name(), "duplicate layer");
        self.layers.insert(index + 1, copy);
        self.active = index + 1;
        Some(id)
    }

    /// Selects the layer drawing operations target. Returns `false` if the
    /// index is out of range.
    pub fn set_active_layer(&mut self, index: usize) -> bool {
        if index >= self.layers.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Selects the first layer with the given name, bottom-up. Returns
    /// `false` if no layer matches.
    pub fn set_active_layer_by_name(&mut self, name: &str) -> bool {
        match self.layers.iter().position(|l| l.name() == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Returns the index of the active layer.
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the active layer.
    #[inline]
    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    /// Returns the active layer for editing.
    #[inline]
    pub fn active_layer_mut(&mut self) -> &mut Layer {
        &mut self.layers[self.active]
    }

    /// Returns the layer at `index`, if it exists.
    #[inline]
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Returns the layer at `index` for editing, if it exists.
    #[inline]
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Resolves a stable id to the layer's current index.
    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    /// Returns the layer with the given id, wherever it currently sits.
    pub fn layer_by_id(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    /// Returns the layer with the given id for editing.
    pub fn layer_by_id_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }

    /// Returns all layers, bottom first.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// A stack is never empty; this exists for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the canvas dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the background color the composite starts from.
    #[inline]
    pub fn background(&self) -> [u8; 4] {
        self.background
    }

    /// Sets the background color.
    pub fn set_background(&mut self, background: [u8; 4]) {
        self.background = background;
    }

    /// Flattens the stack into a single straight-alpha RGBA buffer.
    ///
    /// The composite is derived on demand from the current stack state; it
    /// is deterministic and leaves every layer untouched. Callers that want
    /// caching own the invalidation themselves.
    pub fn composite(&self) -> PixelBuffer {
        compositor::composite(self)
    }
}

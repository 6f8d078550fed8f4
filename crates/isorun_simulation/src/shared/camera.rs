//! Camera view rectangle (screen space)
//!
//! Камера — screen-space концепция, поэтому culling проектилей тоже
//! делается в screen space, а не в world.

use bevy::prelude::*;

/// Default cull margin around the view (screen units, every side)
pub const DEFAULT_CULL_MARGIN: f32 = 50.0;

/// Current camera view, передаётся в update явно (никакого global state)
///
/// # Usage
/// ```ignore
/// let view = CameraView::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
/// assert!(view.contains(Vec2::new(1320.0, 10.0))); // inside 50px margin
/// ```
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// Visible rectangle in screen coordinates
    pub rect: Rect,
    /// Expansion applied on every side before culling
    pub margin: f32,
}

impl Default for CameraView {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1280.0, 720.0))
    }
}

impl CameraView {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            margin: DEFAULT_CULL_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Move the view so its top-left corner sits at `min`
    pub fn scroll_to(&mut self, min: Vec2) {
        let size = self.rect.size();
        self.rect = Rect::from_corners(min, min + size);
    }

    /// Is `screen` inside the view expanded by margin? (edges inclusive)
    pub fn contains(&self, screen: Vec2) -> bool {
        self.rect.inflate(self.margin).contains(screen)
    }
}

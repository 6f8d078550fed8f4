//! Isometric projection (ground plane → screen, screen → ground plane)

use bevy::prelude::*;

/// Default tile footprint on screen (pixels)
pub const DEFAULT_TILE_WIDTH: f32 = 64.0;
pub const DEFAULT_TILE_HEIGHT: f32 = 32.0;

/// Size of one tile in world units
pub const DEFAULT_WORLD_TILE_SIZE: f32 = 32.0;

/// Isometric projection parameters
///
/// Формула (ground plane):
/// - screen_x = origin.x + (x - y) * scale_x
/// - screen_y = origin.y + (x + y) * scale_y - z * height_scale
///
/// Height `z` только сдвигает точку вверх по экрану, skew его не трогает.
/// Поэтому inverse определён только на ground plane (z = 0).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    /// Screen pixels per world unit along the (x - y) diagonal
    pub scale_x: f32,
    /// Screen pixels per world unit along the (x + y) diagonal
    pub scale_y: f32,
    /// Screen pixels per world unit of height
    pub height_scale: f32,
    /// Screen position of world origin
    pub origin: Vec2,
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::from_tiles(DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT, DEFAULT_WORLD_TILE_SIZE)
    }
}

impl IsoProjection {
    /// Projection where one world tile of `world_tile_size` units
    /// covers a `tile_width` x `tile_height` diamond on screen.
    pub fn from_tiles(tile_width: f32, tile_height: f32, world_tile_size: f32) -> Self {
        Self {
            scale_x: tile_width * 0.5 / world_tile_size,
            scale_y: tile_height * 0.5 / world_tile_size,
            height_scale: 1.0,
            origin: Vec2::ZERO,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// World (x, y, z) → screen position
    pub fn world_to_screen(&self, x: f32, y: f32, z: f32) -> Vec2 {
        Vec2::new(
            self.origin.x + (x - y) * self.scale_x,
            self.origin.y + (x + y) * self.scale_y - z * self.height_scale,
        )
    }

    /// Shorthand для Vec3 (z = height)
    pub fn project(&self, position: Vec3) -> Vec2 {
        self.world_to_screen(position.x, position.y, position.z)
    }

    /// Screen position → ground plane (x, y)
    ///
    /// Height не восстанавливается: результат всегда на z = 0.
    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        let u = (screen_x - self.origin.x) / self.scale_x;
        let v = (screen_y - self.origin.y) / self.scale_y;

        Vec2::new((u + v) * 0.5, (v - u) * 0.5)
    }
}

/// Planar distance between two ground positions (height ignored)
///
/// Используется для horizontal proximity, height проверяется отдельно.
pub fn world_distance_2d(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

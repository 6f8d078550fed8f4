//! Simulation tuning (single source of truth для констант)
//!
//! Все значения в world units / seconds, кроме `cull_margin` (screen units).
//! `IsoProjection` и `CameraView` выводятся из этого конфига при старте.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::iso::{IsoProjection, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_WORLD_TILE_SIZE};
use crate::shared::{CameraView, DEFAULT_CULL_MARGIN};

/// Fixed tick rate (Hz). 64 → timestep ровно 15.625ms, без float drift
pub const DEFAULT_TICK_HZ: f64 = 64.0;

/// Downward acceleration for gravity-affected shots (units/s²)
pub const DEFAULT_GRAVITY: f32 = 600.0;

/// Launch speed of every shot (units/s)
pub const DEFAULT_PROJECTILE_SPEED: f32 = 400.0;

pub const DEFAULT_PROJECTILE_DAMAGE: u32 = 10;

/// Collision radius (world units)
pub const DEFAULT_PROJECTILE_RADIUS: f32 = 4.0;

/// Simulation config resource
///
/// Serde — чтобы сцена/меню могли хранить tuning рядом с difficulty.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// FixedUpdate rate (Hz)
    pub tick_hz: f64,
    /// Gravity magnitude (positive = down)
    pub gravity: f32,
    /// Scalar launch speed, одинаковая для всех выстрелов
    pub projectile_speed: f32,
    /// Damage if FireProjectile doesn't specify one
    pub default_damage: u32,
    pub projectile_radius: f32,
    /// Off-view margin (screen units), не масштабируется с tile size
    pub cull_margin: f32,
    /// Tile diamond width on screen (pixels)
    pub tile_width: f32,
    /// Tile diamond height on screen (pixels)
    pub tile_height: f32,
    /// Tile edge in world units
    pub world_tile_size: f32,
    /// Initial view size (screen units)
    pub view_width: f32,
    pub view_height: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            gravity: DEFAULT_GRAVITY,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            default_damage: DEFAULT_PROJECTILE_DAMAGE,
            projectile_radius: DEFAULT_PROJECTILE_RADIUS,
            cull_margin: DEFAULT_CULL_MARGIN,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            world_tile_size: DEFAULT_WORLD_TILE_SIZE,
            view_width: 1280.0,
            view_height: 720.0,
        }
    }
}

impl SimulationConfig {
    /// Projection matching tile settings, world origin at view center
    pub fn projection(&self) -> IsoProjection {
        IsoProjection::from_tiles(self.tile_width, self.tile_height, self.world_tile_size)
            .with_origin(self.view_size() * 0.5)
    }

    /// View rectangle at (0, 0) with configured margin
    pub fn camera_view(&self) -> CameraView {
        CameraView::new(Rect::from_corners(Vec2::ZERO, self.view_size()))
            .with_margin(self.cull_margin)
    }

    pub fn view_size(&self) -> Vec2 {
        Vec2::new(self.view_width, self.view_height)
    }

    /// Fixed timestep (seconds)
    pub fn timestep_secs(&self) -> f64 {
        1.0 / self.tick_hz
    }
}

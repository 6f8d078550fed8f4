//! Height-aware collision predicates (projectile vs enemy / prop)
//!
//! Главная игровая механика: высокие выстрелы пролетают над низкими
//! препятствиями, низкие — под летающими/высокими врагами.
//! Поэтому сначала height gate, потом planar distance.
//!
//! Predicates pure (read-only): damage/destroy делает driver.

use bevy::prelude::*;

use crate::iso::world_distance_2d;

use super::components::Projectile;

/// Enemy collision volume (vertical cylinder)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyVolume {
    /// Ground position (x, y)
    pub position: Vec2,
    /// Bottom of the height band
    pub base_z: f32,
    /// Band size: enemy occupies [base_z, base_z + height]
    pub height: f32,
    /// Horizontal radius
    pub radius: f32,
}

impl EnemyVolume {
    pub fn new(position: Vec2, base_z: f32, height: f32, radius: f32) -> Self {
        Self {
            position,
            base_z,
            height,
            radius,
        }
    }

    /// Inclusive height band test
    pub fn covers_height(&self, z: f32) -> bool {
        z >= self.base_z && z <= self.base_z + self.height
    }
}

/// Static prop volume (box standing on the ground)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropVolume {
    /// Ground position (x, y) of the prop center
    pub position: Vec2,
    pub volume_width: f32,
    pub volume_depth: f32,
    /// Top of the prop above ground
    pub volume_height: f32,
}

impl PropVolume {
    pub fn new(position: Vec2, volume_width: f32, volume_depth: f32, volume_height: f32) -> Self {
        Self {
            position,
            volume_width,
            volume_depth,
            volume_height,
        }
    }

    /// Box footprint approximated as circle (half of the larger side)
    pub fn footprint_radius(&self) -> f32 {
        self.volume_width.max(self.volume_depth) * 0.5
    }
}

impl Projectile {
    /// Hit test против prop
    ///
    /// z > volume_height → пролетел над препятствием.
    pub fn check_prop_collision(&self, prop: &PropVolume) -> bool {
        if !self.is_alive() || self.position.z > prop.volume_height {
            return false;
        }

        let distance = world_distance_2d(
            self.position.x,
            self.position.y,
            prop.position.x,
            prop.position.y,
        );

        distance < self.radius() + prop.footprint_radius()
    }

    /// Hit test против enemy
    ///
    /// z вне [base_z, base_z + height] → промах при любой planar дистанции.
    pub fn check_enemy_collision(&self, enemy: &EnemyVolume) -> bool {
        if !self.is_alive() || !enemy.covers_height(self.position.z) {
            return false;
        }

        let distance = world_distance_2d(
            self.position.x,
            self.position.y,
            enemy.position.x,
            enemy.position.y,
        );

        distance < self.radius() + enemy.radius
    }
}

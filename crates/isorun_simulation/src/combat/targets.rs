//! Collision targets: Enemy, Prop, Health
//!
//! Enemy AI / wave spawning живут снаружи — здесь враги и пропы только данные:
//! позиция, height band, horizontal extent.

use bevy::prelude::*;

use crate::iso::ScreenPlacement;
use crate::projectile::{EnemyVolume, PropVolume};

/// Hit points
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Apply damage; true если именно этот удар убил
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.current = self.current.saturating_sub(amount);
        was_alive && !self.is_alive()
    }
}

/// Enemy target (volume + required Health)
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(Health, ScreenPlacement)]
pub struct Enemy {
    pub volume: EnemyVolume,
}

impl Enemy {
    pub fn new(volume: EnemyVolume) -> Self {
        Self { volume }
    }

    /// Ground-standing enemy (band starts at z = 0)
    pub fn grounded(position: Vec2, height: f32, radius: f32) -> Self {
        Self::new(EnemyVolume::new(position, 0.0, height, radius))
    }
}

/// Static prop (crate, wall segment, pillar). Always consumes a shot.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(ScreenPlacement)]
pub struct Prop {
    pub volume: PropVolume,
}

impl Prop {
    pub fn new(volume: PropVolume) -> Self {
        Self { volume }
    }
}

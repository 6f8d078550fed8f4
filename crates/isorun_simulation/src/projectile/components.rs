//! Projectile data: state, launch parameters, presentation handle
//!
//! Projectile — authoritative world-space state одного выстрела.
//! Screen position и depth — производные: живут в ScreenPlacement компоненте.

use bevy::prelude::*;
use thiserror::Error;

use crate::config::{DEFAULT_PROJECTILE_DAMAGE, DEFAULT_PROJECTILE_RADIUS};
use crate::iso::{IsoProjection, ScreenPlacement, PROJECTILE_DEPTH};

/// Opaque handle of the presentation resource (marker sprite) owned by a shot
///
/// Presentation layer выдаёт/освобождает реальный ресурс по этому id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u64);

/// Errors при создании projectile (caller contract violation)
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LaunchError {
    /// |velocity_z| >= speed → horizontal component = sqrt(negative)
    #[error("vertical velocity {velocity_z} must be smaller than launch speed {speed}")]
    VerticalSpeedTooHigh { velocity_z: f32, speed: f32 },

    #[error("launch parameters must be finite")]
    NonFiniteInput,
}

/// Launch parameters (builder)
///
/// `speed` одна на все выстрелы (из SimulationConfig), поэтому идёт в `new`,
/// а не в per-shot параметры FireProjectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileLaunch {
    /// World position (x, y ground, z height)
    pub origin: Vec3,
    /// Ground-plane angle (radians)
    pub angle: f32,
    /// Total 3D launch speed (units/s)
    pub speed: f32,
    pub damage: u32,
    /// Initial vertical velocity (units/s), 0 = flat shot
    pub velocity_z: f32,
    pub has_gravity: bool,
    pub radius: f32,
    pub piercing: bool,
}

impl ProjectileLaunch {
    pub fn new(origin: Vec3, angle: f32, speed: f32) -> Self {
        Self {
            origin,
            angle,
            speed,
            damage: DEFAULT_PROJECTILE_DAMAGE,
            velocity_z: 0.0,
            has_gravity: false,
            radius: DEFAULT_PROJECTILE_RADIUS,
            piercing: false,
        }
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_velocity_z(mut self, velocity_z: f32) -> Self {
        self.velocity_z = velocity_z;
        self
    }

    pub fn with_gravity(mut self, has_gravity: bool) -> Self {
        self.has_gravity = has_gravity;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_piercing(mut self, piercing: bool) -> Self {
        self.piercing = piercing;
        self
    }

    /// Initial velocity vector
    ///
    /// velocity_z != 0 → horizontal часть урезается, чтобы |v| == speed:
    /// horizontal = speed * sqrt(1 - (vz / speed)²)
    pub fn velocity(&self) -> Result<Vec3, LaunchError> {
        let finite = self.origin.is_finite()
            && self.angle.is_finite()
            && self.speed.is_finite()
            && self.velocity_z.is_finite()
            && self.radius.is_finite();
        if !finite {
            return Err(LaunchError::NonFiniteInput);
        }

        let (sin, cos) = self.angle.sin_cos();

        if self.velocity_z == 0.0 {
            return Ok(Vec3::new(self.speed * cos, self.speed * sin, 0.0));
        }

        if self.velocity_z.abs() >= self.speed.abs() {
            return Err(LaunchError::VerticalSpeedTooHigh {
                velocity_z: self.velocity_z,
                speed: self.speed,
            });
        }

        let ratio = self.velocity_z / self.speed;
        let horizontal = self.speed * (1.0 - ratio * ratio).sqrt();

        Ok(Vec3::new(horizontal * cos, horizontal * sin, self.velocity_z))
    }
}

/// One fired shot
///
/// Инварианты:
/// - alive == false → больше не симулируется и не участвует в collision
/// - visual освобождается ровно один раз (Option::take в destroy)
/// - radius константен всю жизнь
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Projectile {
    pub(crate) position: Vec3,
    pub(crate) velocity: Vec3,
    pub(crate) has_gravity: bool,
    damage: u32,
    radius: f32,
    piercing: bool,
    alive: bool,
    visual: Option<VisualHandle>,
}

impl Projectile {
    /// Create projectile (fail fast на невалидных параметрах)
    pub fn launch(
        launch: ProjectileLaunch,
        visual: Option<VisualHandle>,
    ) -> Result<Self, LaunchError> {
        let velocity = launch.velocity()?;

        Ok(Self {
            position: launch.origin,
            velocity,
            has_gravity: launch.has_gravity,
            damage: launch.damage,
            radius: launch.radius,
            piercing: launch.piercing,
            alive: true,
            visual,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn is_piercing(&self) -> bool {
        self.piercing
    }

    pub fn set_piercing(&mut self, piercing: bool) {
        self.piercing = piercing;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn has_gravity(&self) -> bool {
        self.has_gravity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn visual(&self) -> Option<VisualHandle> {
        self.visual
    }

    /// Screen position + depth of the current position (projectile layer)
    pub fn placement(&self, projection: &IsoProjection) -> ScreenPlacement {
        ScreenPlacement::of(self.position, PROJECTILE_DEPTH, projection)
    }

    /// Kill the shot
    ///
    /// Возвращает visual handle только при первом вызове, дальше — None (no-op).
    pub fn destroy(&mut self) -> Option<VisualHandle> {
        self.alive = false;
        self.visual.take()
    }
}

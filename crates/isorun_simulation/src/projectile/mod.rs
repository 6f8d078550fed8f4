//! Projectile domain — полёт и попадания выстрелов
//!
//! Содержит:
//! - Projectile / ProjectileLaunch / VisualHandle (state + construction)
//! - motion: per-tick update (gravity, Euler, ground impact, culling)
//! - collision: height-gated predicates против EnemyVolume / PropVolume
//! - systems: driver (spawn → advance → resolve → release)

use bevy::prelude::*;

pub mod collision;
pub mod components;
pub mod motion;
pub mod systems;


pub use collision::{EnemyVolume, PropVolume};
pub use components::{LaunchError, Projectile, ProjectileLaunch, VisualHandle};
pub use motion::{DestroyCause, TickContext, TickOutcome};
pub use systems::{
    FireProjectile, PiercedTargets, ProjectileReleased, SimulationStats, VisualHandleAllocator,
};

/// Projectile Plugin
///
/// Регистрирует projectile системы в FixedUpdate.
///
/// Порядок выполнения (важно: collision после motion, по новой позиции):
/// 1. spawn_projectiles
/// 2. advance_projectiles
/// 3. resolve_projectile_hits
/// 4. release_projectiles
///
/// Требует resources: SimulationConfig, IsoProjection, CameraView
/// (их вставляет SimulationPlugin).
pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FireProjectile>()
            .add_event::<ProjectileReleased>()
            .init_resource::<VisualHandleAllocator>()
            .init_resource::<SimulationStats>();

        app.add_systems(
            FixedUpdate,
            (
                systems::spawn_projectiles,
                systems::advance_projectiles,
                systems::resolve_projectile_hits,
                systems::release_projectiles,
            )
                .chain(),
        );
    }
}

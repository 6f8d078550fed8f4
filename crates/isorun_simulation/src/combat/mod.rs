//! Combat module — collision targets и damage
//!
//! ECS ответственность:
//! - Targets: Enemy / Prop volumes, Health
//! - Events: ProjectileHit, EnemyDied
//! - Death handling: Dead marker + despawn
//!
//! Hit detection — в projectile domain (resolve_projectile_hits).

use bevy::prelude::*;

pub mod damage;
pub mod targets;

pub use damage::{Dead, EnemyDied, HitTarget, ProjectileHit};
pub use targets::{Enemy, Health, Prop};

/// Combat Plugin
///
/// Events регистрируются здесь, despawn мёртвых — в FixedPostUpdate,
/// после того как весь projectile pipeline текущего tick отработал.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ProjectileHit>()
            .add_event::<EnemyDied>();

        app.add_systems(FixedPostUpdate, damage::despawn_dead_enemies);
    }
}

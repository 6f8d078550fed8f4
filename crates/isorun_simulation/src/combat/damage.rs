//! Damage events и death handling

use bevy::prelude::*;

/// What a projectile touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Enemy(Entity),
    Prop(Entity),
}

/// Event: projectile collided with a target (post-motion, this tick)
#[derive(Event, Debug, Clone)]
pub struct ProjectileHit {
    pub projectile: Entity,
    pub target: HitTarget,
    /// 0 для props
    pub damage: u32,
    /// Projectile продолжил полёт (piercing)
    pub pierced: bool,
}

/// Event: enemy health reached 0
#[derive(Event, Debug, Clone)]
pub struct EnemyDied {
    pub entity: Entity,
    pub killer: Entity,
}

/// Marker: enemy is dead, больше не участвует в collision
#[derive(Component, Debug)]
pub struct Dead;

/// Система: despawn врагов после EnemyDied
///
/// Dead marker ставится сразу в resolve; despawn — здесь, в конце tick.
pub fn despawn_dead_enemies(mut commands: Commands, mut died_events: EventReader<EnemyDied>) {
    for event in died_events.read() {
        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.despawn();
            crate::logger::log(&format!(
                "⚰️ Enemy {:?} despawned (killed by {:?})",
                event.entity, event.killer
            ));
        }
    }
}

//! Projectile systems (simulation driver)
//!
//! Порядок в FixedUpdate (chain):
//! 1. spawn_projectiles — FireProjectile → Projectile entity
//! 2. advance_projectiles — motion, ground impact, culling
//! 3. resolve_projectile_hits — collision по post-motion позиции
//! 4. release_projectiles — despawn мёртвых
//!
//! Visual handle возвращается через ProjectileReleased ровно один раз:
//! там, где произошёл destroy (advance или resolve).

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{Dead, Enemy, EnemyDied, Health, HitTarget, ProjectileHit, Prop};
use crate::config::SimulationConfig;
use crate::iso::{IsoProjection, ScreenPlacement};
use crate::shared::CameraView;

use super::components::{Projectile, ProjectileLaunch, VisualHandle};
use super::motion::{DestroyCause, TickContext, TickOutcome};

/// Event: driver просит выстрел
///
/// Speed не передаётся — она одна на все выстрелы (SimulationConfig).
#[derive(Event, Debug, Clone)]
pub struct FireProjectile {
    /// World origin (x, y ground, z height)
    pub origin: Vec3,
    /// Ground-plane angle (radians)
    pub angle: f32,
    /// None → SimulationConfig::default_damage
    pub damage: Option<u32>,
    pub velocity_z: f32,
    pub has_gravity: bool,
    pub piercing: bool,
}

impl FireProjectile {
    /// Flat shot at height `origin.z`
    pub fn flat(origin: Vec3, angle: f32) -> Self {
        Self {
            origin,
            angle,
            damage: None,
            velocity_z: 0.0,
            has_gravity: false,
            piercing: false,
        }
    }

    /// Lobbed shot (gravity on)
    pub fn arced(origin: Vec3, angle: f32, velocity_z: f32) -> Self {
        Self {
            velocity_z,
            has_gravity: true,
            ..Self::flat(origin, angle)
        }
    }

    pub fn to_launch(&self, config: &SimulationConfig) -> ProjectileLaunch {
        ProjectileLaunch::new(self.origin, self.angle, config.projectile_speed)
            .with_damage(self.damage.unwrap_or(config.default_damage))
            .with_velocity_z(self.velocity_z)
            .with_gravity(self.has_gravity)
            .with_radius(config.projectile_radius)
            .with_piercing(self.piercing)
    }
}

/// Event: presentation resource projectile'а можно освобождать
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileReleased {
    pub projectile: Entity,
    pub handle: VisualHandle,
}

/// Enemies already hit by a piercing shot (один урон на врага за выстрел)
#[derive(Component, Debug, Clone, Default)]
pub struct PiercedTargets(pub Vec<Entity>);

impl PiercedTargets {
    pub fn contains(&self, entity: Entity) -> bool {
        self.0.contains(&entity)
    }
}

/// Monotonic visual handle ids
#[derive(Resource, Debug, Default)]
pub struct VisualHandleAllocator {
    next: u64,
}

impl VisualHandleAllocator {
    pub fn allocate(&mut self) -> VisualHandle {
        let handle = VisualHandle(self.next);
        self.next += 1;
        handle
    }
}

/// Counters за всю сессию (headless отчёт, debug overlay)
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationStats {
    pub shots_fired: u32,
    pub rejected_launches: u32,
    pub ground_impacts: u32,
    pub culled: u32,
    pub enemy_hits: u32,
    pub prop_hits: u32,
    pub kills: u32,
    pub released: u32,
}

fn release(
    projectile: Entity,
    handle: Option<VisualHandle>,
    released_events: &mut EventWriter<ProjectileReleased>,
    stats: &mut SimulationStats,
) {
    if let Some(handle) = handle {
        released_events.write(ProjectileReleased { projectile, handle });
        stats.released += 1;
    }
}

/// Система: FireProjectile → spawn
///
/// Невалидный launch (|velocity_z| >= speed) — warning и пропуск, без spawn.
pub fn spawn_projectiles(
    mut commands: Commands,
    mut fire_events: EventReader<FireProjectile>,
    config: Res<SimulationConfig>,
    projection: Res<IsoProjection>,
    mut handles: ResMut<VisualHandleAllocator>,
    mut stats: ResMut<SimulationStats>,
) {
    for fire in fire_events.read() {
        let launch = fire.to_launch(&config);

        // Id отклонённого выстрела просто пропадает — ресурс под него не создавался
        match Projectile::launch(launch, Some(handles.allocate())) {
            Ok(projectile) => {
                let placement = projectile.placement(&projection);
                let entity = commands
                    .spawn((projectile, placement, PiercedTargets::default()))
                    .id();
                stats.shots_fired += 1;

                crate::logger::log(&format!(
                    "🔫 Projectile {:?} fired from {:?} (angle {:.2}, vz {:.1})",
                    entity, fire.origin, fire.angle, fire.velocity_z
                ));
            }
            Err(err) => {
                stats.rejected_launches += 1;
                crate::logger::log_warning(&format!("Rejected projectile launch: {}", err));
            }
        }
    }
}

/// Система: motion integration для всех живых projectiles
pub fn advance_projectiles(
    mut projectiles: Query<(Entity, &mut Projectile, &mut ScreenPlacement)>,
    time: Res<Time>,
    view: Res<CameraView>,
    projection: Res<IsoProjection>,
    config: Res<SimulationConfig>,
    mut released_events: EventWriter<ProjectileReleased>,
    mut stats: ResMut<SimulationStats>,
) {
    let delta_ms = time.delta_secs() * 1000.0;
    let ctx = TickContext {
        view: &view,
        projection: &projection,
        gravity: config.gravity,
    };

    for (entity, mut projectile, mut placement) in projectiles.iter_mut() {
        match projectile.update(delta_ms, &ctx) {
            TickOutcome::Skipped => {}
            TickOutcome::Moved { placement: moved } => {
                *placement = moved;
            }
            TickOutcome::Destroyed { cause, released } => {
                match cause {
                    DestroyCause::HitGround => stats.ground_impacts += 1,
                    DestroyCause::Culled => stats.culled += 1,
                }
                crate::logger::log(&format!(
                    "Projectile {:?} destroyed ({:?}) at {:?}",
                    entity,
                    cause,
                    projectile.position()
                ));
                release(entity, released, &mut released_events, &mut stats);
            }
        }
    }
}

/// Система: projectile vs props / enemies
///
/// Props проверяются первыми и всегда поглощают выстрел (даже piercing).
/// Enemy: урон, Dead + EnemyDied при летальном ударе, destroy если не piercing.
/// Порядок обхода врагов при одновременных попаданиях не гарантирован.
pub fn resolve_projectile_hits(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Projectile, &mut PiercedTargets)>,
    mut enemies: Query<(Entity, &Enemy, &mut Health), Without<Dead>>,
    props: Query<(Entity, &Prop)>,
    mut hit_events: EventWriter<ProjectileHit>,
    mut died_events: EventWriter<EnemyDied>,
    mut released_events: EventWriter<ProjectileReleased>,
    mut stats: ResMut<SimulationStats>,
) {
    for (entity, mut projectile, mut pierced) in projectiles.iter_mut() {
        if !projectile.is_alive() {
            continue;
        }

        let blocking_prop = props
            .iter()
            .find(|(_, prop)| projectile.check_prop_collision(&prop.volume));

        if let Some((prop_entity, _)) = blocking_prop {
            hit_events.write(ProjectileHit {
                projectile: entity,
                target: HitTarget::Prop(prop_entity),
                damage: 0,
                pierced: false,
            });
            stats.prop_hits += 1;

            let handle = projectile.destroy();
            release(entity, handle, &mut released_events, &mut stats);
            continue;
        }

        for (enemy_entity, enemy, mut health) in enemies.iter_mut() {
            if !health.is_alive() || pierced.contains(enemy_entity) {
                continue;
            }
            if !projectile.check_enemy_collision(&enemy.volume) {
                continue;
            }

            let damage = projectile.damage();
            let piercing = projectile.is_piercing();
            let lethal = health.take_damage(damage);

            hit_events.write(ProjectileHit {
                projectile: entity,
                target: HitTarget::Enemy(enemy_entity),
                damage,
                pierced: piercing,
            });
            stats.enemy_hits += 1;

            crate::logger::log(&format!(
                "🎯 Projectile {:?} → enemy {:?} dmg={} hp={}",
                entity, enemy_entity, damage, health.current
            ));

            if lethal {
                commands.entity(enemy_entity).insert(Dead);
                died_events.write(EnemyDied {
                    entity: enemy_entity,
                    killer: entity,
                });
                stats.kills += 1;
                crate::logger::log_info(&format!(
                    "💀 Enemy {:?} killed by {:?}",
                    enemy_entity, entity
                ));
            }

            if piercing {
                pierced.0.push(enemy_entity);
            } else {
                let handle = projectile.destroy();
                release(entity, handle, &mut released_events, &mut stats);
                break;
            }
        }
    }
}

/// Система: despawn мёртвых projectiles (handle уже возвращён)
pub fn release_projectiles(mut commands: Commands, projectiles: Query<(Entity, &Projectile)>) {
    for (entity, projectile) in projectiles.iter() {
        if !projectile.is_alive() {
            commands.entity(entity).despawn();
        }
    }
}

//! ISORUN Simulation Core
//!
//! Isometric projectile simulation на Bevy ECS 0.16 (headless, без рендера)
//!
//! Слои:
//! - iso: world ↔ screen transform, depth для draw order
//! - projectile: motion, lifecycle, height-gated collision
//! - combat: targets (Enemy / Prop / Health), damage events
//!
//! Scene/menu/asset/persistence живут снаружи; сюда приходят только
//! FireProjectile события, CameraView и данные врагов/пропов.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

pub mod combat;
pub mod config;
pub mod iso;
pub mod logger;
pub mod projectile;
pub mod shared;

pub use combat::{CombatPlugin, Dead, Enemy, EnemyDied, Health, HitTarget, ProjectileHit, Prop};
pub use config::SimulationConfig;
pub use iso::{calculate_depth, draw_order, world_distance_2d, IsoProjection, ScreenPlacement};
pub use logger::{log, log_error, log_info, log_warning};
pub use projectile::{
    EnemyVolume, FireProjectile, LaunchError, Projectile, ProjectileLaunch, ProjectilePlugin,
    ProjectileReleased, PropVolume, SimulationStats, TickContext, TickOutcome, VisualHandle,
};
pub use shared::CameraView;

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Вставляет config-derived resources: fixed timestep, IsoProjection, CameraView.
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.config.tick_hz))
            .insert_resource(self.config.projection())
            .insert_resource(self.config.camera_view())
            .insert_resource(self.config.clone())
            .add_plugins((CombatPlugin, ProjectilePlugin))
            .add_systems(FixedPostUpdate, iso::update_target_placements);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную на один fixed timestep за `app.update()`,
/// поэтому прогон не зависит от wall clock. Первый update — нулевой delta.
pub fn create_headless_app(seed: u64, config: SimulationConfig) -> App {
    let mut app = App::new();
    logger::init_logger();

    let timestep = Duration::from_secs_f64(config.timestep_secs());

    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(timestep))
        .add_plugins(SimulationPlugin { config });

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

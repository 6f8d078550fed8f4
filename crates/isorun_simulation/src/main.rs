//! Headless симуляция ISORUN
//!
//! Спавнит кольцо врагов + ящики, стреляет залпами из центра и печатает
//! статистику. Без рендера — для проверки детерминизма и tuning'а.

use bevy::prelude::*;
use isorun_simulation::{
    create_headless_app, DeterministicRng, Enemy, EnemyVolume, FireProjectile, Health, Prop,
    PropVolume, SimulationConfig, SimulationStats,
};
use rand::Rng;

const TICKS: usize = 1200;
const VOLLEY_EVERY: usize = 20;
const ENEMY_COUNT: usize = 12;

fn main() {
    let seed = 42;
    println!("Starting ISORUN headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed, SimulationConfig::default());
    spawn_arena(app.world_mut());

    for tick in 0..TICKS {
        if tick % VOLLEY_EVERY == 0 {
            fire_volley(app.world_mut());
        }

        app.update();

        if tick % 100 == 0 {
            let stats = app.world().resource::<SimulationStats>();
            println!(
                "Tick {}: fired={} hits={} props={} ground={} culled={} kills={}",
                tick,
                stats.shots_fired,
                stats.enemy_hits,
                stats.prop_hits,
                stats.ground_impacts,
                stats.culled,
                stats.kills
            );
        }
    }

    let stats = app.world().resource::<SimulationStats>().clone();
    println!("Simulation complete! {:?}", stats);
}

/// Ring of enemies (часть летающих) + crates между центром и кольцом
fn spawn_arena(world: &mut World) {
    let mut placements = Vec::new();
    {
        let mut rng = world.resource_mut::<DeterministicRng>();
        for i in 0..ENEMY_COUNT {
            let angle = i as f32 / ENEMY_COUNT as f32 * std::f32::consts::TAU;
            let distance = rng.rng.gen_range(180.0..260.0);
            let airborne = rng.rng.gen_bool(0.25);
            placements.push((angle, distance, airborne));
        }
    }

    for (angle, distance, airborne) in placements {
        let position = Vec2::from_angle(angle) * distance;
        let base_z = if airborne { 50.0 } else { 0.0 };

        world.spawn((
            Enemy::new(EnemyVolume::new(position, base_z, 40.0, 12.0)),
            Health::new(30),
        ));
    }

    for i in 0..4 {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2 + 0.4;
        let position = Vec2::from_angle(angle) * 110.0;
        world.spawn(Prop::new(PropVolume::new(position, 24.0, 16.0, 20.0)));
    }
}

/// Volley: 8 выстрелов веером, половина по дуге
fn fire_volley(world: &mut World) {
    let mut shots = Vec::new();
    {
        let mut rng = world.resource_mut::<DeterministicRng>();
        let base_angle: f32 = rng.rng.gen_range(0.0..std::f32::consts::TAU);

        for i in 0..8 {
            let angle = base_angle + i as f32 * 0.12;
            let origin = Vec3::new(0.0, 0.0, 16.0);

            let shot = if i % 2 == 0 {
                FireProjectile::flat(origin, angle)
            } else {
                FireProjectile::arced(origin, angle, rng.rng.gen_range(80.0..220.0))
            };
            shots.push(FireProjectile {
                piercing: rng.rng.gen_bool(0.1),
                ..shot
            });
        }
    }

    for shot in shots {
        world.send_event(shot);
    }
}

//! Projectile integration test
//!
//! Headless App + SimulationPlugin, время двигается на 1 fixed tick за update.
//!
//! Проверяем:
//! - Flat shot попадает во врага и убивает его
//! - Height gating: высокий выстрел пролетает над врагом / пропом
//! - Piercing: один урон на врага за выстрел
//! - Arc с gravity заканчивается ground impact
//! - Visual handle освобождается ровно один раз на выстрел

use bevy::prelude::*;
use isorun_simulation::projectile::PiercedTargets;
use isorun_simulation::*;

const MAX_TICKS: usize = 400;

/// Helper: headless App с default config
fn create_app() -> App {
    create_headless_app(7, SimulationConfig::default())
}

fn count<T: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query::<&T>();
    query.iter(world).count()
}

fn stats(app: &App) -> SimulationStats {
    app.world().resource::<SimulationStats>().clone()
}

/// Гоняем тики пока живы projectiles (или лимит)
fn run_until_no_projectiles(app: &mut App) {
    // Первые update'ы: fire event ещё не обработан
    for _ in 0..3 {
        app.update();
    }
    for _ in 0..MAX_TICKS {
        if count::<Projectile>(app) == 0 {
            return;
        }
        app.update();
    }
    panic!("projectiles still alive after {} ticks", MAX_TICKS);
}

fn spawn_enemy(app: &mut App, position: Vec2, base_z: f32, hp: u32) -> Entity {
    app.world_mut()
        .spawn((
            Enemy::new(EnemyVolume::new(position, base_z, 40.0, 12.0)),
            Health::new(hp),
        ))
        .id()
}

/// Test: flat shot на высоте 16 убивает наземного врага
#[test]
fn test_flat_shot_kills_enemy() {
    let mut app = create_app();
    let enemy = spawn_enemy(&mut app, Vec2::new(100.0, 0.0), 0.0, 10);

    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 16.0), 0.0));
    run_until_no_projectiles(&mut app);
    app.update();

    let stats = stats(&app);
    assert_eq!(stats.shots_fired, 1);
    assert_eq!(stats.enemy_hits, 1);
    assert_eq!(stats.kills, 1);
    assert_eq!(stats.released, 1);
    assert_eq!(stats.culled, 0);

    assert!(app.world().get::<Enemy>(enemy).is_none(), "dead enemy not despawned");
    assert_eq!(count::<Enemy>(&mut app), 0);
}

/// Test: z = 60 над band [0, 40] — промах, выстрел уходит за экран
#[test]
fn test_high_shot_flies_over_enemy() {
    let mut app = create_app();
    let enemy = spawn_enemy(&mut app, Vec2::new(100.0, 0.0), 0.0, 10);

    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 60.0), 0.0));
    run_until_no_projectiles(&mut app);

    let stats = stats(&app);
    assert_eq!(stats.enemy_hits, 0);
    assert_eq!(stats.culled, 1);
    assert_eq!(stats.released, 1);
    assert_eq!(app.world().get::<Health>(enemy).map(|h| h.current), Some(10));
}

/// Test: низкий выстрел под летающим врагом (band [50, 90])
#[test]
fn test_low_shot_passes_under_flyer() {
    let mut app = create_app();
    let flyer = spawn_enemy(&mut app, Vec2::new(0.0, 100.0), 50.0, 10);

    app.world_mut().send_event(FireProjectile::flat(
        Vec3::new(0.0, 0.0, 16.0),
        std::f32::consts::FRAC_PI_2,
    ));
    run_until_no_projectiles(&mut app);

    assert_eq!(stats(&app).enemy_hits, 0);
    assert_eq!(app.world().get::<Health>(flyer).map(|h| h.current), Some(10));
}

/// Test: prop высотой 30 блокирует z = 10, но не z = 35
#[test]
fn test_prop_blocks_low_shots_only() {
    let mut app = create_app();
    app.world_mut()
        .spawn(Prop::new(PropVolume::new(Vec2::new(80.0, 0.0), 24.0, 16.0, 30.0)));

    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 10.0), 0.0));
    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 35.0), 0.0));
    run_until_no_projectiles(&mut app);

    let stats = stats(&app);
    assert_eq!(stats.shots_fired, 2);
    assert_eq!(stats.prop_hits, 1);
    assert_eq!(stats.culled, 1);
    assert_eq!(stats.released, 2);
}

/// Test: piercing shot бьёт двух врагов в линию, каждого один раз
#[test]
fn test_piercing_hits_each_enemy_once() {
    let mut app = create_app();
    let first = spawn_enemy(&mut app, Vec2::new(60.0, 0.0), 0.0, 100);
    let second = spawn_enemy(&mut app, Vec2::new(140.0, 0.0), 0.0, 100);

    app.world_mut().send_event(FireProjectile {
        damage: Some(15),
        piercing: true,
        ..FireProjectile::flat(Vec3::new(0.0, 0.0, 16.0), 0.0)
    });
    run_until_no_projectiles(&mut app);

    let stats = stats(&app);
    assert_eq!(stats.enemy_hits, 2);
    assert_eq!(stats.culled, 1);
    assert_eq!(app.world().get::<Health>(first).map(|h| h.current), Some(85));
    assert_eq!(app.world().get::<Health>(second).map(|h| h.current), Some(85));
}

/// Test: non-piercing shot останавливается на первом враге
#[test]
fn test_non_piercing_stops_at_first_enemy() {
    let mut app = create_app();
    let first = spawn_enemy(&mut app, Vec2::new(60.0, 0.0), 0.0, 100);
    let second = spawn_enemy(&mut app, Vec2::new(140.0, 0.0), 0.0, 100);

    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 16.0), 0.0));
    run_until_no_projectiles(&mut app);

    assert_eq!(stats(&app).enemy_hits, 1);
    assert_eq!(app.world().get::<Health>(first).map(|h| h.current), Some(90));
    assert_eq!(app.world().get::<Health>(second).map(|h| h.current), Some(100));
}

/// Test: arc с gravity падает на землю, z каждый живой tick > 0
#[test]
fn test_arc_lands_on_ground() {
    let mut app = create_app();

    app.world_mut()
        .send_event(FireProjectile::arced(Vec3::new(0.0, 0.0, 20.0), 0.5, 150.0));

    let mut saw_flight = false;
    for _ in 0..MAX_TICKS {
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<&Projectile>();
        for projectile in query.iter(world) {
            if projectile.is_alive() {
                saw_flight = true;
                assert!(projectile.position().z > 0.0);
            }
        }

        if saw_flight && count::<Projectile>(&mut app) == 0 {
            break;
        }
    }

    let stats = stats(&app);
    assert!(saw_flight);
    assert_eq!(stats.ground_impacts, 1);
    assert_eq!(stats.culled, 0);
    assert_eq!(stats.released, 1);
}

/// Test: |velocity_z| >= speed — выстрел отклонён, entity не создаётся
#[test]
fn test_invalid_launch_rejected() {
    let mut app = create_app();

    app.world_mut()
        .send_event(FireProjectile::arced(Vec3::new(0.0, 0.0, 20.0), 0.0, 500.0));
    for _ in 0..5 {
        app.update();
    }

    let stats = stats(&app);
    assert_eq!(stats.rejected_launches, 1);
    assert_eq!(stats.shots_fired, 0);
    assert_eq!(count::<Projectile>(&mut app), 0);
}

/// Test: placement компонент совпадает с проекцией текущей позиции
#[test]
fn test_screen_placement_follows_projectile() {
    let mut app = create_app();

    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 16.0), 1.0));

    let mut checked = 0;
    for _ in 0..20 {
        app.update();

        let projection = *app.world().resource::<IsoProjection>();
        let world = app.world_mut();
        let mut query = world.query::<(&Projectile, &ScreenPlacement, &PiercedTargets)>();
        for (projectile, placement, pierced) in query.iter(world) {
            assert_eq!(placement.screen, projection.project(projectile.position()));
            assert_eq!(*placement, projectile.placement(&projection));
            assert!(pierced.0.is_empty());
            checked += 1;
        }
    }

    assert!(checked > 0);
}

/// Test: сдвиг камеры culls выстрел, который был на экране
#[test]
fn test_camera_scroll_culls_projectile() {
    let mut app = create_app();

    app.world_mut()
        .send_event(FireProjectile::flat(Vec3::new(0.0, 0.0, 16.0), 0.0));
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(count::<Projectile>(&mut app), 1);

    app.world_mut()
        .resource_mut::<CameraView>()
        .scroll_to(Vec2::new(5000.0, 5000.0));
    app.update();
    app.update();

    assert_eq!(count::<Projectile>(&mut app), 0);
    assert_eq!(stats(&app).culled, 1);
}

/// Test: много выстрелов — каждый handle освобождён ровно один раз
#[test]
fn test_every_shot_released_once() {
    let mut app = create_app();
    spawn_enemy(&mut app, Vec2::new(80.0, 30.0), 0.0, 25);
    app.world_mut()
        .spawn(Prop::new(PropVolume::new(Vec2::new(-70.0, 0.0), 20.0, 20.0, 25.0)));

    for i in 0..16 {
        let angle = i as f32 * std::f32::consts::TAU / 16.0;
        let shot = if i % 3 == 0 {
            FireProjectile::arced(Vec3::new(0.0, 0.0, 16.0), angle, 120.0)
        } else {
            FireProjectile::flat(Vec3::new(0.0, 0.0, 16.0), angle)
        };
        app.world_mut().send_event(shot);
    }
    run_until_no_projectiles(&mut app);

    let stats = stats(&app);
    assert_eq!(stats.shots_fired, 16);
    assert_eq!(stats.released, 16);
    assert_eq!(
        stats.ground_impacts + stats.culled + stats.prop_hits + stats.enemy_hits,
        16
    );
}

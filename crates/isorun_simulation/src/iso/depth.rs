//! Draw-order depth. Never used by collision or physics.
//!
//! Depth = `base_depth + y` в f64: при layer base ~1e6 у f64 шаг ~5e-10,
//! так что соседние f32 `y` (|y| >= 0.01) дают разную depth.

/// Floor-level scenery (tiles, decals)
pub const FLOOR_DEPTH: f64 = 0.0;

/// Props and enemies share one layer, order inside it comes from `y`
pub const ACTOR_DEPTH: f64 = 1_000_000.0;

/// All projectiles draw above floor scenery
pub const PROJECTILE_DEPTH: f64 = 2_000_000.0;

/// Layers stay separated while |y| is below half the layer gap
pub const MAX_LAYERED_Y: f32 = 500_000.0;

/// Depth value for an entity at ground `y` in layer `base_depth`
///
/// Larger `y` (южнее на экране) → larger depth → рисуется позже (впереди).
pub fn calculate_depth(y: f32, base_depth: f64) -> f64 {
    base_depth + f64::from(y)
}

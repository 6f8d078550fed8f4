//! Screen placement — то, что видит presentation layer
//!
//! Renderer рисует маркер в `screen` и сортирует draw calls по `depth` ascending.

use bevy::prelude::*;

use super::depth::{calculate_depth, ACTOR_DEPTH};
use super::projection::IsoProjection;
use crate::combat::{Enemy, Prop};

/// Screen position + depth of an entity, recomputed every tick
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPlacement {
    pub screen: Vec2,
    pub depth: f64,
}

impl ScreenPlacement {
    /// Placement of a world position in layer `base_depth`
    pub fn of(position: Vec3, base_depth: f64, projection: &IsoProjection) -> Self {
        Self {
            screen: projection.project(position),
            depth: calculate_depth(position.y, base_depth),
        }
    }
}

/// Entities in paint order (back → front)
///
/// Stable sort: при равной depth сохраняется порядок входа.
pub fn draw_order(placements: impl IntoIterator<Item = (Entity, ScreenPlacement)>) -> Vec<Entity> {
    let mut sorted: Vec<_> = placements.into_iter().collect();
    sorted.sort_by(|(_, a), (_, b)| a.depth.total_cmp(&b.depth));
    sorted.into_iter().map(|(entity, _)| entity).collect()
}

/// Система: placement для врагов и пропов (actor layer)
///
/// Projectiles пишут свой placement сами в advance_projectiles.
pub fn update_target_placements(
    projection: Res<IsoProjection>,
    mut enemies: Query<(&Enemy, &mut ScreenPlacement), Without<Prop>>,
    mut props: Query<(&Prop, &mut ScreenPlacement), Without<Enemy>>,
) {
    for (enemy, mut placement) in enemies.iter_mut() {
        let volume = &enemy.volume;
        let position = volume.position.extend(volume.base_z);
        *placement = ScreenPlacement::of(position, ACTOR_DEPTH, &projection);
    }

    for (prop, mut placement) in props.iter_mut() {
        let position = prop.volume.position.extend(0.0);
        *placement = ScreenPlacement::of(position, ACTOR_DEPTH, &projection);
    }
}

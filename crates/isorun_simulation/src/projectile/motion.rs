//! Per-tick projectile motion
//!
//! Порядок внутри одного tick:
//! 1. delta ms → seconds
//! 2. gravity → velocity.z
//! 3. explicit Euler: position += velocity * dt
//! 4. z <= 0 → ground impact, tick заканчивается (без off-view проверки)
//! 5. пересчёт screen placement + depth
//! 6. placement вне CameraView (+ margin) → culled

use crate::iso::{IsoProjection, ScreenPlacement};
use crate::shared::CameraView;

use super::components::{Projectile, VisualHandle};

/// Why a projectile died during update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyCause {
    /// Reached the ground plane (z <= 0)
    HitGround,
    /// Left the camera view + margin
    Culled,
}

/// Result of one `Projectile::update` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Dead projectile or zero delta — ничего не изменилось
    Skipped,
    /// Still flying; placement для presentation layer
    Moved { placement: ScreenPlacement },
    /// Died this tick; `released` — handle, который надо вернуть presentation layer
    Destroyed {
        cause: DestroyCause,
        released: Option<VisualHandle>,
    },
}

impl TickOutcome {
    pub fn is_destroyed(&self) -> bool {
        matches!(self, TickOutcome::Destroyed { .. })
    }
}

/// Everything a tick reads besides the projectile itself
///
/// Camera передаётся явно — никакого доступа к scene/global state.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub view: &'a CameraView,
    pub projection: &'a IsoProjection,
    /// Downward acceleration (positive, units/s²)
    pub gravity: f32,
}

impl Projectile {
    /// Advance by `delta_ms` milliseconds
    pub fn update(&mut self, delta_ms: f32, ctx: &TickContext) -> TickOutcome {
        if !self.is_alive() || delta_ms <= 0.0 {
            return TickOutcome::Skipped;
        }

        let dt = delta_ms / 1000.0;

        if self.has_gravity {
            self.velocity.z -= ctx.gravity * dt;
        }

        self.position += self.velocity * dt;

        if self.position.z <= 0.0 {
            return TickOutcome::Destroyed {
                cause: DestroyCause::HitGround,
                released: self.destroy(),
            };
        }

        let placement = self.placement(ctx.projection);

        if !ctx.view.contains(placement.screen) {
            return TickOutcome::Destroyed {
                cause: DestroyCause::Culled,
                released: self.destroy(),
            };
        }

        TickOutcome::Moved { placement }
    }
}

//! Isometric coordinate domain — world ↔ screen
//!
//! Содержит:
//! - IsoProjection (2:1 dimetric projection, ground plane + height offset)
//! - world_distance_2d (planar distance, height ignored)
//! - calculate_depth + depth layer constants (draw order only)
//! - ScreenPlacement + draw_order (то, что читает presentation layer)
//!
//! World space: `x`, `y` — ground plane, `z` — height above ground.
//! Screen space: derived, never authoritative.

pub mod depth;
pub mod placement;
pub mod projection;


pub use depth::*;
pub use placement::*;
pub use projection::*;

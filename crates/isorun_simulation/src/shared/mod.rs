//! Shared domain — cross-cutting ресурсы
//!
//! Содержит:
//! - Camera (CameraView — screen rectangle + cull margin)

pub mod camera;

pub use camera::*;

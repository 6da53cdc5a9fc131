//! Geometry: curve smoothing + arc-length таблицы
//!
//! Чистые функции без ECS зависимостей (только bevy::math Vec3).

pub mod curve;
pub mod segments;

pub use curve::{curved_length, de_casteljau, inverse_lerp, smooth_curve, SmoothingFactor};
pub use segments::{SegmentHit, SegmentLengthTable};

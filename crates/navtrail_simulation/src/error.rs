//! Ошибки конфигурации trail/path drawers
//!
//! Runtime вырожденности (пустой путь, нулевая длина) — это данные, не ошибки.
//! Сюда попадает только то, что ломает контракт вызывающей стороны.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrailConfigError {
    #[error("smoothing factor {value} is out of range {min}..={max}")]
    SmoothingFactorOutOfRange { value: u32, min: u32, max: u32 },

    #[error("particles per second per meter must be finite and non-negative, got {0}")]
    InvalidParticleRate(f32),

    #[error("vertical offset must be finite, got {0}")]
    InvalidVerticalOffset(f32),

    #[error("failed to parse trail config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

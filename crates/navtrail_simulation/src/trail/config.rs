//! Конфигурация trail drawer / path line
//!
//! Простые скаляры. Валидация при создании drawer'а или загрузке из RON:
//! невалидный конфиг — ошибка вызывающей стороны, не runtime деградация.

use serde::{Deserialize, Serialize};

use crate::error::TrailConfigError;
use crate::geometry::SmoothingFactor;

/// Параметры smoothed trail + particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Рисовать линию (false → line sink получает count 0, particles продолжают идти)
    pub draw_line: bool,

    /// Сдвиг trail по высоте (метры)
    pub vertical_offset: f32,

    /// Сглаживание линии (1 = без сглаживания)
    pub smoothing_factor: SmoothingFactor,

    /// Частиц в секунду на каждый метр пути
    pub particles_per_second_per_meter: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            draw_line: false,
            vertical_offset: 0.0,
            smoothing_factor: SmoothingFactor::NONE,
            particles_per_second_per_meter: 1.0,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), TrailConfigError> {
        validate_vertical_offset(self.vertical_offset)?;

        let rate = self.particles_per_second_per_meter;
        if !rate.is_finite() || rate < 0.0 {
            return Err(TrailConfigError::InvalidParticleRate(rate));
        }

        Ok(())
    }

    /// Загрузка из RON (`(draw_line: true, smoothing_factor: 3)`), отсутствующие поля — default
    pub fn from_ron(source: &str) -> Result<Self, TrailConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

/// Параметры простой path line (без сглаживания и частиц)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLineConfig {
    /// Сдвиг углов по высоте (метры); последняя точка — точная позиция target
    pub vertical_offset: f32,
}

impl PathLineConfig {
    pub fn validate(&self) -> Result<(), TrailConfigError> {
        validate_vertical_offset(self.vertical_offset)
    }

    pub fn from_ron(source: &str) -> Result<Self, TrailConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

fn validate_vertical_offset(offset: f32) -> Result<(), TrailConfigError> {
    if offset.is_finite() {
        Ok(())
    } else {
        Err(TrailConfigError::InvalidVerticalOffset(offset))
    }
}

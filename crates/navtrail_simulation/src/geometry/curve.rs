//! Curve smoothing: raw path → плотная выборка глобальной Bézier кривой
//!
//! Каждая выходная точка — полный De Casteljau по ВСЕМ контрольным точкам
//! (не локальный сплайн). Кривая проходит только через первую и последнюю точку,
//! промежуточные углы лишь "притягивают" её.
//!
//! Стоимость O(N·S·N) на кадр: N (число углов навигации) маленькое.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::TrailConfigError;

/// Множитель плотности выборки кривой (1 = без сглаживания)
///
/// Инвариант: MIN ≤ value ≤ MAX (проверяется при создании и при десериализации)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SmoothingFactor(u32);

impl SmoothingFactor {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 5;

    /// Без сглаживания: smoothed path == raw path
    pub const NONE: Self = Self(1);

    pub fn new(value: u32) -> Result<Self, TrailConfigError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TrailConfigError::SmoothingFactorOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1
    }
}

impl Default for SmoothingFactor {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<u32> for SmoothingFactor {
    type Error = TrailConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SmoothingFactor> for u32 {
    fn from(factor: SmoothingFactor) -> Self {
        factor.0
    }
}

/// Длина smoothed path для `point_count` контрольных точек
///
/// S == 1 → identity (N), иначе N*S - 1.
pub fn curved_length(point_count: usize, factor: SmoothingFactor) -> usize {
    if factor.is_identity() {
        return point_count;
    }
    (point_count * factor.get() as usize).saturating_sub(1)
}

/// Сглаживает raw path в выборку Bézier кривой
///
/// S == 1 возвращает тот же Vec без аллокации.
/// Первая и последняя точки результата побитово равны первой и последней входа.
pub fn smooth_curve(control_points: Vec<Vec3>, factor: SmoothingFactor) -> Vec<Vec3> {
    if factor.is_identity() {
        return control_points;
    }

    let sample_count = curved_length(control_points.len(), factor);
    let last_sample = sample_count.saturating_sub(1) as f32;

    let mut curved = Vec::with_capacity(sample_count);
    let mut scratch = Vec::with_capacity(control_points.len());

    for sample in 0..sample_count {
        let t = inverse_lerp(0.0, last_sample, sample as f32);
        curved.push(de_casteljau(&control_points, t, &mut scratch));
    }

    curved
}

/// Точка Bézier кривой с контрольными точками `points` при параметре `t`
///
/// `scratch` переиспользуется между вызовами (одна аллокация на кадр).
pub fn de_casteljau(points: &[Vec3], t: f32, scratch: &mut Vec<Vec3>) -> Vec3 {
    scratch.clear();
    scratch.extend_from_slice(points);

    for j in (1..scratch.len()).rev() {
        for i in 0..j {
            // Не Vec3::lerp: a + (b - a) * 1.0 не обязательно == b во float
            scratch[i] = scratch[i] * (1.0 - t) + scratch[i + 1] * t;
        }
    }

    scratch.first().copied().unwrap_or(Vec3::ZERO)
}

/// t ∈ [0, 1] такой что lerp(a, b, t) == value; при a == b → 0
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

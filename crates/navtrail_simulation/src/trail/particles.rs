//! Particle distributor: равномерная эмиссия по длине smoothed path
//!
//! Плотность стабильна в particles/meter/second независимо от frame rate:
//! count = ceil(rate * dt * length).

use bevy::prelude::*;
use rand::Rng;

use crate::geometry::SegmentLengthTable;
use crate::sinks::ParticleSink;

/// Итог эмиссии за кадр
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Emission {
    pub count: usize,
    pub total_length: f32,
}

/// Сколько частиц выпустить за кадр
///
/// Любое положительное произведение округляется вверх (минимум 1),
/// ноль/отрицательное/NaN → 0.
pub fn emission_count(particles_per_second_per_meter: f32, delta_secs: f32, total_length: f32) -> usize {
    let product = particles_per_second_per_meter * delta_secs * total_length;
    if !product.is_finite() || product <= 0.0 {
        return 0;
    }
    product.ceil() as usize
}

/// Выпускает частицы в случайных точках полилинии `path`
///
/// Каждая точка: u ~ U[0, total), поиск сегмента по таблице длин,
/// линейная интерполяция внутри найденного сегмента.
pub fn distribute_particles<R: Rng>(
    path: &[Vec3],
    particles_per_second_per_meter: f32,
    delta_secs: f32,
    sink: &mut dyn ParticleSink,
    rng: &mut R,
) -> Emission {
    let table = SegmentLengthTable::from_path(path);
    let total_length = table.total();
    let count = emission_count(particles_per_second_per_meter, delta_secs, total_length);

    let mut emitted = 0;
    for _ in 0..count {
        let distance = rng.gen::<f32>() * total_length;
        if let Some(position) = table.point_at(path, distance) {
            sink.emit_one(position);
            emitted += 1;
        }
    }

    Emission {
        count: emitted,
        total_length,
    }
}

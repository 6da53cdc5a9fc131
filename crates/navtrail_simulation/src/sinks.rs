//! Render sinks — контракты line renderer и particle system
//!
//! ECS не рендерит сам: пишет точки в TrailLine компонент и события
//! TrailParticleEmitted, rendering layer (host движок) их читает.

use bevy::prelude::*;

/// Line renderer sink
///
/// count == 0 означает "ничего не рисовать".
pub trait LineSink {
    fn set_point_count(&mut self, count: usize);
    fn set_positions(&mut self, positions: &[Vec3]);
}

/// Particle system sink (fire-and-forget, переполнение — забота sink'а)
pub trait ParticleSink {
    fn emit_one(&mut self, position: Vec3);
}

/// Точки линии trail/path для rendering layer
///
/// Пересобирается каждый кадр (reset-then-set), никогда не дописывается.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct TrailLine {
    positions: Vec<Vec3>,
}

impl TrailLine {
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl LineSink for TrailLine {
    fn set_point_count(&mut self, count: usize) {
        self.positions.resize(count, Vec3::ZERO);
    }

    /// Записывает не больше `point_count` позиций (лишние игнорируются)
    fn set_positions(&mut self, positions: &[Vec3]) {
        let count = self.positions.len().min(positions.len());
        self.positions[..count].copy_from_slice(&positions[..count]);
    }
}

/// Event: одна частица trail'а (ECS → rendering layer)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TrailParticleEmitted {
    /// Entity trail drawer'а (владелец particle system)
    pub emitter: Entity,
    /// World-space позиция частицы на smoothed path
    pub position: Vec3,
}

/// ParticleSink поверх EventWriter (внутри системы)
pub struct EventParticleSink<'a, 'w> {
    emitter: Entity,
    events: &'a mut EventWriter<'w, TrailParticleEmitted>,
}

impl<'a, 'w> EventParticleSink<'a, 'w> {
    pub fn new(emitter: Entity, events: &'a mut EventWriter<'w, TrailParticleEmitted>) -> Self {
        Self { emitter, events }
    }
}

impl ParticleSink for EventParticleSink<'_, '_> {
    fn emit_one(&mut self, position: Vec3) {
        self.events.write(TrailParticleEmitted {
            emitter: self.emitter,
            position,
        });
    }
}

/// Собирает позиции в Vec (headless/tests)
impl ParticleSink for Vec<Vec3> {
    fn emit_one(&mut self, position: Vec3) {
        self.push(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_line_reset_then_set() {
        let mut line = TrailLine::default();
        line.set_point_count(3);
        line.set_positions(&[Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(line.positions(), &[Vec3::X, Vec3::Y, Vec3::Z]);

        // Новый кадр: короче — старые точки не остаются
        line.set_point_count(0);
        line.set_point_count(2);
        line.set_positions(&[Vec3::ONE, Vec3::NEG_ONE]);
        assert_eq!(line.positions(), &[Vec3::ONE, Vec3::NEG_ONE]);
    }

    #[test]
    fn test_set_positions_respects_point_count() {
        let mut line = TrailLine::default();
        line.set_point_count(1);
        line.set_positions(&[Vec3::X, Vec3::Y]);
        assert_eq!(line.positions(), &[Vec3::X]);
    }

    #[test]
    fn test_zero_count_clears() {
        let mut line = TrailLine::default();
        line.set_point_count(4);
        line.set_point_count(0);
        assert!(line.is_empty());
    }
}

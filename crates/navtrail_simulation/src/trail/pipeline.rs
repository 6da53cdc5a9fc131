//! Per-frame trail pipeline
//!
//! Path query → raw path → smoothed path → {line sink, particle sink}.
//! Всё пересчитывается с нуля каждый кадр; между кадрами живёт только NavPath handle.

use bevy::prelude::*;
use rand::Rng;

use crate::error::TrailConfigError;
use crate::geometry::smooth_curve;
use crate::navigation::{PathAssembler, PathQuery, PathStatus, TargetAnchor};
use crate::sinks::{LineSink, ParticleSink};

use super::config::TrailConfig;
use super::particles::distribute_particles;

/// Минимум точек smoothed path для рендера и эмиссии (иначе кадр пропускается)
pub const MIN_SMOOTHED_POINTS: usize = 3;

/// Итог одного кадра (для логов/диагностики)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrailFrame {
    /// Smoothed path короче MIN_SMOOTHED_POINTS — sinks не трогались
    Skipped { points: usize, status: PathStatus },

    /// Линия обновлена (или очищена), частицы выпущены
    Drawn {
        points: usize,
        particles: usize,
        length: f32,
        status: PathStatus,
    },
}

impl TrailFrame {
    pub fn is_skipped(&self) -> bool {
        matches!(self, TrailFrame::Skipped { .. })
    }

    pub fn particles(&self) -> usize {
        match self {
            TrailFrame::Skipped { .. } => 0,
            TrailFrame::Drawn { particles, .. } => *particles,
        }
    }
}

/// Отправляет smoothed path в line sink (reset-then-set) или очищает его
pub fn render_trail(smoothed_path: &[Vec3], enabled: bool, line: &mut dyn LineSink) {
    line.set_point_count(0);
    if !enabled {
        return;
    }
    line.set_point_count(smoothed_path.len());
    line.set_positions(smoothed_path);
}

/// Trail pipeline с валидированным конфигом и собственным path handle
#[derive(Debug, Clone, Default)]
pub struct TrailPipeline {
    config: TrailConfig,
    assembler: PathAssembler,
}

impl TrailPipeline {
    pub fn new(config: TrailConfig) -> Result<Self, TrailConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            assembler: PathAssembler::new(),
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrailConfig) -> Result<(), TrailConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Smoothed path source → target для текущего кадра
    pub fn smoothed_path(&mut self, pathfinder: &dyn PathQuery, source: Vec3, target: Vec3) -> Vec<Vec3> {
        let raw_path = self.assembler.assemble(
            pathfinder,
            source,
            target,
            self.config.vertical_offset,
            TargetAnchor::Offset,
        );
        smooth_curve(raw_path, self.config.smoothing_factor)
    }

    /// Один кадр pipeline
    #[allow(clippy::too_many_arguments)]
    pub fn tick<R: Rng>(
        &mut self,
        source: Vec3,
        target: Vec3,
        delta_secs: f32,
        pathfinder: &dyn PathQuery,
        line: &mut dyn LineSink,
        particles: &mut dyn ParticleSink,
        rng: &mut R,
    ) -> TrailFrame {
        let smoothed_path = self.smoothed_path(pathfinder, source, target);
        let status = self.assembler.status();

        if smoothed_path.len() < MIN_SMOOTHED_POINTS {
            return TrailFrame::Skipped {
                points: smoothed_path.len(),
                status,
            };
        }

        render_trail(&smoothed_path, self.config.draw_line, line);

        let emission = distribute_particles(
            &smoothed_path,
            self.config.particles_per_second_per_meter,
            delta_secs,
            particles,
            rng,
        );

        TrailFrame::Drawn {
            points: smoothed_path.len(),
            particles: emission.count,
            length: emission.total_length,
            status,
        }
    }
}

//! Trail компоненты: TrailDrawer (smoothed trail + particles), PathLine (raw route)
//!
//! Target передаётся явно как Entity при создании (никаких глобальных поисков по тегу).
//! Source — сама entity с компонентом (её Transform).

use bevy::prelude::*;
use rand::Rng;

use crate::error::TrailConfigError;
use crate::navigation::{PathAssembler, PathQuery, TargetAnchor};
use crate::sinks::{LineSink, ParticleSink, TrailLine};

use super::config::{PathLineConfig, TrailConfig};
use super::pipeline::{render_trail, TrailFrame, TrailPipeline};

/// Smoothed trail от entity к target с частицами вдоль пути
///
/// Автоматически добавляет TrailLine (line sink) через Required Components.
#[derive(Component, Debug, Clone)]
#[require(TrailLine)]
pub struct TrailDrawer {
    /// Entity, к которой ведёт trail
    pub target: Entity,
    pipeline: TrailPipeline,
}

impl TrailDrawer {
    pub fn new(target: Entity, config: TrailConfig) -> Result<Self, TrailConfigError> {
        Ok(Self {
            target,
            pipeline: TrailPipeline::new(config)?,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        self.pipeline.config()
    }

    pub fn set_config(&mut self, config: TrailConfig) -> Result<(), TrailConfigError> {
        self.pipeline.set_config(config)
    }

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
        self.pipeline
            .tick(source, target, delta_secs, pathfinder, line, particles, rng)
    }
}

/// Простая линия маршрута: углы + точная позиция target
///
/// Без сглаживания, без частиц, без short-circuit (рисуется даже 1 точка).
#[derive(Component, Debug, Clone)]
#[require(TrailLine)]
pub struct PathLine {
    pub target: Entity,
    config: PathLineConfig,
    assembler: PathAssembler,
}

impl PathLine {
    pub fn new(target: Entity, config: PathLineConfig) -> Result<Self, TrailConfigError> {
        config.validate()?;
        Ok(Self {
            target,
            config,
            assembler: PathAssembler::new(),
        })
    }

    pub fn config(&self) -> &PathLineConfig {
        &self.config
    }

    /// Один кадр: возвращает число точек линии
    pub fn tick(&mut self, source: Vec3, target: Vec3, pathfinder: &dyn PathQuery, line: &mut dyn LineSink) -> usize {
        let raw_path = self.assembler.assemble(
            pathfinder,
            source,
            target,
            self.config.vertical_offset,
            TargetAnchor::Exact,
        );
        render_trail(&raw_path, true, line);
        raw_path.len()
    }
}

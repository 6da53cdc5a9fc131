//! NAVTRAIL Simulation Core
//!
//! Per-frame trail по кратчайшему walkable маршруту между source и target:
//! path query → raw path → Bézier smoothing → line sink + particle emission.
//!
//! Разделение ответственности:
//! - ECS = геометрия кадра (assemble, smooth, sample), конфиг, детерминистичный RNG
//! - Host движок = pathfinding (PathQuery), рендер линии (TrailLine), частицы (TrailParticleEmitted)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod error;
pub mod geometry;
pub mod logger;
pub mod navigation;
pub mod sinks;
pub mod trail;

// Re-export основных типов для удобства
pub use error::TrailConfigError;
pub use geometry::{smooth_curve, SegmentLengthTable, SmoothingFactor};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel, LogPrinter};
pub use navigation::{DirectPathfinder, NavPath, NavigationService, PathAssembler, PathQuery, PathStatus};
pub use sinks::{LineSink, ParticleSink, TrailLine, TrailParticleEmitted};
pub use trail::{PathLine, PathLineConfig, TrailConfig, TrailDrawer, TrailFrame, TrailPipeline, TrailPlugin};

/// Главный plugin (объединяет все подсистемы)
pub struct NavTrailPlugin;

impl Plugin for NavTrailPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TrailPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot всех TrailLine для сравнения детерминизма
///
/// Сортировка по Entity index, точки как есть.
pub fn line_snapshot(world: &mut World) -> Vec<(u32, Vec<Vec3>)> {
    let mut query = world.query::<(Entity, &TrailLine)>();
    let mut lines: Vec<_> = query
        .iter(world)
        .map(|(entity, line)| (entity.index(), line.positions().to_vec()))
        .collect();

    lines.sort_by_key(|(index, _)| *index);
    lines
}

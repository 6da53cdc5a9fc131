//! Trail module — smoothed path trail + ambient particles
//!
//! Pipeline на кадр:
//! 1. PathAssembler — path query + углы с vertical offset + live target
//! 2. smooth_curve — Bézier выборка (SmoothingFactor)
//! 3. short-circuit если < 3 точек
//! 4. render_trail → TrailLine (или очистка при draw_line = false)
//! 5. distribute_particles → TrailParticleEmitted события
//!
//! PathLine — упрощённый sibling: только линия по углам, без сглаживания и частиц.

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod particles;
pub mod pipeline;
pub mod systems;


// Re-export основных типов
pub use components::{PathLine, TrailDrawer};
pub use config::{PathLineConfig, TrailConfig};
pub use particles::{distribute_particles, emission_count, Emission};
pub use pipeline::{render_trail, TrailFrame, TrailPipeline, MIN_SMOOTHED_POINTS};
pub use systems::{update_path_lines, update_trail_drawers};

use crate::navigation::NavigationService;
use crate::sinks::TrailParticleEmitted;
use crate::DeterministicRng;

/// Trail Plugin
///
/// Регистрирует trail системы в Update (per-frame, не FixedUpdate:
/// плотность частиц считается от реального delta кадра).
///
/// Порядок выполнения:
/// 1. update_path_lines — raw route линии
/// 2. update_trail_drawers — smoothed trails + particles
///
/// NavigationService (DirectPathfinder) и DeterministicRng (seed 42) добавляются
/// только если host не вставил свои.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TrailParticleEmitted>()
            .init_resource::<NavigationService>();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_systems(
            Update,
            (update_path_lines, update_trail_drawers).chain(), // Последовательное выполнение для детерминизма
        );
    }
}

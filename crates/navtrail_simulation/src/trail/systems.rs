//! Trail systems (Update, раз в кадр)
//!
//! Позиции source/target опрашиваются из Transform каждый кадр.
//! Отсутствующий target → кадр пропускается для этого drawer'а.

use bevy::prelude::*;

use crate::navigation::NavigationService;
use crate::sinks::{EventParticleSink, TrailLine, TrailParticleEmitted};
use crate::DeterministicRng;

use super::components::{PathLine, TrailDrawer};
use super::pipeline::TrailFrame;

/// Система: smoothed trail + particles для всех TrailDrawer
pub fn update_trail_drawers(
    time: Res<Time>,
    navigation: Res<NavigationService>,
    mut rng: ResMut<DeterministicRng>,
    targets: Query<&Transform>,
    mut drawers: Query<(Entity, &Transform, &mut TrailDrawer, &mut TrailLine)>,
    mut particle_events: EventWriter<TrailParticleEmitted>,
) {
    let delta = time.delta_secs();
    let rng = &mut rng.rng;

    for (entity, transform, mut drawer, mut line) in drawers.iter_mut() {
        let Ok(target_transform) = targets.get(drawer.target) else {
            crate::logger::log(&format!(
                "Trail {:?}: target {:?} not found, frame skipped",
                entity, drawer.target
            ));
            continue;
        };

        let mut sink = EventParticleSink::new(entity, &mut particle_events);
        let frame = drawer.tick(
            transform.translation,
            target_transform.translation,
            delta,
            navigation.query(),
            &mut *line,
            &mut sink,
            rng,
        );

        if let TrailFrame::Skipped { points, status } = frame {
            crate::logger::log(&format!(
                "Trail {:?}: smoothed path too short ({} points, {:?}), frame skipped",
                entity, points, status
            ));
        }
    }
}

/// Система: raw route line для всех PathLine
pub fn update_path_lines(
    navigation: Res<NavigationService>,
    targets: Query<&Transform>,
    mut path_lines: Query<(Entity, &Transform, &mut PathLine, &mut TrailLine)>,
) {
    for (entity, transform, mut path_line, mut line) in path_lines.iter_mut() {
        let Ok(target_transform) = targets.get(path_line.target) else {
            crate::logger::log(&format!(
                "PathLine {:?}: target {:?} not found, frame skipped",
                entity, path_line.target
            ));
            continue;
        };

        path_line.tick(
            transform.translation,
            target_transform.translation,
            navigation.query(),
            &mut *line,
        );
    }
}

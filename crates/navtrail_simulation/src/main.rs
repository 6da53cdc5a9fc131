//! Headless симуляция NAVTRAIL
//!
//! Запускает Bevy App без рендера: target ходит по кругу, trail drawer
//! пересчитывает путь каждый кадр, считаем выпущенные частицы.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use navtrail_simulation::trail::update_trail_drawers;
use navtrail_simulation::{
    create_headless_app, init_logger, log_error, log_info, NavTrailPlugin, SmoothingFactor, TrailConfig,
    TrailConfigError, TrailDrawer, TrailLine, TrailParticleEmitted,
};

/// Маркер движущейся цели
#[derive(Component)]
struct Wanderer {
    radius: f32,
    angular_speed: f32,
}

#[derive(Resource, Default)]
struct ParticleCounter {
    total: usize,
}

fn move_wanderers(time: Res<Time>, mut query: Query<(&Wanderer, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (wanderer, mut transform) in query.iter_mut() {
        let angle = elapsed * wanderer.angular_speed;
        transform.translation = Vec3::new(angle.cos(), 0.0, angle.sin()) * wanderer.radius;
    }
}

fn count_particles(mut events: EventReader<TrailParticleEmitted>, mut counter: ResMut<ParticleCounter>) {
    counter.total += events.read().count();
}

fn main() {
    init_logger();
    if let Err(error) = run(42) {
        log_error(&format!("Simulation aborted: {}", error));
    }
}

fn run(seed: u64) -> Result<(), TrailConfigError> {
    log_info(&format!("Starting NAVTRAIL headless simulation (seed: {})", seed));

    let mut app = create_headless_app(seed);
    app.add_plugins(NavTrailPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(1.0 / 60.0)))
        .init_resource::<ParticleCounter>()
        .add_systems(
            Update,
            (
                move_wanderers.before(update_trail_drawers),
                count_particles.after(update_trail_drawers),
            ),
        );

    let target = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::new(12.0, 0.0, 0.0)),
            Wanderer {
                radius: 12.0,
                angular_speed: 0.5,
            },
        ))
        .id();

    let config = TrailConfig {
        draw_line: true,
        vertical_offset: 0.5,
        smoothing_factor: SmoothingFactor::new(3)?,
        particles_per_second_per_meter: 2.0,
    };
    let drawer = TrailDrawer::new(target, config)?;
    let source = app.world_mut().spawn((Transform::default(), drawer)).id();

    // Запускаем 600 кадров (10 sec при 60 FPS)
    for tick in 0..600 {
        app.update();

        if tick % 100 == 0 {
            let points = app
                .world()
                .get::<TrailLine>(source)
                .map(TrailLine::point_count)
                .unwrap_or(0);
            let particles = app.world().resource::<ParticleCounter>().total;
            log_info(&format!("Tick {}: {} trail points, {} particles emitted", tick, points, particles));
        }
    }

    log_info("Simulation complete!");
    Ok(())
}

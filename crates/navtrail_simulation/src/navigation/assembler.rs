//! Path assembler: углы навигации → raw path
//!
//! Углы могут быть stale/приблизительными около target (NavMesh snapping),
//! поэтому последняя точка всегда берётся из live позиции target.

use bevy::prelude::*;

use super::{NavPath, PathQuery, PathStatus};

/// Как привязывается последняя точка raw path к target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetAnchor {
    /// target + vertical offset (как и все углы) — trail
    #[default]
    Offset,
    /// Точная позиция target без offset — простая path line
    Exact,
}

/// Собирает raw path: углы со сдвигом по Y + финальная точка target
///
/// Длина результата всегда `corners.len() + 1`.
pub fn assemble_raw_path(
    corners: &[Vec3],
    target: Vec3,
    vertical_offset: f32,
    anchor: TargetAnchor,
) -> Vec<Vec3> {
    let offset = Vec3::Y * vertical_offset;

    let mut raw_path = Vec::with_capacity(corners.len() + 1);
    raw_path.extend(corners.iter().map(|corner| *corner + offset));
    raw_path.push(match anchor {
        TargetAnchor::Offset => target + offset,
        TargetAnchor::Exact => target,
    });

    raw_path
}

/// Path assembler с переиспользуемым path handle
///
/// Единственное состояние, живущее между кадрами — буфер NavPath.
#[derive(Debug, Clone, Default)]
pub struct PathAssembler {
    nav_path: NavPath,
}

impl PathAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query + сборка raw path для текущего кадра
    pub fn assemble(
        &mut self,
        pathfinder: &dyn PathQuery,
        source: Vec3,
        target: Vec3,
        vertical_offset: f32,
        anchor: TargetAnchor,
    ) -> Vec<Vec3> {
        pathfinder.calculate_path(source, target, &mut self.nav_path);
        assemble_raw_path(self.nav_path.corners(), target, vertical_offset, anchor)
    }

    /// Статус последнего query
    pub fn status(&self) -> PathStatus {
        self.nav_path.status()
    }

    pub fn nav_path(&self) -> &NavPath {
        &self.nav_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pathfinder с фиксированными углами (не зависит от start/end)
    struct FixedCorners(Vec<Vec3>);

    impl PathQuery for FixedCorners {
        fn calculate_path(&self, _start: Vec3, _end: Vec3, path: &mut NavPath) {
            path.clear();
            for corner in &self.0 {
                path.push_corner(*corner);
            }
            if !self.0.is_empty() {
                path.set_status(PathStatus::Partial);
            }
        }
    }

    #[test]
    fn test_offset_applies_to_corners_and_target() {
        let corners = [Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
        let target = Vec3::new(4.5, 0.0, 0.5);

        let raw = assemble_raw_path(&corners, target, 1.5, TargetAnchor::Offset);

        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0], Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(raw[1], Vec3::new(4.0, 1.5, 0.0));
        assert_eq!(raw[2], Vec3::new(4.5, 1.5, 0.5));
    }

    #[test]
    fn test_exact_anchor_keeps_target_height() {
        let raw = assemble_raw_path(&[Vec3::ZERO], Vec3::X, 2.0, TargetAnchor::Exact);
        assert_eq!(raw, vec![Vec3::Y * 2.0, Vec3::X]);
    }

    #[test]
    fn test_empty_corners_yield_target_only() {
        let raw = assemble_raw_path(&[], Vec3::new(1.0, 2.0, 3.0), 1.0, TargetAnchor::Offset);
        assert_eq!(raw, vec![Vec3::new(1.0, 3.0, 3.0)]);
    }

    #[test]
    fn test_last_point_follows_live_target() {
        // Углы stale (заканчиваются в старой позиции), последняя точка — live target
        let pathfinder = FixedCorners(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
        let mut assembler = PathAssembler::new();

        let target = Vec3::new(12.0, 0.0, 3.0);
        let raw = assembler.assemble(&pathfinder, Vec3::ZERO, target, 0.5, TargetAnchor::Offset);

        assert_eq!(raw.last(), Some(&(target + Vec3::Y * 0.5)));
        assert_eq!(assembler.status(), PathStatus::Partial);
        assert_eq!(assembler.nav_path().corners().len(), 2);
    }
}

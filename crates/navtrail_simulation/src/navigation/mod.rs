//! Navigation domain — path query adapter + path assembler
//!
//! # Architecture
//!
//! Pathfinding (NavMesh, walkable surfaces) — внешний сервис, здесь только контракт:
//! - **PathQuery**: start/end → углы кратчайшего маршрута в переиспользуемый NavPath
//! - **NavigationService**: Bevy Resource с активной реализацией PathQuery
//! - **assembler**: углы + vertical offset + live target → raw path
//!
//! Пустой маршрут — валидный ответ (source == target, unreachable), не ошибка.

use bevy::prelude::*;

pub mod assembler;

pub use assembler::{assemble_raw_path, PathAssembler, TargetAnchor};

/// Статус последнего path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStatus {
    /// Маршрут доходит до end
    Complete,
    /// Маршрут обрывается в ближайшей достижимой точке
    Partial,
    /// Маршрута нет (углов нет)
    #[default]
    Invalid,
}

/// Переиспользуемый path handle
///
/// Принадлежит вызывающей стороне, очищается и перезаполняется на каждом query.
/// Буфер углов не освобождается между кадрами.
#[derive(Debug, Clone, Default)]
pub struct NavPath {
    corners: Vec<Vec3>,
    status: PathStatus,
}

impl NavPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Углы маршрута (source → target)
    pub fn corners(&self) -> &[Vec3] {
        &self.corners
    }

    pub fn status(&self) -> PathStatus {
        self.status
    }

    /// Сбросить перед новым query (capacity сохраняется)
    pub fn clear(&mut self) {
        self.corners.clear();
        self.status = PathStatus::Invalid;
    }

    pub fn push_corner(&mut self, corner: Vec3) {
        self.corners.push(corner);
    }

    pub fn set_status(&mut self, status: PathStatus) {
        self.status = status;
    }
}

/// Контракт pathfinding сервиса
///
/// Синхронный. Реализация обязана очистить `path` и заполнить его заново.
pub trait PathQuery: Send + Sync + 'static {
    fn calculate_path(&self, start: Vec3, end: Vec3, path: &mut NavPath);
}

/// Прямой маршрут без препятствий: углы [start, end]
///
/// Default сервис для headless симуляции (настоящий NavMesh подключает host).
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPathfinder {
    /// Дальше этого расстояния target считается недостижимым
    pub max_distance: Option<f32>,
}

impl DirectPathfinder {
    pub fn with_max_distance(max_distance: f32) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }
}

impl PathQuery for DirectPathfinder {
    fn calculate_path(&self, start: Vec3, end: Vec3, path: &mut NavPath) {
        path.clear();

        if let Some(max_distance) = self.max_distance {
            if start.distance(end) > max_distance {
                return;
            }
        }

        path.push_corner(start);
        path.push_corner(end);
        path.set_status(PathStatus::Complete);
    }
}

/// Активный pathfinding сервис (Resource)
#[derive(Resource)]
pub struct NavigationService {
    query: Box<dyn PathQuery>,
}

impl NavigationService {
    pub fn new(query: impl PathQuery) -> Self {
        Self {
            query: Box::new(query),
        }
    }

    pub fn query(&self) -> &dyn PathQuery {
        self.query.as_ref()
    }
}

impl Default for NavigationService {
    fn default() -> Self {
        Self::new(DirectPathfinder::default())
    }
}

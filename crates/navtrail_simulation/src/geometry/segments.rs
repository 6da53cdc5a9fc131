//! Segment length table: arc-length параметризация полилинии
//!
//! Используется particle distributor'ом для равномерной выборки по длине пути.

use bevy::prelude::*;

/// Длины сегментов полилинии + суммарная длина
///
/// Инвариант: `lengths.len() == path.len() - 1`, `total == lengths.sum()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentLengthTable {
    lengths: Vec<f32>,
    total: f32,
}

/// Результат поиска сегмента по arc length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Индекс сегмента (path[index] → path[index + 1])
    pub index: usize,
    /// Локальный параметр внутри сегмента [0, 1]
    pub local_t: f32,
}

impl SegmentLengthTable {
    pub fn from_path(path: &[Vec3]) -> Self {
        let lengths: Vec<f32> = path
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .collect();
        let total = lengths.iter().sum();

        Self { lengths, total }
    }

    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Находит сегмент, содержащий точку на расстоянии `distance` от начала
    ///
    /// Walk накапливает длины пока сумма не превысит `distance`.
    /// Знаменатель local_t — длина НАЙДЕННОГО сегмента (найденный сегмент всегда
    /// ненулевой: сегмент нулевой длины не может "превысить" distance).
    /// `distance` на/за последней границей → последний сегмент, local_t = 1.
    pub fn locate(&self, distance: f32) -> Option<SegmentHit> {
        let last_index = self.lengths.len().checked_sub(1)?;
        let distance = distance.max(0.0);

        let mut sum_before = 0.0;
        for (index, &length) in self.lengths.iter().enumerate() {
            if sum_before + length > distance {
                return Some(SegmentHit {
                    index,
                    local_t: ((distance - sum_before) / length).clamp(0.0, 1.0),
                });
            }
            sum_before += length;
        }

        Some(SegmentHit {
            index: last_index,
            local_t: 1.0,
        })
    }

    /// Позиция на полилинии `path` на расстоянии `distance` от начала
    pub fn point_at(&self, path: &[Vec3], distance: f32) -> Option<Vec3> {
        let hit = self.locate(distance)?;
        let start = path.get(hit.index)?;
        let end = path.get(hit.index + 1)?;
        Some(start.lerp(*end, hit.local_t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_path() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 4.0),
        ]
    }

    #[test]
    fn test_lengths_and_total() {
        let table = SegmentLengthTable::from_path(&l_path());
        assert_eq!(table.lengths(), &[3.0, 4.0]);
        assert_eq!(table.total(), 7.0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_and_single_point() {
        assert!(SegmentLengthTable::from_path(&[]).is_empty());

        let single = SegmentLengthTable::from_path(&[Vec3::ONE]);
        assert!(single.is_empty());
        assert_eq!(single.total(), 0.0);
        assert_eq!(single.locate(0.0), None);
    }

    #[test]
    fn test_locate_uses_found_segment_length() {
        let table = SegmentLengthTable::from_path(&l_path());

        // 5.0 → второй сегмент, (5 - 3) / 4 = 0.5 (не / 3 от соседнего)
        let hit = table.locate(5.0).expect("segment");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.local_t, 0.5);

        let hit = table.locate(1.5).expect("segment");
        assert_eq!(hit.index, 0);
        assert_eq!(hit.local_t, 0.5);
    }

    #[test]
    fn test_locate_on_boundaries() {
        let table = SegmentLengthTable::from_path(&l_path());

        let start = table.locate(0.0).expect("segment");
        assert_eq!((start.index, start.local_t), (0, 0.0));

        // Ровно на границе сегментов → начало следующего
        let joint = table.locate(3.0).expect("segment");
        assert_eq!((joint.index, joint.local_t), (1, 0.0));

        // На/за концом → clamp к последнему сегменту
        let end = table.locate(7.0).expect("segment");
        assert_eq!((end.index, end.local_t), (1, 1.0));
        let past = table.locate(100.0).expect("segment");
        assert_eq!((past.index, past.local_t), (1, 1.0));
    }

    #[test]
    fn test_locate_skips_zero_length_segments() {
        let path = vec![
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        let table = SegmentLengthTable::from_path(&path);

        let hit = table.locate(0.0).expect("segment");
        assert_eq!(hit.index, 1);
        assert!(hit.local_t.is_finite());

        let point = table.point_at(&path, 1.0).expect("point");
        assert_eq!(point, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_point_at() {
        let path = l_path();
        let table = SegmentLengthTable::from_path(&path);

        assert_eq!(table.point_at(&path, 5.0), Some(Vec3::new(3.0, 0.0, 2.0)));
        assert_eq!(table.point_at(&path, 7.0), Some(Vec3::new(3.0, 0.0, 4.0)));
    }
}

use smallvec::SmallVec;

use crate::core::Point;

/// Finds the index of the point closest in time to `query`.
///
/// `points` must be sorted by time. The search is a binary search for the
/// insertion index followed by a comparison of the two neighbours around
/// it; on a tie the later point wins. Returns `None` only for an empty
/// slice or a non-finite query.
#[must_use]
pub fn nearest_point_index(points: &[Point], query: f64) -> Option<usize> {
    if points.is_empty() || !query.is_finite() {
        return None;
    }

    let insertion = points.partition_point(|point| point.time < query);
    let mut candidates: SmallVec<[usize; 2]> = SmallVec::new();
    if insertion > 0 {
        candidates.push(insertion - 1);
    }
    if insertion < points.len() {
        candidates.push(insertion);
    }

    match candidates.as_slice() {
        [only] => Some(*only),
        [before, after] => {
            let before_distance = query - points[*before].time;
            let after_distance = points[*after].time - query;
            if before_distance >= after_distance {
                Some(*after)
            } else {
                Some(*before)
            }
        }
        _ => None,
    }
}

/// Returns the closest point to `query`, or `None` when the series is empty.
#[must_use]
pub fn nearest_point(points: &[Point], query: f64) -> Option<Point> {
    nearest_point_index(points, query).map(|index| points[index])
}

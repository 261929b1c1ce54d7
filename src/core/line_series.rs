use serde::{Deserialize, Serialize};

use crate::core::{Point, TimeScale, ValueScale};

/// One cubic Bézier piece between two consecutive samples, in plot pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub x0: f64,
    pub y0: f64,
    pub c1x: f64,
    pub c1y: f64,
    pub c2x: f64,
    pub c2y: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Projected geometry for one contiguous run of defined samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectedRun {
    /// An isolated sample with undefined neighbours.
    Dot { x: f64, y: f64 },
    /// A smoothed curve through two or more samples.
    Curve { segments: Vec<CubicSegment> },
}

/// Splits a series into maximal runs of plottable points.
///
/// Undefined values end the current run, so no geometry ever spans a gap.
#[must_use]
pub fn defined_runs(points: &[Point]) -> Vec<&[Point]> {
    points
        .split(|point| !point.is_plottable())
        .filter(|run| !run.is_empty())
        .collect()
}

/// Projects a series into smoothed, gap-aware runs.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests consume the exact same geometry.
#[must_use]
pub fn project_series_runs(
    points: &[Point],
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> Vec<ProjectedRun> {
    defined_runs(points)
        .into_iter()
        .map(|run| {
            let mapped: Vec<(f64, f64)> = run
                .iter()
                .filter_map(|point| {
                    let value = point.value?;
                    Some((
                        time_scale.time_to_pixel(point.time),
                        value_scale.value_to_pixel(value),
                    ))
                })
                .collect();
            match mapped.as_slice() {
                [(x, y)] => ProjectedRun::Dot { x: *x, y: *y },
                _ => ProjectedRun::Curve {
                    segments: monotone_segments(&mapped),
                },
            }
        })
        .collect()
}

/// Monotone cubic interpolation along x (Steffen's method).
///
/// Tangents are limited so every segment stays between its endpoint values:
/// the curve never overshoots a local extremum. Input x must be ascending.
#[must_use]
pub fn monotone_segments(xy: &[(f64, f64)]) -> Vec<CubicSegment> {
    let n = xy.len();
    if n < 2 {
        return Vec::new();
    }

    let mut tangents = vec![0.0; n];
    if n == 2 {
        let slope = secant(xy[0], xy[1]);
        tangents[0] = slope;
        tangents[1] = slope;
    } else {
        for i in 1..n - 1 {
            tangents[i] = interior_tangent(xy[i - 1], xy[i], xy[i + 1]);
        }
        tangents[0] = endpoint_tangent(xy[0], xy[1], tangents[1]);
        tangents[n - 1] = endpoint_tangent(xy[n - 2], xy[n - 1], tangents[n - 2]);
    }

    xy.windows(2)
        .zip(tangents.windows(2))
        .map(|(pair, slopes)| {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let dx = (x1 - x0) / 3.0;
            CubicSegment {
                x0,
                y0,
                c1x: x0 + dx,
                c1y: y0 + dx * slopes[0],
                c2x: x1 - dx,
                c2y: y1 - dx * slopes[1],
                x1,
                y1,
            }
        })
        .collect()
}

fn secant(p0: (f64, f64), p1: (f64, f64)) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 { 0.0 } else { (p1.1 - p0.1) / h }
}

fn unit_sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = secant(p0, p1);
    let s1 = secant(p1, p2);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (unit_sign(s0) + unit_sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn endpoint_tangent(p0: (f64, f64), p1: (f64, f64), neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
    }
}

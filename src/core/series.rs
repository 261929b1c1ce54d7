use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{trace, warn};

use crate::core::primitives::parse_time;
use crate::render::Color;

/// One sample of a series. `value: None` marks a gap in the drawn path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: f64,
    pub value: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            time,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn gap(time: f64) -> Self {
        Self { time, value: None }
    }

    #[must_use]
    pub fn is_plottable(self) -> bool {
        self.value.is_some_and(f64::is_finite)
    }
}

/// Raw per-point payload entry: `{ "time": "YYYY-MM-DD", "value": number | null }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub time: String,
    #[serde(default)]
    pub value: Value,
}

/// How the value (y) domain is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    /// Domain follows the data extent with 5% padding.
    #[default]
    Linear,
    /// Fixed domain, used for oscillator-style series with reference bands.
    Bounded { min: f64, max: f64 },
}

impl ValueMode {
    /// The `[0, 100]` oscillator range.
    #[must_use]
    pub const fn bounded_percent() -> Self {
        Self::Bounded {
            min: 0.0,
            max: 100.0,
        }
    }

    #[must_use]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded { .. })
    }
}

/// Categorical fallback palette used when a series carries no usable color.
pub const SERIES_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

#[must_use]
pub fn palette_color(index: usize) -> Color {
    Color::from_hex(SERIES_PALETTE[index % SERIES_PALETTE.len()]).unwrap_or(Color::WHITE)
}

/// Named, colored, time-ordered sequence of points.
///
/// Points are sorted by time and unique per timestamp; the series is
/// immutable once built and replaced wholesale on new data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    color: Color,
    points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Color, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            color,
            points: canonicalize_points(points),
        }
    }

    /// Builds a series from raw JSON-like points, resolving the color token
    /// against the fallback palette.
    pub fn from_raw(
        name: impl Into<String>,
        color_token: Option<&str>,
        palette_index: usize,
        raw: &[RawPoint],
    ) -> Self {
        let color = resolve_color(color_token, palette_index);
        Self::new(name, color, normalize_points(raw))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn plottable_len(&self) -> usize {
        self.points.iter().filter(|point| point.is_plottable()).count()
    }

    /// Time extent over plottable points.
    #[must_use]
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        let mut plottable = self.points.iter().filter(|point| point.is_plottable());
        let first = plottable.next()?.time;
        let last = plottable.last().map_or(first, |point| point.time);
        Some((first, last))
    }
}

/// Everything one chart instance renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartInput {
    pub series: Vec<Series>,
    #[serde(default)]
    pub mode: ValueMode,
}

impl ChartInput {
    #[must_use]
    pub fn new(series: Vec<Series>, mode: ValueMode) -> Self {
        Self { series, mode }
    }

    /// Builds one series per value column sharing a date column.
    ///
    /// Each column is `(name, values, color token)`; values run through
    /// [`normalize_columns`], so missing entries are dropped.
    pub fn from_columns<S: AsRef<str>>(
        dates: &[S],
        columns: &[(&str, &[Option<f64>], Option<&str>)],
        mode: ValueMode,
    ) -> Self {
        let series = columns
            .iter()
            .enumerate()
            .map(|(index, (name, values, color))| {
                Series::new(
                    *name,
                    resolve_color(*color, index),
                    normalize_columns(dates, values),
                )
            })
            .collect();
        Self { series, mode }
    }

    #[must_use]
    pub fn has_plottable_points(&self) -> bool {
        self.series.iter().any(|series| series.plottable_len() > 0)
    }
}

/// Normalizes per-point payload entries.
///
/// Unparsable dates and non-numeric values drop the point; an explicit
/// `null` keeps it as a gap.
#[must_use]
pub fn normalize_points(raw: &[RawPoint]) -> Vec<Point> {
    let mut points = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for entry in raw {
        let Ok(time) = parse_time(&entry.time) else {
            dropped += 1;
            continue;
        };
        let value = match &entry.value {
            Value::Null => None,
            Value::Number(number) => match number.as_f64() {
                Some(value) if value.is_finite() => Some(value),
                _ => {
                    dropped += 1;
                    continue;
                }
            },
            _ => {
                dropped += 1;
                continue;
            }
        };
        points.push(Point { time, value });
    }

    if dropped > 0 {
        warn!(dropped, kept = points.len(), "dropped malformed series points");
    }
    points
}

/// Zips a date column with a value column, dropping every point whose
/// value is missing or non-finite.
///
/// Mismatched lengths never fail: dates without a value count as missing.
#[must_use]
pub fn normalize_columns<S: AsRef<str>>(dates: &[S], values: &[Option<f64>]) -> Vec<Point> {
    let points: Vec<Point> = dates
        .iter()
        .enumerate()
        .filter_map(|(index, date)| {
            let value = values.get(index).copied().flatten()?;
            if !value.is_finite() {
                return None;
            }
            let time = parse_time(date.as_ref()).ok()?;
            Some(Point::new(time, value))
        })
        .collect();
    trace!(
        dates = dates.len(),
        values = values.len(),
        kept = points.len(),
        "normalized column series"
    );
    points
}

fn resolve_color(token: Option<&str>, palette_index: usize) -> Color {
    match token.map(Color::from_hex) {
        Some(Ok(color)) => color,
        Some(Err(err)) => {
            warn!(error = %err, palette_index, "invalid series color, using palette");
            palette_color(palette_index)
        }
        None => palette_color(palette_index),
    }
}

/// Sorts by time and keeps the last entry of each duplicate timestamp.
fn canonicalize_points(mut points: Vec<Point>) -> Vec<Point> {
    points.retain(|point| point.time.is_finite());
    points.sort_by(|left, right| left.time.total_cmp(&right.time));

    let mut canonical: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        match canonical.last_mut() {
            Some(last) if last.time == point.time => *last = point,
            _ => canonical.push(point),
        }
    }
    canonical
}

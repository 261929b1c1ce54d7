use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LinearScale, Point, ValueMode};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for value-domain autoscaling in linear mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    pub top_padding_ratio: f64,
    pub bottom_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            top_padding_ratio: 0.05,
            bottom_padding_ratio: 0.05,
            min_span_absolute: 0.000_001,
        }
    }
}

impl ValueScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.top_padding_ratio.is_finite()
            || !self.bottom_padding_ratio.is_finite()
            || self.top_padding_ratio < 0.0
            || self.bottom_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "value scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Value axis mapped onto an inverted pixel range `[height, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, height: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new((value_min, value_max), (height, 0.0))?,
        })
    }

    /// Derives the domain from `mode`: padded data extent for linear mode,
    /// the fixed bounds for bounded mode.
    pub fn from_series_points<'a>(
        points: impl IntoIterator<Item = &'a Point>,
        mode: ValueMode,
        tuning: ValueScaleTuning,
        height: f64,
    ) -> ChartResult<Self> {
        match mode {
            ValueMode::Bounded { min, max } => {
                if !min.is_finite() || !max.is_finite() || min >= max {
                    return Err(ChartError::InvalidData(
                        "bounded value mode requires finite min < max".to_owned(),
                    ));
                }
                Self::new(min, max, height)
            }
            ValueMode::Linear => {
                let (min, max) = value_extent(points).ok_or(ChartError::InsufficientData)?;
                let (start, end) = padded_domain(min, max, tuning.validate()?);
                Self::new(start, end, height)
            }
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.linear.range().0
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.apply(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }
}

fn value_extent<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<(f64, f64)> {
    let values: Vec<OrderedFloat<f64>> = points
        .into_iter()
        .filter_map(|point| point.value)
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .collect();
    let min = values.iter().min()?.0;
    let max = values.iter().max()?.0;
    Some((min, max))
}

/// Pads the extent by magnitude so extrema stay off the plot edge, then
/// widens degenerate domains to `min_span_absolute`.
///
/// This intentionally departs from plain `min * 0.95` / `max * 1.05`
/// multipliers: for negative values those would shrink the domain and clip
/// the extrema, so `(-10, -5)` pads to `(-10.5, -4.75)`, not `(-9.5, -5.25)`.
fn padded_domain(min: f64, max: f64, tuning: ValueScaleTuning) -> (f64, f64) {
    let start = min - min.abs() * tuning.bottom_padding_ratio;
    let end = max + max.abs() * tuning.top_padding_ratio;
    if end - start >= tuning.min_span_absolute {
        return (start, end);
    }

    debug!(min, max, "widening degenerate value domain");
    let center = (start + end) / 2.0;
    let half = tuning.min_span_absolute / 2.0;
    (center - half, center + half)
}

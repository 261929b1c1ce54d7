use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, ViewTransform};
use crate::error::{ChartError, ChartResult};

/// Minimum time span (seconds) used when the data covers a single instant.
pub const MIN_TIME_SPAN_SECONDS: f64 = 86_400.0;

/// Time axis model: a base scale over the full data extent plus the
/// current zoom/pan transform.
///
/// The base domain is only rebuilt when data changes; zoom replaces the
/// transform and resize replaces the base range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    base: LinearScale,
    transform: ViewTransform,
}

impl TimeScale {
    /// Creates a scale mapping `[time_start, time_end]` onto `[0, width]`.
    pub fn new(time_start: f64, time_end: f64, width: f64) -> ChartResult<Self> {
        let (start, end) = normalize_range(time_start, time_end, MIN_TIME_SPAN_SECONDS)?;
        Ok(Self {
            base: LinearScale::new((start, end), (0.0, width))?,
            transform: ViewTransform::identity(),
        })
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        self.base.domain()
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.base.range().1
    }

    #[must_use]
    pub fn transform(self) -> ViewTransform {
        self.transform
    }

    /// Returns the scale rescaled by `transform` (the base is untouched).
    #[must_use]
    pub fn rescaled(self, transform: ViewTransform) -> Self {
        Self {
            base: self.base,
            transform,
        }
    }

    /// Rebuilds the pixel range for a new width and drops any zoom.
    pub fn with_width(self, width: f64) -> ChartResult<Self> {
        Ok(Self {
            base: self.base.with_range((0.0, width))?,
            transform: ViewTransform::identity(),
        })
    }

    /// Time window currently mapped onto `[0, width]`.
    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.pixel_to_time(0.0), self.pixel_to_time(self.width()))
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.transform.apply_x(self.base.apply(time))
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.base.invert(self.transform.invert_x(pixel))
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "time range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}

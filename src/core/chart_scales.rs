use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartInput, PlotArea, TimeScale, ValueScale, ValueScaleTuning, ViewTransform};
use crate::error::{ChartError, ChartResult};

/// The scale pair one chart instance renders with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub time: TimeScale,
    pub value: ValueScale,
}

impl ChartScales {
    /// Builds both scales from the union of all series extents.
    ///
    /// Returns [`ChartError::InsufficientData`] when no series has a
    /// plottable point.
    pub fn build(
        input: &ChartInput,
        plot: PlotArea,
        tuning: ValueScaleTuning,
    ) -> ChartResult<Self> {
        let (time_start, time_end) = input
            .series
            .iter()
            .filter_map(|series| series.time_extent())
            .reduce(|left, right| (left.0.min(right.0), left.1.max(right.1)))
            .ok_or(ChartError::InsufficientData)?;

        let time = TimeScale::new(time_start, time_end, plot.inner_width)?;
        let value = ValueScale::from_series_points(
            input.series.iter().flat_map(|series| series.points()),
            input.mode,
            tuning,
            plot.inner_height,
        )?;

        debug!(
            series = input.series.len(),
            time_start,
            time_end,
            value_domain = ?value.domain(),
            "built chart scales"
        );
        Ok(Self { time, value })
    }

    /// Rebuilds the x range for a new plot width; the domain is kept and the
    /// zoom transform resets to identity.
    pub fn with_plot_width(self, inner_width: f64) -> ChartResult<Self> {
        Ok(Self {
            time: self.time.with_width(inner_width)?,
            value: self.value,
        })
    }

    #[must_use]
    pub fn with_transform(self, transform: ViewTransform) -> Self {
        Self {
            time: self.time.rescaled(transform),
            value: self.value,
        }
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ValueMode, ViewTransform, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairState, HoverState, TooltipState};
use crate::render::Renderer;

use super::{ChartEngine, EngineStats};

/// Per-series summary kept in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub points: usize,
    pub plottable_points: usize,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub mode: ValueMode,
    pub placeholder: bool,
    pub time_full_range: Option<(f64, f64)>,
    pub time_visible_range: Option<(f64, f64)>,
    pub value_domain: Option<(f64, f64)>,
    pub transform: ViewTransform,
    pub hover: HoverState,
    pub crosshair: CrosshairState,
    pub tooltip: TooltipState,
    pub series: IndexMap<String, SeriesSnapshot>,
    pub stats: EngineStats,
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let series = self
            .series()
            .iter()
            .map(|series| {
                (
                    series.name().to_owned(),
                    SeriesSnapshot {
                        points: series.points().len(),
                        plottable_points: series.plottable_len(),
                    },
                )
            })
            .collect();

        EngineSnapshot {
            viewport: self.config.viewport,
            plot_area: self.plot,
            mode: self.value_mode(),
            placeholder: self.is_placeholder(),
            time_full_range: self.scales.map(|scales| scales.time.full_range()),
            time_visible_range: self.scales.map(|scales| scales.time.visible_range()),
            value_domain: self.scales.map(|scales| scales.value.domain()),
            transform: self.view_transform(),
            hover: self.hover_state(),
            crosshair: self.crosshair_state(),
            tooltip: self.tooltip().clone(),
            series,
            stats: self.stats,
        }
    }
}

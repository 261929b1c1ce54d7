use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TICK_COUNT, Margins, PlotArea, ValueScaleTuning, Viewport, ZoomLimits};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::RenderStyle;

pub const DEFAULT_CHART_WIDTH_PX: u32 = 800;
pub const DEFAULT_CHART_HEIGHT_PX: u32 = 400;

/// Fixed horizontal threshold drawn in bounded mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBand {
    pub value: f64,
    pub color: Color,
}

impl ReferenceBand {
    #[must_use]
    pub fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }

    pub const OVERSOLD_COLOR: Color = Color::rgb8(0xe1, 0x57, 0x59);
    pub const OVERBOUGHT_COLOR: Color = Color::rgb8(0x59, 0xa1, 0x4f);

    /// Oversold (30) and overbought (70) thresholds.
    #[must_use]
    pub fn oscillator_defaults() -> Vec<Self> {
        vec![
            Self::new(30.0, Self::OVERSOLD_COLOR),
            Self::new(70.0, Self::OVERBOUGHT_COLOR),
        ]
    }

    #[must_use]
    pub fn label(&self) -> String {
        if self.value.fract() == 0.0 {
            format!("{:.0}", self.value)
        } else {
            format!("{}", self.value)
        }
    }
}

/// Crosshair/tooltip presentation switches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairOptions {
    /// Draw a horizontal guide at the pointer y in addition to the vertical one.
    pub horizontal_line: bool,
    /// Draw a dot and label at each series' closest sample.
    pub tooltip_markers: bool,
    /// Draw the query date next to the vertical guide.
    pub tooltip_header: bool,
}

impl Default for CrosshairOptions {
    fn default() -> Self {
        Self {
            horizontal_line: true,
            tooltip_markers: true,
            tooltip_header: true,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can load chart setup
/// from JSON without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub value_scale_tuning: ValueScaleTuning,
    #[serde(default)]
    pub zoom_limits: ZoomLimits,
    #[serde(default = "ReferenceBand::oscillator_defaults")]
    pub reference_bands: Vec<ReferenceBand>,
    #[serde(default = "default_true")]
    pub show_reference_bands: bool,
    #[serde(default)]
    pub crosshair: CrosshairOptions,
    #[serde(default)]
    pub render_style: RenderStyle,
    #[serde(default = "default_placeholder_text")]
    pub placeholder_text: String,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            tick_count: default_tick_count(),
            value_scale_tuning: ValueScaleTuning::default(),
            zoom_limits: ZoomLimits::default(),
            reference_bands: ReferenceBand::oscillator_defaults(),
            show_reference_bands: true,
            crosshair: CrosshairOptions::default(),
            render_style: RenderStyle::default(),
            placeholder_text: default_placeholder_text(),
        }
    }

    /// Surface of `width` pixels at the default height.
    #[must_use]
    pub fn with_width(width: u32) -> Self {
        Self::new(Viewport::new(width, DEFAULT_CHART_HEIGHT_PX))
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_reference_bands(mut self, reference_bands: Vec<ReferenceBand>) -> Self {
        self.reference_bands = reference_bands;
        self
    }

    #[must_use]
    pub fn with_crosshair(mut self, crosshair: CrosshairOptions) -> Self {
        self.crosshair = crosshair;
        self
    }

    #[must_use]
    pub fn with_placeholder_text(mut self, placeholder_text: impl Into<String>) -> Self {
        self.placeholder_text = placeholder_text.into();
        self
    }

    /// Validates every field and returns the resulting plot rectangle.
    pub fn validate(&self) -> ChartResult<PlotArea> {
        let plot = PlotArea::from_viewport(self.viewport, self.margins)?;
        if self.tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        self.value_scale_tuning.validate()?;
        self.zoom_limits.validate()?;
        self.render_style.validate()?;
        for band in &self.reference_bands {
            if !band.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "reference band value must be finite".to_owned(),
                ));
            }
            band.color.validate()?;
        }
        if self.placeholder_text.is_empty() {
            return Err(ChartError::InvalidData(
                "placeholder text must not be empty".to_owned(),
            ));
        }
        Ok(plot)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(DEFAULT_CHART_WIDTH_PX, DEFAULT_CHART_HEIGHT_PX)
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_true() -> bool {
    true
}

fn default_placeholder_text() -> String {
    "No data available".to_owned()
}

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants for every primitive the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub background_color: Color,
    pub axis_line_color: Color,
    pub grid_line_color: Color,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub axis_tick_length_px: f64,
    pub series_line_width: f64,
    pub isolated_point_radius_px: f64,
    pub crosshair_line_color: Color,
    pub crosshair_line_width: f64,
    pub tooltip_dot_radius_px: f64,
    pub tooltip_dot_stroke_color: Color,
    pub tooltip_dot_stroke_width: f64,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub reference_band_line_width: f64,
    pub reference_band_dash_px: f64,
    pub reference_band_font_size_px: f64,
    pub placeholder_text_color: Color,
    pub placeholder_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let axis = Color::rgb(0x44 as f64 / 255.0, 0x44 as f64 / 255.0, 0x44 as f64 / 255.0);
        let label = Color::rgb(0xcc as f64 / 255.0, 0xcc as f64 / 255.0, 0xcc as f64 / 255.0);
        Self {
            background_color: Color::rgb(
                0x11 as f64 / 255.0,
                0x11 as f64 / 255.0,
                0x11 as f64 / 255.0,
            ),
            axis_line_color: axis,
            grid_line_color: axis.with_alpha(0.35),
            axis_label_color: label,
            axis_label_font_size_px: 11.0,
            axis_tick_length_px: 6.0,
            series_line_width: 2.0,
            isolated_point_radius_px: 2.5,
            crosshair_line_color: Color::rgb(
                0xaa as f64 / 255.0,
                0xaa as f64 / 255.0,
                0xaa as f64 / 255.0,
            ),
            crosshair_line_width: 1.0,
            tooltip_dot_radius_px: 4.0,
            tooltip_dot_stroke_color: Color::WHITE,
            tooltip_dot_stroke_width: 1.5,
            tooltip_text_color: Color::WHITE,
            tooltip_font_size_px: 12.0,
            reference_band_line_width: 1.0,
            reference_band_dash_px: 4.0,
            reference_band_font_size_px: 10.0,
            placeholder_text_color: label,
            placeholder_font_size_px: 14.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.background_color,
            self.axis_line_color,
            self.grid_line_color,
            self.axis_label_color,
            self.crosshair_line_color,
            self.tooltip_dot_stroke_color,
            self.tooltip_text_color,
            self.placeholder_text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("series_line_width", self.series_line_width),
            ("isolated_point_radius_px", self.isolated_point_radius_px),
            ("crosshair_line_width", self.crosshair_line_width),
            ("tooltip_dot_radius_px", self.tooltip_dot_radius_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
            ("reference_band_line_width", self.reference_band_line_width),
            ("reference_band_dash_px", self.reference_band_dash_px),
            ("reference_band_font_size_px", self.reference_band_font_size_px),
            ("placeholder_font_size_px", self.placeholder_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("axis_tick_length_px", self.axis_tick_length_px),
            ("tooltip_dot_stroke_width", self.tooltip_dot_stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }
}

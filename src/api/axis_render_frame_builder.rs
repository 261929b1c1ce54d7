use serde::{Deserialize, Serialize};

use crate::core::{format_time_tick, time_ticks, value_ticks};
use crate::render::{LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartEngine;

const AXIS_LABEL_PADDING_PX: f64 = 3.0;
const AXIS_EDGE_TOLERANCE_PX: f64 = 0.5;

/// One generated axis tick: domain value, surface position and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position_px: f64,
    pub label: String,
}

impl<R: Renderer> ChartEngine<R> {
    /// Ticks for the bottom axis, generated from the current (post-zoom)
    /// visible window. Positions are surface x.
    #[must_use]
    pub fn time_axis_ticks(&self) -> Vec<AxisTick> {
        let Some(scales) = self.scales else {
            return Vec::new();
        };
        let (start, end) = scales.time.visible_range();
        time_ticks(start, end, self.config.tick_count)
            .into_iter()
            .filter_map(|time| {
                let x = self.plot.left + scales.time.time_to_pixel(time);
                let inside = x >= self.plot.left - AXIS_EDGE_TOLERANCE_PX
                    && x <= self.plot.right() + AXIS_EDGE_TOLERANCE_PX;
                inside.then(|| AxisTick {
                    value: time,
                    position_px: x,
                    label: format_time_tick(time),
                })
            })
            .collect()
    }

    /// Ticks for the left axis. Positions are surface y.
    #[must_use]
    pub fn value_axis_ticks(&self) -> Vec<AxisTick> {
        let Some(scales) = self.scales else {
            return Vec::new();
        };
        let (min, max) = scales.value.domain();
        let ticks = value_ticks(min, max, self.config.tick_count);
        let labels = ticks.labels();
        ticks
            .values
            .into_iter()
            .zip(labels)
            .map(|(value, label)| AxisTick {
                value,
                position_px: self.plot.top + scales.value.value_to_pixel(value),
                label,
            })
            .collect()
    }

    pub(super) fn append_axes(&self, frame: &mut RenderFrame) {
        let style = self.config.render_style;
        let plot = self.plot;
        let tick_length = style.axis_tick_length_px;

        for tick in self.time_axis_ticks() {
            let x = tick.position_px;
            frame.lines.push(LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom(),
                1.0,
                style.grid_line_color,
            ));
            frame.lines.push(LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.bottom() + tick_length,
                1.0,
                style.axis_line_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                x,
                plot.bottom()
                    + tick_length
                    + AXIS_LABEL_PADDING_PX
                    + style.axis_label_font_size_px / 2.0,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }

        for tick in self.value_axis_ticks() {
            let y = tick.position_px;
            frame.lines.push(LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                1.0,
                style.grid_line_color,
            ));
            frame.lines.push(LinePrimitive::new(
                plot.left - tick_length,
                y,
                plot.left,
                y,
                1.0,
                style.axis_line_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                plot.left - tick_length - AXIS_LABEL_PADDING_PX,
                y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ));
        }

        // Domain lines.
        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            1.0,
            style.axis_line_color,
        ));
        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.bottom(),
            1.0,
            style.axis_line_color,
        ));
    }
}

use crate::interaction::HoverState;
use crate::render::{
    CirclePrimitive, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartEngine;

const TOOLTIP_LABEL_OFFSET_PX: f64 = 8.0;
const TOOLTIP_HEADER_OFFSET_PX: f64 = 10.0;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn append_crosshair(&self, frame: &mut RenderFrame) {
        if self.interaction.hover() != HoverState::Hovering || self.is_placeholder() {
            return;
        }
        let crosshair = self.interaction.crosshair();
        if !crosshair.visible {
            return;
        }

        let style = self.config.render_style;
        let options = self.config.crosshair;
        let plot = self.plot;
        let (x, y) = plot.to_surface(crosshair.x, crosshair.y);

        frame.overlay_lines.push(LinePrimitive::new(
            x,
            plot.top,
            x,
            plot.bottom(),
            style.crosshair_line_width,
            style.crosshair_line_color,
        ));
        if options.horizontal_line {
            frame.overlay_lines.push(LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                style.crosshair_line_width,
                style.crosshair_line_color,
            ));
        }

        let tooltip = self.interaction.tooltip();
        if options.tooltip_markers {
            for entry in &tooltip.entries {
                let (dot_x, dot_y) = plot.to_surface(entry.x, entry.y);
                frame.circles.push(
                    CirclePrimitive::new(dot_x, dot_y, style.tooltip_dot_radius_px, entry.color)
                        .with_stroke(style.tooltip_dot_stroke_width, style.tooltip_dot_stroke_color),
                );
                frame.texts.push(TextPrimitive::new(
                    entry.label(),
                    dot_x + TOOLTIP_LABEL_OFFSET_PX,
                    dot_y,
                    style.tooltip_font_size_px,
                    style.tooltip_text_color,
                    TextHAlign::Left,
                ));
            }
        }

        if options.tooltip_header {
            frame.texts.push(TextPrimitive::new(
                tooltip.header(),
                x + TOOLTIP_HEADER_OFFSET_PX,
                plot.top + style.tooltip_font_size_px,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Left,
            ));
        }
    }
}

use crate::core::ChartScales;
use crate::render::{
    LinePrimitive, LineStrokeStyle, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::ChartEngine;

const BAND_LABEL_INSET_PX: f64 = 30.0;
const BAND_LABEL_LIFT_PX: f64 = 5.0;

impl<R: Renderer> ChartEngine<R> {
    /// `true` when threshold lines are drawn: bounded input and bands enabled.
    #[must_use]
    pub fn reference_bands_visible(&self) -> bool {
        self.config.show_reference_bands && self.value_mode().is_bounded() && !self.is_placeholder()
    }

    /// Dashed full-width line plus a small label per band. Depends only on
    /// the value scale, so zoom and pan never move it.
    pub(super) fn append_reference_bands(&self, frame: &mut RenderFrame, scales: ChartScales) {
        if !self.reference_bands_visible() {
            return;
        }
        let style = self.config.render_style;
        let (domain_min, domain_max) = scales.value.domain();

        for band in &self.config.reference_bands {
            if band.value < domain_min.min(domain_max) || band.value > domain_min.max(domain_max) {
                continue;
            }
            let y = self.plot.top + scales.value.value_to_pixel(band.value);
            frame.lines.push(
                LinePrimitive::new(
                    self.plot.left,
                    y,
                    self.plot.right(),
                    y,
                    style.reference_band_line_width,
                    band.color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed {
                    dash_px: style.reference_band_dash_px,
                }),
            );
            frame.texts.push(TextPrimitive::new(
                band.label(),
                self.plot.right() - BAND_LABEL_INSET_PX,
                y - BAND_LABEL_LIFT_PX - style.reference_band_font_size_px / 2.0,
                style.reference_band_font_size_px,
                band.color,
                TextHAlign::Left,
            ));
        }
    }
}

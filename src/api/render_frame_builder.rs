use tracing::trace;

use crate::error::ChartResult;
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the full scene for the current state.
    ///
    /// Layer order: background, gridlines and axes, reference bands, series
    /// (clipped to the plot), crosshair guides, tooltip markers, labels.
    /// Without plottable data only the background and placeholder text are
    /// emitted.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let style = self.config.render_style;
        let viewport = self.config.viewport;
        let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            style.background_color,
        ));

        let Some(scales) = self.scales else {
            frame.texts.push(TextPrimitive::new(
                self.config.placeholder_text.clone(),
                f64::from(viewport.width) / 2.0,
                f64::from(viewport.height) / 2.0,
                style.placeholder_font_size_px,
                style.placeholder_text_color,
                TextHAlign::Center,
            ));
            trace!("built placeholder frame");
            frame.validate()?;
            return Ok(frame);
        };

        self.append_axes(&mut frame);
        self.append_reference_bands(&mut frame, scales);

        frame.clip_rect = Some(RectPrimitive::new(
            self.plot.left,
            self.plot.top,
            self.plot.inner_width,
            self.plot.inner_height,
            Color::rgba(0.0, 0.0, 0.0, 0.0),
        ));
        self.append_line_series(&mut frame, scales);
        self.append_crosshair(&mut frame);

        trace!(
            lines = frame.lines.len(),
            paths = frame.paths.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "built chart frame"
        );
        frame.validate()?;
        Ok(frame)
    }
}

use tracing::{debug, warn};

use crate::core::{PlotArea, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Applies a new container width, keeping the configured height.
    pub fn resize(&mut self, width: u32) -> ChartResult<()> {
        self.set_viewport(Viewport::new(width, self.config.viewport.height))
    }

    /// Re-derives the plot rectangle and the x range for `viewport`.
    ///
    /// The time domain is kept, the zoom transform resets to identity and
    /// any hover ends. A viewport too small for the margins is rejected and
    /// the previous state is kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let plot = PlotArea::from_viewport(viewport, self.config.margins).inspect_err(|err| {
            warn!(
                error = %err,
                width = viewport.width,
                height = viewport.height,
                "ignoring resize"
            );
        })?;

        let scales = match self.scales {
            Some(scales) if plot.inner_height == self.plot.inner_height => {
                Some(scales.with_plot_width(plot.inner_width)?)
            }
            _ => None,
        };

        let previous_width = self.config.viewport.width;
        self.config.viewport = viewport;
        self.plot = plot;
        self.scales = scales;
        if scales.is_none() {
            if let Some(input) = self.input.clone() {
                self.set_input(input)?;
            }
        }
        self.interaction.on_pointer_leave();

        debug!(
            previous_width,
            width = viewport.width,
            height = viewport.height,
            inner_width = plot.inner_width,
            "resized chart"
        );
        Ok(())
    }
}

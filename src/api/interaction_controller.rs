use tracing::{debug, trace};

use crate::core::{ChartScales, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairState, HoverState, TooltipState, lookup_tooltip};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn crosshair_state(&self) -> CrosshairState {
        self.interaction.crosshair()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    /// Current zoom/pan transform (identity without data).
    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        self.scales
            .map_or_else(ViewTransform::identity, |scales| scales.time.transform())
    }

    /// Pointer entered the surface at surface pixel `(x, y)`.
    pub fn pointer_enter(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        if !self.plot.contains(x, y) {
            trace!(x, y, "pointer entered outside plot area");
            return Ok(());
        }
        self.interaction.on_pointer_enter();
        self.pointer_move(x, y)
    }

    /// Pointer moved to surface pixel `(x, y)`.
    ///
    /// Leaving the plot rectangle is treated as a pointer leave.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        if !self.plot.contains(x, y) {
            if self.interaction.hover() == HoverState::Hovering {
                self.pointer_leave();
            }
            return Ok(());
        }

        let (plot_x, plot_y) = self.plot.to_plot(x, y);
        let tooltip = self.tooltip_at(plot_x);
        trace!(
            plot_x,
            plot_y,
            entries = tooltip.entries.len(),
            "pointer move"
        );
        self.interaction.on_pointer_move(plot_x, plot_y, tooltip);
        Ok(())
    }

    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        self.interaction.on_pointer_leave();
    }

    /// Multiplies the zoom factor around surface x `anchor_x`.
    ///
    /// Without data, or with the anchor outside the plot, this is a no-op.
    /// Factors outside the zoom limits (including zero and `+inf`) are
    /// clamped; only a NaN factor is rejected.
    pub fn zoom_by(&mut self, factor: f64, anchor_x: f64) -> ChartResult<()> {
        if factor.is_nan() {
            return Err(ChartError::InvalidData(
                "zoom factor must not be NaN".to_owned(),
            ));
        }
        let Some(scales) = self.scales else {
            trace!("zoom ignored without data");
            return Ok(());
        };

        let (plot_x, _) = self.plot.to_plot(anchor_x, self.plot.top);
        if !plot_x.is_finite() || !(0.0..=self.plot.inner_width).contains(&plot_x) {
            trace!(anchor_x, "zoom anchor outside plot area");
            return Ok(());
        }

        let next = scales.time.transform().zoom_at(
            plot_x,
            factor,
            self.plot.inner_width,
            self.config.zoom_limits,
        );
        self.apply_view_transform(scales, next);
        Ok(())
    }

    /// Pans by `delta_x` surface pixels; clamped so the window stays inside
    /// the data extent.
    pub fn pan_by(&mut self, delta_x: f64) -> ChartResult<()> {
        if !delta_x.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let Some(scales) = self.scales else {
            return Ok(());
        };
        let next =
            scales
                .time
                .transform()
                .pan_by(delta_x, self.plot.inner_width, self.config.zoom_limits);
        self.apply_view_transform(scales, next);
        Ok(())
    }

    /// Installs a host-provided transform after clamping it.
    pub fn set_view_transform(&mut self, transform: ViewTransform) {
        let Some(scales) = self.scales else {
            return;
        };
        let next = transform.clamped(self.plot.inner_width, self.config.zoom_limits);
        self.apply_view_transform(scales, next);
    }

    pub fn reset_zoom(&mut self) {
        self.set_view_transform(ViewTransform::identity());
    }

    /// Recomputes the tooltip for the current crosshair position after
    /// scales or data changed under a stationary pointer.
    pub(super) fn refresh_hover(&mut self) {
        if self.interaction.hover() != HoverState::Hovering {
            return;
        }
        let crosshair = self.interaction.crosshair();
        let tooltip = self.tooltip_at(crosshair.x);
        self.interaction
            .on_pointer_move(crosshair.x, crosshair.y, tooltip);
    }

    fn tooltip_at(&self, plot_x: f64) -> TooltipState {
        match self.scales {
            Some(scales) => lookup_tooltip(self.series(), scales, plot_x),
            None => TooltipState::default(),
        }
    }

    fn apply_view_transform(&mut self, scales: ChartScales, next: ViewTransform) {
        if next == scales.time.transform() {
            return;
        }
        debug!(
            scale = next.scale_factor,
            translate_x = next.translate_x,
            "updated view transform"
        );
        self.scales = Some(scales.with_transform(next));
        self.refresh_hover();
    }
}

fn validate_pointer(x: f64, y: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ChartInput, ChartScales, PlotArea, ViewTransform, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::ChartEngineConfig;

/// Counters exposed for regression tests; they make "zoom never rebuilds
/// scales" and "every event redraws" observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineStats {
    /// Full scale rebuilds from data (data change or resize with data).
    pub scale_builds: u64,
    /// Frames handed to the renderer.
    pub redraws: u64,
}

/// Host-side input consumed by [`ChartEngine::handle_event`].
///
/// Pointer coordinates are surface pixels; the engine maps them into the plot
/// rectangle itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    DataChanged(Option<ChartInput>),
    PointerEnter { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    /// Wheel/pinch zoom by `factor` anchored at surface x `anchor_x`.
    Zoom { factor: f64, anchor_x: f64 },
    /// Drag pan by `delta_x` surface pixels.
    Pan { delta_x: f64 },
    SetTransform(ViewTransform),
    ResetZoom,
    Resized { width: u32 },
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns one chart instance: normalized input, the scale pair,
/// the zoom transform (inside the time scale), interaction state and the
/// renderer. Every state change is followed by a full redraw.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) plot: PlotArea,
    pub(super) input: Option<ChartInput>,
    pub(super) scales: Option<ChartScales>,
    pub(super) interaction: InteractionState,
    pub(super) stats: EngineStats,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine in the placeholder state (no data).
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let plot = config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            inner_width = plot.inner_width,
            inner_height = plot.inner_height,
            "created chart engine"
        );
        Ok(Self {
            renderer,
            config,
            plot,
            input: None,
            scales: None,
            interaction: InteractionState::default(),
            stats: EngineStats::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    /// Current scale pair; `None` while the placeholder is shown.
    #[must_use]
    pub fn scales(&self) -> Option<ChartScales> {
        self.scales
    }

    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Applies one host event and redraws.
    ///
    /// Events are applied strictly in arrival order. If applying the event
    /// fails, state is left as it was and no frame is drawn.
    pub fn handle_event(&mut self, event: ChartEvent) -> ChartResult<()> {
        trace!(event = ?event, "handle chart event");
        match event {
            ChartEvent::DataChanged(Some(input)) => self.set_input(input)?,
            ChartEvent::DataChanged(None) => self.clear_input(),
            ChartEvent::PointerEnter { x, y } => self.pointer_enter(x, y)?,
            ChartEvent::PointerMove { x, y } => self.pointer_move(x, y)?,
            ChartEvent::PointerLeave => self.pointer_leave(),
            ChartEvent::Zoom { factor, anchor_x } => self.zoom_by(factor, anchor_x)?,
            ChartEvent::Pan { delta_x } => self.pan_by(delta_x)?,
            ChartEvent::SetTransform(transform) => self.set_view_transform(transform),
            ChartEvent::ResetZoom => self.reset_zoom(),
            ChartEvent::Resized { width } => self.resize(width)?,
        }
        self.render()
    }

    /// Builds a frame from the current state and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.stats.redraws += 1;
        trace!(redraws = self.stats.redraws, "rendered chart frame");
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.stats.redraws += 1;
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

use tracing::{debug, warn};

use crate::core::{ChartInput, ChartScales, Series, ValueMode};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn input(&self) -> Option<&ChartInput> {
        self.input.as_ref()
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.input
            .as_ref()
            .map_or(&[], |input| input.series.as_slice())
    }

    #[must_use]
    pub fn value_mode(&self) -> ValueMode {
        self.input.as_ref().map_or_else(ValueMode::default, |input| input.mode)
    }

    /// `true` while the engine draws the "no data" placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.scales.is_none()
    }

    /// Replaces the whole input and rebuilds both scales.
    ///
    /// Input without any plottable point is accepted and switches the engine
    /// to the placeholder. Other scale errors (for example an inverted
    /// bounded range) are returned and leave the previous state untouched.
    pub fn set_input(&mut self, input: ChartInput) -> ChartResult<()> {
        let scales = match ChartScales::build(&input, self.plot, self.config.value_scale_tuning) {
            Ok(scales) => Some(scales),
            Err(ChartError::InsufficientData) => {
                debug!(
                    series = input.series.len(),
                    "input has no plottable points; showing placeholder"
                );
                None
            }
            Err(err) => {
                warn!(error = %err, "rejecting chart input");
                return Err(err);
            }
        };

        if scales.is_some() {
            self.stats.scale_builds += 1;
        }
        debug!(
            series = input.series.len(),
            points = input
                .series
                .iter()
                .map(|series| series.points().len())
                .sum::<usize>(),
            mode = ?input.mode,
            "set chart input"
        );
        self.input = Some(input);
        self.scales = scales;
        self.refresh_hover();
        Ok(())
    }

    /// Drops all data and shows the placeholder.
    pub fn clear_input(&mut self) {
        debug!("cleared chart input");
        self.input = None;
        self.scales = None;
        self.refresh_hover();
    }
}

mod nearest;

pub use nearest::{nearest_point, nearest_point_index};

use serde::{Deserialize, Serialize};

use crate::core::{ChartScales, Series, format_day_label};
use crate::render::Color;

/// Pointer state of the hit-test surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HoverState {
    /// Pointer outside the plot; crosshair and tooltip hidden.
    #[default]
    Idle,
    /// Pointer inside the plot; crosshair and tooltip track it.
    Hovering,
}

/// Crosshair guide position in plot coordinates (raw pointer, not snapped).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CrosshairState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

/// Closest sample of one series under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub series_index: usize,
    pub name: String,
    pub color: Color,
    pub time: f64,
    pub value: f64,
    /// Snapped plot-space position of the sample.
    pub x: f64,
    pub y: f64,
}

impl TooltipEntry {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {:.4}", self.name, self.value)
    }
}

/// Tooltip content rebuilt on every pointer move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TooltipState {
    pub visible: bool,
    /// Time under the pointer after inverting the current x-scale.
    pub query_time: f64,
    pub entries: Vec<TooltipEntry>,
}

impl TooltipState {
    #[must_use]
    pub fn header(&self) -> String {
        format_day_label(self.query_time)
    }

    /// Single-line summary, e.g. `14 Oct 2024 | EUR-USD: 1.0850 | GBP-USD: 1.3021`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len() + 1);
        parts.push(self.header());
        parts.extend(self.entries.iter().map(TooltipEntry::label));
        parts.join(" | ")
    }
}

/// Builds tooltip entries for a plot-space pointer x.
///
/// The pointer is inverted through the current (post-zoom) x-scale; every
/// series is searched independently and a series whose closest sample has
/// no value contributes no entry.
#[must_use]
pub fn lookup_tooltip(series: &[Series], scales: ChartScales, pointer_x: f64) -> TooltipState {
    let query_time = scales.time.pixel_to_time(pointer_x);
    let entries = series
        .iter()
        .enumerate()
        .filter_map(|(series_index, series)| {
            let point = nearest_point(series.points(), query_time)?;
            let value = point.value.filter(|value| value.is_finite())?;
            Some(TooltipEntry {
                series_index,
                name: series.name().to_owned(),
                color: series.color(),
                time: point.time,
                value,
                x: scales.time.time_to_pixel(point.time),
                y: scales.value.value_to_pixel(value),
            })
        })
        .collect();

    TooltipState {
        visible: true,
        query_time,
        entries,
    }
}

/// Idle/Hovering state machine owning crosshair and tooltip state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
    crosshair: CrosshairState,
    tooltip: TooltipState,
}

impl InteractionState {
    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn crosshair(&self) -> CrosshairState {
        self.crosshair
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn on_pointer_enter(&mut self) {
        self.hover = HoverState::Hovering;
        self.crosshair.visible = true;
        self.tooltip.visible = true;
    }

    /// Moves the crosshair to the raw pointer position and installs a freshly
    /// built tooltip. Entering implicitly if the state was idle.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, tooltip: TooltipState) {
        if self.hover == HoverState::Idle {
            self.on_pointer_enter();
        }
        self.crosshair.x = x;
        self.crosshair.y = y;
        self.tooltip = TooltipState {
            visible: true,
            ..tooltip
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
        self.crosshair.visible = false;
        self.tooltip = TooltipState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, InteractionState, TooltipState};

    #[test]
    fn state_machine_transitions() {
        let mut state = InteractionState::default();
        assert_eq!(state.hover(), HoverState::Idle);

        state.on_pointer_enter();
        assert_eq!(state.hover(), HoverState::Hovering);
        assert!(state.crosshair().visible);

        state.on_pointer_move(10.0, 20.0, TooltipState::default());
        assert_eq!(state.hover(), HoverState::Hovering);
        assert_eq!((state.crosshair().x, state.crosshair().y), (10.0, 20.0));
        assert!(state.tooltip().visible);

        state.on_pointer_leave();
        assert_eq!(state.hover(), HoverState::Idle);
        assert!(!state.crosshair().visible);
        assert!(!state.tooltip().visible);
    }

    #[test]
    fn move_while_idle_enters_hovering() {
        let mut state = InteractionState::default();
        state.on_pointer_move(1.0, 1.0, TooltipState::default());
        assert_eq!(state.hover(), HoverState::Hovering);
    }
}

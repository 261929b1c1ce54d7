use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of the whole drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 40.0,
            left: 60.0,
        }
    }
}

impl Margins {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plot rectangle, also used as the pointer hit-test surface.
///
/// Scales map into `[0, inner_width]` x `[inner_height, 0]`; `left`/`top`
/// offset those plot coordinates into surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let margins = margins.validate()?;
        let inner_width = f64::from(viewport.width) - margins.left - margins.right;
        let inner_height = f64::from(viewport.height) - margins.top - margins.bottom;
        if !viewport.is_valid() || inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            inner_width,
            inner_height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.inner_width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.inner_height
    }

    /// Converts surface coordinates into plot coordinates.
    #[must_use]
    pub fn to_plot(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }

    /// Converts plot coordinates into surface coordinates.
    #[must_use]
    pub fn to_surface(self, x: f64, y: f64) -> (f64, f64) {
        (x + self.left, y + self.top)
    }

    /// Returns `true` when the surface point lies inside the hit-test rectangle.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let (px, py) = self.to_plot(x, y);
        (0.0..=self.inner_width).contains(&px) && (0.0..=self.inner_height).contains(&py)
    }
}

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Allowed zoom factor interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 10.0,
        }
    }
}

impl ZoomLimits {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_scale.is_finite()
            || !self.max_scale.is_finite()
            || self.min_scale < 1.0
            || self.max_scale < self.min_scale
        {
            return Err(ChartError::InvalidData(
                "zoom limits must be finite with 1 <= min_scale <= max_scale".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Horizontal zoom/pan state applied on top of the base time scale.
///
/// Transformed plot x is `scale_factor * base_x + translate_x`. The
/// transform is kept clamped so the visible window never leaves the data
/// extent: `scale_factor >= 1` and `translate_x ∈ [width·(1−k), 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale_factor: f64,
    pub translate_x: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            scale_factor: 1.0,
            translate_x: 0.0,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.scale_factor == 1.0 && self.translate_x == 0.0
    }

    #[must_use]
    pub fn apply_x(self, base_x: f64) -> f64 {
        self.scale_factor * base_x + self.translate_x
    }

    #[must_use]
    pub fn invert_x(self, x: f64) -> f64 {
        (x - self.translate_x) / self.scale_factor
    }

    /// Clamps scale and translation into the allowed window for `width`.
    ///
    /// Non-finite components fall back to the identity values.
    #[must_use]
    pub fn clamped(self, width: f64, limits: ZoomLimits) -> Self {
        let requested = self;
        let scale_factor = if self.scale_factor.is_finite() {
            self.scale_factor.clamp(limits.min_scale, limits.max_scale)
        } else {
            1.0
        };
        let translate_x = if self.translate_x.is_finite() {
            self.translate_x
                .clamp((width * (1.0 - scale_factor)).min(0.0), 0.0)
        } else {
            0.0
        };
        let clamped = Self {
            scale_factor,
            translate_x,
        };
        if clamped != requested {
            trace!(
                requested_scale = requested.scale_factor,
                requested_translate = requested.translate_x,
                scale = clamped.scale_factor,
                translate = clamped.translate_x,
                "clamped out-of-range zoom transform"
            );
        }
        clamped
    }

    /// Multiplies the zoom factor while keeping the content under `anchor_x` fixed.
    ///
    /// Out-of-range factors clamp to the zoom limits: `+inf` lands on
    /// `max_scale`, zero or negative factors on `min_scale`. A NaN factor or
    /// a non-finite anchor leaves the transform unchanged.
    #[must_use]
    pub fn zoom_at(self, anchor_x: f64, factor: f64, width: f64, limits: ZoomLimits) -> Self {
        if factor.is_nan() || !anchor_x.is_finite() {
            return self;
        }
        let scale_factor = (self.scale_factor * factor).clamp(limits.min_scale, limits.max_scale);
        let base_anchor = self.invert_x(anchor_x);
        Self {
            scale_factor,
            translate_x: anchor_x - scale_factor * base_anchor,
        }
        .clamped(width, limits)
    }

    /// Shifts the window by `delta_x` pixels (positive drags content right).
    #[must_use]
    pub fn pan_by(self, delta_x: f64, width: f64, limits: ZoomLimits) -> Self {
        if !delta_x.is_finite() {
            return self;
        }
        Self {
            scale_factor: self.scale_factor,
            translate_x: self.translate_x + delta_x,
        }
        .clamped(width, limits)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Shape parameters of the arrow ring.
//!
//! [`ShapeParameters`] is the single source of truth for the geometry: the
//! outlines and the gradient layout are always derived from one validated
//! value of this type. Setters never mutate in place; `with_*` returns a new
//! candidate which the engine validates before swapping it in.

use crate::config::{
    ShapeConfig, DEFAULT_ARROW_COUNT, DEFAULT_ARROW_LENGTH_RATIO, DEFAULT_ARROW_WIDTH_RATIO,
    DEFAULT_BARB_INDENT_RATIO, DEFAULT_GAP_RATIO, DEFAULT_THICKNESS_RATIO,
};
use crate::error::{Error, Parameter, Result};

/// Ratios describing one arrow and how many of them share the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    arrow_count: u32,
    gap_ratio: f64,
    thickness_ratio: f64,
    arrow_width_ratio: f64,
    arrow_length_ratio: f64,
    barb_indent_ratio: f64,
}

impl ShapeParameters {
    #[must_use]
    pub fn arrow_count(&self) -> u32 {
        self.arrow_count
    }

    #[must_use]
    pub fn gap_ratio(&self) -> f64 {
        self.gap_ratio
    }

    #[must_use]
    pub fn thickness_ratio(&self) -> f64 {
        self.thickness_ratio
    }

    #[must_use]
    pub fn arrow_width_ratio(&self) -> f64 {
        self.arrow_width_ratio
    }

    #[must_use]
    pub fn arrow_length_ratio(&self) -> f64 {
        self.arrow_length_ratio
    }

    #[must_use]
    pub fn barb_indent_ratio(&self) -> f64 {
        self.barb_indent_ratio
    }

    /// Angular slot reserved for each arrow, gap included.
    #[must_use]
    pub fn slot_degrees(&self) -> f64 {
        360.0 / f64::from(self.arrow_count)
    }

    /// Angular extent of one arrow: `(1 − gap) × 360 / count`.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        (1.0 - self.gap_ratio) * self.slot_degrees()
    }

    #[must_use]
    pub fn with_arrow_count(self, arrow_count: u32) -> Self {
        Self {
            arrow_count,
            ..self
        }
    }

    #[must_use]
    pub fn with_gap_ratio(self, gap_ratio: f64) -> Self {
        Self { gap_ratio, ..self }
    }

    #[must_use]
    pub fn with_thickness_ratio(self, thickness_ratio: f64) -> Self {
        Self {
            thickness_ratio,
            ..self
        }
    }

    #[must_use]
    pub fn with_arrow_width_ratio(self, arrow_width_ratio: f64) -> Self {
        Self {
            arrow_width_ratio,
            ..self
        }
    }

    #[must_use]
    pub fn with_arrow_length_ratio(self, arrow_length_ratio: f64) -> Self {
        Self {
            arrow_length_ratio,
            ..self
        }
    }

    #[must_use]
    pub fn with_barb_indent_ratio(self, barb_indent_ratio: f64) -> Self {
        Self {
            barb_indent_ratio,
            ..self
        }
    }

    /// Builds parameters from a `[shape]` config section, defaults filling gaps.
    pub fn from_config(config: &ShapeConfig) -> Result<Self> {
        let params = Self {
            arrow_count: config.arrow_count.unwrap_or(DEFAULT_ARROW_COUNT),
            gap_ratio: config.gap_ratio.unwrap_or(DEFAULT_GAP_RATIO),
            thickness_ratio: config.thickness_ratio.unwrap_or(DEFAULT_THICKNESS_RATIO),
            arrow_width_ratio: config
                .arrow_width_ratio
                .unwrap_or(DEFAULT_ARROW_WIDTH_RATIO),
            arrow_length_ratio: config
                .arrow_length_ratio
                .unwrap_or(DEFAULT_ARROW_LENGTH_RATIO),
            barb_indent_ratio: config
                .barb_indent_ratio
                .unwrap_or(DEFAULT_BARB_INDENT_RATIO),
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks value ranges that do not depend on the ring construction.
    ///
    /// Ring extents and the tip angle are checked by
    /// [`super::ArcPathBuilder::build`].
    pub fn validate(&self) -> Result<()> {
        if self.arrow_count < 1 {
            return Err(Error::invalid(
                Parameter::ArrowCount,
                f64::from(self.arrow_count),
                "at least one arrow is required",
            ));
        }

        let gap = self.gap_ratio;
        if !gap.is_finite() {
            return Err(Error::invalid(Parameter::GapRatio, gap, "must be finite"));
        }
        if gap <= 0.0 {
            return Err(Error::invalid(
                Parameter::GapRatio,
                gap,
                "must be greater than 0 so arrows stay apart",
            ));
        }
        if gap >= 1.0 {
            return Err(Error::invalid(
                Parameter::GapRatio,
                gap,
                "must be less than 1 so arrows keep a positive sweep",
            ));
        }

        for (field, value) in [
            (Parameter::ThicknessRatio, self.thickness_ratio),
            (Parameter::ArrowWidthRatio, self.arrow_width_ratio),
            (Parameter::ArrowLengthRatio, self.arrow_length_ratio),
            (Parameter::BarbIndentRatio, self.barb_indent_ratio),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid(field, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(Error::invalid(field, value, "must not be negative"));
            }
        }

        Ok(())
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            arrow_count: DEFAULT_ARROW_COUNT,
            gap_ratio: DEFAULT_GAP_RATIO,
            thickness_ratio: DEFAULT_THICKNESS_RATIO,
            arrow_width_ratio: DEFAULT_ARROW_WIDTH_RATIO,
            arrow_length_ratio: DEFAULT_ARROW_LENGTH_RATIO,
            barb_indent_ratio: DEFAULT_BARB_INDENT_RATIO,
        }
    }
}

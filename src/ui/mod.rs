// SPDX-License-Identifier: MPL-2.0
//! Demo user interface.
//!
//! - [`controls`] - Parameter panel that emits spinner messages
//! - [`raster`] - Software rendering of the spinner render data
//! - [`design_tokens`] - Spacing, sizing and color constants

pub mod controls;
pub mod design_tokens;
pub mod raster;

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Geometry**: Normalized drawing space
//! - **Shape**: Arrow count and shape ratios
//! - **Animation**: Frame rate, revolution rate and hue cycling
//! - **Palette**: Gradient hues and disabled grays

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Side of the normalized square every outline is built in.
pub const NORMALIZED_SIDE: f64 = 1000.0;

/// Maximum error, in normalized units, of the cubic curves standing in for arcs.
pub const ARC_TOLERANCE: f64 = 0.01;

/// Maximum error, in output pixels, when flattening outlines for rasterization.
pub const FLATTEN_TOLERANCE: f64 = 0.25;

// ==========================================================================
// Shape Defaults
// ==========================================================================

/// Default number of arrows around the ring.
pub const DEFAULT_ARROW_COUNT: u32 = 3;

/// Share of each arrow slot left empty.
pub const DEFAULT_GAP_RATIO: f64 = 0.2;

/// Ring thickness as a share of the normalized side.
pub const DEFAULT_THICKNESS_RATIO: f64 = 0.1;

/// Barb overhang as a share of the normalized side.
pub const DEFAULT_ARROW_WIDTH_RATIO: f64 = 0.075;

/// Arrow head length as a share of the arrow sweep.
pub const DEFAULT_ARROW_LENGTH_RATIO: f64 = 0.3;

/// Barb indent as a share of the arrow sweep.
pub const DEFAULT_BARB_INDENT_RATIO: f64 = 0.03;

/// Default rotation direction.
pub const DEFAULT_CLOCKWISE: bool = true;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default tick rate in frames per second.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Default revolutions per second.
pub const DEFAULT_REVOLUTIONS_PER_SECOND: f64 = 0.4;

/// Hue advance per tick, in degrees.
pub const HUE_STEP_DEGREES: f64 = 1.0;

/// Whether the spinner starts enabled.
pub const DEFAULT_ENABLED: bool = true;

/// Whether the demo starts the clock right away.
pub const DEFAULT_AUTOSTART: bool = true;

// ==========================================================================
// Palette Defaults
// ==========================================================================

/// Base hue of the leading stop (cyan).
pub const LEADING_HUE_DEGREES: f64 = 180.0;

/// Base hue of the middle stop (blue).
pub const MID_HUE_DEGREES: f64 = 240.0;

/// Base hue of the transparent trailing stop (green).
pub const TRAILING_HUE_DEGREES: f64 = 120.0;

/// Value of the leading gray when disabled.
pub const DISABLED_LIGHT_GRAY: f32 = 0.7;

/// Value of the middle gray when disabled.
pub const DISABLED_DARK_GRAY: f32 = 0.3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(NORMALIZED_SIDE > 0.0);
    assert!(ARC_TOLERANCE > 0.0);
    assert!(FLATTEN_TOLERANCE > 0.0);

    // Shape validation
    assert!(DEFAULT_ARROW_COUNT >= 1);
    assert!(DEFAULT_GAP_RATIO > 0.0);
    assert!(DEFAULT_GAP_RATIO < 1.0);
    assert!(DEFAULT_THICKNESS_RATIO > 0.0);
    assert!(DEFAULT_ARROW_WIDTH_RATIO >= 0.0);
    assert!(DEFAULT_ARROW_LENGTH_RATIO >= 0.0);
    assert!(DEFAULT_ARROW_LENGTH_RATIO < 1.0);
    assert!(DEFAULT_BARB_INDENT_RATIO >= 0.0);
    // Inner arrow ring must keep a positive extent
    assert!(2.0 * DEFAULT_ARROW_WIDTH_RATIO + DEFAULT_THICKNESS_RATIO < 0.5);

    // Animation validation
    assert!(DEFAULT_FRAME_RATE > 0);
    assert!(DEFAULT_REVOLUTIONS_PER_SECOND > 0.0);
    assert!(HUE_STEP_DEGREES >= 0.0);
    assert!(HUE_STEP_DEGREES < 360.0);
};

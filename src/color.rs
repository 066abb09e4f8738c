// SPDX-License-Identifier: MPL-2.0
//! Gradient colors.
//!
//! Stops are stored as straight-alpha sRGB.

use palette::{FromColor, Hsva, Srgba};

/// Straight (non-premultiplied) sRGB color with components in `0.0..=1.0`.
pub type Color = Srgba;

pub const TRANSPARENT: Color = Srgba::new(0.0, 0.0, 0.0, 0.0);

/// Opaque gray of the given value.
#[must_use]
pub const fn gray(value: f32) -> Color {
    Srgba::new(value, value, value, 1.0)
}

/// Full-saturation, full-value color at a hue in degrees (wrapped).
#[must_use]
pub fn from_hue(hue_degrees: f32, alpha: f32) -> Color {
    let hsv: Hsva = Hsva::new(hue_degrees, 1.0, 1.0, alpha);
    Srgba::from_color(hsv)
}

/// Returns the color as 8-bit straight RGBA.
#[must_use]
pub fn to_rgba8(color: Color) -> [u8; 4] {
    let c: Srgba<u8> = color.into_format();
    [c.red, c.green, c.blue, c.alpha]
}

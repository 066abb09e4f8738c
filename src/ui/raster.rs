// SPDX-License-Identifier: MPL-2.0
//! Software rasterization of the spinner into an RGBA frame.
//!
//! Outlines are mapped through the paint transform, flattened in output pixels
//! and filled into a coverage mask. Each covered pixel is then colored by sampling the conical
//! gradient at the pixel center mapped back into normalized space, so the
//! brush rotates and flips together with the shape.

use crate::color;
use crate::config::FLATTEN_TOLERANCE;
use crate::geometry::{Affine, PathEl, Point};
use crate::spinner::RenderData;
use iced::widget::image;
use tiny_skia::{FillRule, Mask, Path, PathBuilder, Transform};

/// Straight (non-premultiplied) RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at `(x, y)`, if inside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    #[must_use]
    pub fn into_handle(self) -> image::Handle {
        image::Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Renders one frame of `data` at `width × height` pixels.
///
/// Returns `None` when there is nothing to draw: a zero-sized output or a
/// collapsed viewport.
#[must_use]
pub fn rasterize(data: &RenderData<'_>, width: u32, height: u32) -> Option<Frame> {
    let paint = data.paint_transform();
    let det = paint.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let inverse = paint.inverse();
    let mut mask = Mask::new(width, height)?;
    let path = device_path(data, paint)?;
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());

    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    for (i, &coverage) in mask.data().iter().enumerate() {
        if coverage == 0 {
            continue;
        }
        let x = (i % width as usize) as f64 + 0.5;
        let y = (i / width as usize) as f64 + 0.5;
        let normalized = inverse * Point::new(x, y);
        let [r, g, b, a] = color::to_rgba8(data.gradient.color_at_point(normalized));
        #[allow(clippy::cast_possible_truncation)]
        let alpha = (u16::from(a) * u16::from(coverage) / 255) as u8;
        pixels[i * 4..i * 4 + 4].copy_from_slice(&[r, g, b, alpha]);
    }

    Some(Frame {
        width,
        height,
        pixels,
    })
}

/// All outlines mapped through `paint` and flattened in output pixels.
#[allow(clippy::cast_possible_truncation)]
fn device_path(data: &RenderData<'_>, paint: Affine) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for outline in data.outlines {
        let mapped = outline.elements().iter().map(|el| paint * *el);
        kurbo::flatten(mapped, FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::ClosePath => builder.close(),
            // Flattening only emits lines.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
    }
    builder.finish()
}

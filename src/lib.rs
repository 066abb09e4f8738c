// SPDX-License-Identifier: MPL-2.0
//! `arrow_spinner` draws a ring of curved arrows that rotate and cycle through
//! hues, the way a busy indicator does.
//!
//! The [`spinner`] module holds the host-independent engine: outline
//! construction, the conical gradient, the viewport mapping and the animation
//! clock. The [`app`] and [`ui`] modules host it in an Iced window.

#![doc(html_root_url = "https://docs.rs/arrow_spinner/0.1.0")]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod spinner;
pub mod ui;

pub use error::{Error, Parameter, Result};
pub use spinner::{Effect, Message, RenderData, ShapeParameters, SpinnerEngine};

#[cfg(test)]
mod test_utils;

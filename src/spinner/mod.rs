// SPDX-License-Identifier: MPL-2.0
//! Animated arrow-arc spinner.
//!
//! Geometry is computed once per shape change in a normalized square, then
//! mapped onto the output through [`ViewportTransform`]. Only the angle and
//! the gradient hue move from frame to frame.

pub mod arc_path;
pub mod clock;
pub mod engine;
pub mod gradient;
pub mod params;
pub mod viewport;

pub use arc_path::{ArcPathBuilder, ArrowRing};
pub use clock::{AnimationClock, AnimationState, ClockState};
pub use engine::{Effect, Message, RenderData, SpinnerEngine};
pub use gradient::{GradientBuilder, GradientSpec, GradientStop};
pub use params::ShapeParameters;
pub use viewport::ViewportTransform;

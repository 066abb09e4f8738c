// SPDX-License-Identifier: MPL-2.0
//! Spinner engine - shape parameters, cached geometry, gradient and clock.
//!
//! The engine groups every piece of spinner state behind one owner:
//! - Shape parameters and the outlines derived from them
//! - The conical gradient, rebuilt on every tick and shape change
//! - The viewport transform, rebuilt on resize only
//! - The animation clock
//!
//! It never owns a timer or a thread. The host dispatches [`Message`]s
//! through [`SpinnerEngine::handle`] (or calls the setters directly) and
//! repaints when an [`Effect::Redraw`] comes back.

use super::arc_path::{ArcPathBuilder, ArrowRing};
use super::clock::{AnimationClock, AnimationState};
use super::gradient::{GradientBuilder, GradientSpec};
use super::params::ShapeParameters;
use super::viewport::ViewportTransform;
use crate::config::{
    Config, DEFAULT_AUTOSTART, DEFAULT_CLOCKWISE, DEFAULT_ENABLED, NORMALIZED_SIDE,
};
use crate::error::{Error, Result};
use crate::geometry::{self, Affine, BezPath};
use std::time::Duration;

/// Inputs the host can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // SHAPE
    // ═══════════════════════════════════════════════════════════════════════
    SetArrowCount(u32),
    SetGapRatio(f64),
    SetThicknessRatio(f64),
    SetArrowWidthRatio(f64),
    SetArrowLengthRatio(f64),
    SetBarbIndentRatio(f64),
    SetClockwise(bool),

    // ═══════════════════════════════════════════════════════════════════════
    // ANIMATION
    // ═══════════════════════════════════════════════════════════════════════
    SetFrameRate(u32),
    SetRevolutionsPerSecond(f64),
    SetEnabled(bool),
    Start,
    Stop,
    /// One firing of the host's periodic tick source.
    Tick,

    // ═══════════════════════════════════════════════════════════════════════
    // HOST
    // ═══════════════════════════════════════════════════════════════════════
    /// The drawing area changed size, in output pixels.
    Resize { width: f64, height: f64 },
}

/// What the host should do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// The render data changed; repaint.
    Redraw,
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderData<'a> {
    /// Normalized space to output pixels.
    pub transform: Affine,
    pub outlines: &'a [BezPath],
    pub gradient: &'a GradientSpec,
    pub clockwise: bool,
    pub angle_degrees: f64,
}

impl RenderData<'_> {
    /// Rotation, then the horizontal flip for counter-clockwise spinners,
    /// then the viewport mapping.
    ///
    /// Applies to both the outlines and the gradient brush.
    #[must_use]
    pub fn paint_transform(&self) -> Affine {
        let flip = if self.clockwise { 1.0 } else { -1.0 };
        // Rightmost applies first.
        self.transform
            * Affine::scale_non_uniform(flip, 1.0)
            * geometry::rotation(self.angle_degrees)
    }
}

/// Animated arrow-arc spinner state.
#[derive(Debug, Clone)]
pub struct SpinnerEngine {
    params: ShapeParameters,
    clockwise: bool,
    builder: ArcPathBuilder,
    ring: ArrowRing,
    gradient_builder: GradientBuilder,
    gradient: GradientSpec,
    viewport: ViewportTransform,
    clock: AnimationClock,
}

impl SpinnerEngine {
    /// Builds a stopped, enabled engine drawing onto a
    /// [`NORMALIZED_SIDE`]-sized square until the first resize.
    pub fn new(params: ShapeParameters) -> Result<Self> {
        Self::with_clock(params, DEFAULT_CLOCKWISE, AnimationClock::default())
    }

    fn with_clock(params: ShapeParameters, clockwise: bool, clock: AnimationClock) -> Result<Self> {
        let builder = ArcPathBuilder::default();
        let ring = builder.build(&params)?;
        let gradient_builder = gradient_builder_for(&params, &ring);
        let state = clock.state();
        let gradient = gradient_builder.build(state.hue_offset_degrees(), state.grayed_out());
        let viewport = ViewportTransform::build(builder.bounds(), NORMALIZED_SIDE, NORMALIZED_SIDE)?;

        Ok(Self {
            params,
            clockwise,
            builder,
            ring,
            gradient_builder,
            gradient,
            viewport,
            clock,
        })
    }

    /// Builds an engine from loaded settings.
    ///
    /// A disabled engine starts grayed out and stopped. An enabled one
    /// starts running when `autostart` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let params = ShapeParameters::from_config(&config.shape)?;
        let animation = &config.animation;

        let mut clock = AnimationClock::default();
        if let Some(fps) = animation.frame_rate {
            clock.set_frame_rate(fps)?;
        }
        if let Some(rps) = animation.revolutions_per_second {
            clock.set_revolutions_per_second(rps)?;
        }

        let clockwise = config.shape.clockwise.unwrap_or(DEFAULT_CLOCKWISE);
        let mut engine = Self::with_clock(params, clockwise, clock)?;

        if !animation.enabled.unwrap_or(DEFAULT_ENABLED) {
            engine.set_enabled(false);
        } else if animation.autostart.unwrap_or(DEFAULT_AUTOSTART) {
            engine.start();
        }
        Ok(engine)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DISPATCH
    // ═══════════════════════════════════════════════════════════════════════

    /// Routes a host message to the matching operation.
    ///
    /// Rejected values leave the engine exactly as it was.
    pub fn handle(&mut self, msg: Message) -> Result<Effect> {
        match msg {
            Message::SetArrowCount(count) => self.set_arrow_count(count)?,
            Message::SetGapRatio(ratio) => self.set_gap_ratio(ratio)?,
            Message::SetThicknessRatio(ratio) => self.set_thickness_ratio(ratio)?,
            Message::SetArrowWidthRatio(ratio) => self.set_arrow_width_ratio(ratio)?,
            Message::SetArrowLengthRatio(ratio) => self.set_arrow_length_ratio(ratio)?,
            Message::SetBarbIndentRatio(ratio) => self.set_barb_indent_ratio(ratio)?,
            Message::SetClockwise(clockwise) => self.set_clockwise(clockwise),
            Message::SetFrameRate(fps) => {
                self.set_frame_rate(fps)?;
                return Ok(Effect::None);
            }
            Message::SetRevolutionsPerSecond(rps) => {
                self.set_revolutions_per_second(rps)?;
                return Ok(Effect::None);
            }
            Message::SetEnabled(enabled) => self.set_enabled(enabled),
            Message::Start => {
                self.start();
                return Ok(Effect::None);
            }
            Message::Stop => {
                self.stop();
                return Ok(Effect::None);
            }
            Message::Tick => return Ok(self.on_tick()),
            Message::Resize { width, height } => self.on_resize(width, height)?,
        }
        Ok(Effect::Redraw)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SHAPE SETTERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_arrow_count(&mut self, arrow_count: u32) -> Result<()> {
        self.apply_shape(self.params.with_arrow_count(arrow_count))
    }

    pub fn set_gap_ratio(&mut self, ratio: f64) -> Result<()> {
        self.apply_shape(self.params.with_gap_ratio(ratio))
    }

    pub fn set_thickness_ratio(&mut self, ratio: f64) -> Result<()> {
        self.apply_shape(self.params.with_thickness_ratio(ratio))
    }

    pub fn set_arrow_width_ratio(&mut self, ratio: f64) -> Result<()> {
        self.apply_shape(self.params.with_arrow_width_ratio(ratio))
    }

    pub fn set_arrow_length_ratio(&mut self, ratio: f64) -> Result<()> {
        self.apply_shape(self.params.with_arrow_length_ratio(ratio))
    }

    pub fn set_barb_indent_ratio(&mut self, ratio: f64) -> Result<()> {
        self.apply_shape(self.params.with_barb_indent_ratio(ratio))
    }

    /// Flips the drawing orientation. Outlines are not rebuilt.
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    /// Builds everything from `candidate` first and commits only on success.
    fn apply_shape(&mut self, candidate: ShapeParameters) -> Result<()> {
        let ring = self.builder.build(&candidate).map_err(log_rejection)?;
        self.gradient_builder = gradient_builder_for(&candidate, &ring);
        self.params = candidate;
        self.ring = ring;
        self.rebuild_gradient();
        Ok(())
    }

    fn rebuild_gradient(&mut self) {
        let state = self.clock.state();
        self.gradient = self
            .gradient_builder
            .build(state.hue_offset_degrees(), state.grayed_out());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ANIMATION
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_frame_rate(&mut self, frames_per_second: u32) -> Result<()> {
        self.clock
            .set_frame_rate(frames_per_second)
            .map_err(log_rejection)
    }

    pub fn set_revolutions_per_second(&mut self, revolutions_per_second: f64) -> Result<()> {
        self.clock
            .set_revolutions_per_second(revolutions_per_second)
            .map_err(log_rejection)
    }

    /// Colors and starts the spinner, or grays it out and stops it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.clock.set_enabled(enabled);
        self.rebuild_gradient();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.set_enabled(!disabled);
    }

    /// Arms the clock. The host should start delivering ticks.
    pub fn start(&mut self) {
        self.clock.start();
    }

    /// Disarms the clock. The last frame stays drawable.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    /// Advances the animation by one configured frame interval.
    pub fn on_tick(&mut self) -> Effect {
        if self.clock.tick() {
            self.rebuild_gradient();
            Effect::Redraw
        } else {
            Effect::None
        }
    }

    /// Rebuilds the viewport transform for a new output size.
    pub fn on_resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.viewport =
            ViewportTransform::build(self.builder.bounds(), width, height).map_err(log_rejection)?;
        tracing::debug!(width, height, "spinner viewport resized");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Borrowed view of the current frame. Side-effect free.
    #[must_use]
    pub fn render_data(&self) -> RenderData<'_> {
        RenderData {
            transform: self.viewport.transform(),
            outlines: self.ring.outlines(),
            gradient: &self.gradient,
            clockwise: self.clockwise,
            angle_degrees: self.clock.state().angle_degrees(),
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &ShapeParameters {
        &self.params
    }

    #[must_use]
    pub fn arrow_count(&self) -> u32 {
        self.params.arrow_count()
    }

    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.params.sweep_degrees()
    }

    #[must_use]
    pub fn start_angle_degrees(&self) -> f64 {
        self.ring.start_angle_degrees()
    }

    #[must_use]
    pub fn outlines(&self) -> &[BezPath] {
        self.ring.outlines()
    }

    #[must_use]
    pub fn gradient(&self) -> &GradientSpec {
        &self.gradient
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        self.clock.state()
    }

    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.clock.state().angle_degrees()
    }

    #[must_use]
    pub fn hue_offset_degrees(&self) -> f64 {
        self.clock.state().hue_offset_degrees()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.clock.state().grayed_out()
    }

    /// Period at which the host should send [`Message::Tick`].
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.clock.frame_interval()
    }

    #[must_use]
    pub fn frame_interval_ms(&self) -> f64 {
        self.clock.frame_interval_ms()
    }

    #[must_use]
    pub fn revolutions_per_second(&self) -> f64 {
        self.clock.revolutions_per_second()
    }

    #[must_use]
    pub fn rotation_increment(&self) -> f64 {
        self.clock.rotation_increment()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.clock.tick_count()
    }
}

impl Default for SpinnerEngine {
    fn default() -> Self {
        Self::new(ShapeParameters::default()).expect("default spinner parameters are valid")
    }
}

fn gradient_builder_for(params: &ShapeParameters, ring: &ArrowRing) -> GradientBuilder {
    GradientBuilder::new(
        params.arrow_count(),
        params.sweep_degrees(),
        ring.start_angle_degrees(),
    )
}

fn log_rejection(err: Error) -> Error {
    if let Error::InvalidParameters {
        field,
        value,
        reason,
    } = &err
    {
        tracing::warn!(%field, value, reason, "rejected spinner setting");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Parameter;
    use crate::geometry::Point;
    use crate::test_utils::{assert_abs_diff_eq, GEOMETRY_EPSILON};

    #[test]
    fn default_engine_is_stopped_and_enabled() {
        let engine = SpinnerEngine::default();
        assert!(!engine.is_running());
        assert!(engine.is_enabled());
        assert_eq!(engine.outlines().len(), 3);
        assert_eq!(engine.angle_degrees(), 0.0);
    }

    #[test]
    fn shape_setter_rebuilds_outlines_and_gradient() {
        let mut engine = SpinnerEngine::default();
        engine.set_arrow_count(5).expect("valid count");
        assert_eq!(engine.outlines().len(), 5);
        assert_eq!(engine.gradient().stops().len(), 16);
    }

    #[test]
    fn rejected_setter_leaves_state_untouched() {
        let mut engine = SpinnerEngine::default();
        let outlines = engine.outlines().to_vec();
        let gradient = engine.gradient().clone();
        let params = *engine.parameters();

        let err = engine.set_gap_ratio(1.0).unwrap_err();
        assert_eq!(err.field(), Some(Parameter::GapRatio));
        assert_eq!(engine.outlines(), outlines.as_slice());
        assert_eq!(engine.gradient(), &gradient);
        assert_eq!(engine.parameters(), &params);
    }

    #[test]
    fn set_clockwise_keeps_outlines() {
        let mut engine = SpinnerEngine::default();
        let outlines = engine.outlines().to_vec();
        engine.set_clockwise(false);
        assert!(!engine.is_clockwise());
        assert_eq!(engine.outlines(), outlines.as_slice());
    }

    #[test]
    fn tick_is_ignored_until_started() {
        let mut engine = SpinnerEngine::default();
        assert_eq!(engine.on_tick(), Effect::None);
        engine.start();
        assert_eq!(engine.on_tick(), Effect::Redraw);
        assert_eq!(engine.tick_count(), 1);
        assert_abs_diff_eq!(engine.hue_offset_degrees(), 1.0);
    }

    #[test]
    fn tick_shifts_gradient_hue() {
        let mut engine = SpinnerEngine::default();
        let before = engine.gradient().clone();
        engine.start();
        engine.on_tick();
        assert_ne!(engine.gradient(), &before);
    }

    #[test]
    fn stop_freezes_last_frame() {
        let mut engine = SpinnerEngine::default();
        engine.start();
        for _ in 0..7 {
            engine.on_tick();
        }
        let angle = engine.angle_degrees();
        engine.stop();
        assert!(!engine.is_running());
        assert_eq!(engine.render_data().angle_degrees, angle);
        assert_eq!(engine.render_data().outlines.len(), 3);
    }

    #[test]
    fn handle_reports_redraw_only_for_visible_changes() {
        let mut engine = SpinnerEngine::default();
        assert_eq!(engine.handle(Message::Start), Ok(Effect::None));
        assert_eq!(engine.handle(Message::Tick), Ok(Effect::Redraw));
        assert_eq!(engine.handle(Message::SetFrameRate(30)), Ok(Effect::None));
        assert_eq!(engine.handle(Message::SetClockwise(false)), Ok(Effect::Redraw));
        assert_eq!(
            engine.handle(Message::Resize {
                width: 64.0,
                height: 64.0
            }),
            Ok(Effect::Redraw)
        );
        assert!(engine.handle(Message::SetArrowCount(0)).is_err());
    }

    #[test]
    fn resize_rejects_negative_sizes_and_keeps_viewport() {
        let mut engine = SpinnerEngine::default();
        engine.on_resize(200.0, 100.0).expect("valid size");
        let viewport = *engine.viewport();
        assert!(engine.on_resize(-5.0, 100.0).is_err());
        assert_eq!(engine.viewport(), &viewport);
    }

    #[test]
    fn paint_transform_flips_counter_clockwise_spinners() {
        let mut engine = SpinnerEngine::default();
        engine.on_resize(1000.0, 1000.0).expect("valid size");

        let p = Point::new(100.0, 0.0);
        let cw = engine.render_data().paint_transform() * p;
        assert_abs_diff_eq!(cw.x, 600.0, epsilon = GEOMETRY_EPSILON);
        assert_abs_diff_eq!(cw.y, 500.0, epsilon = GEOMETRY_EPSILON);

        engine.set_clockwise(false);
        let ccw = engine.render_data().paint_transform() * p;
        assert_abs_diff_eq!(ccw.x, 400.0, epsilon = GEOMETRY_EPSILON);
        assert_abs_diff_eq!(ccw.y, 500.0, epsilon = GEOMETRY_EPSILON);
    }

    #[test]
    fn set_disabled_grays_out() {
        let mut engine = SpinnerEngine::default();
        engine.start();
        engine.set_disabled(true);
        assert!(!engine.is_enabled());
        assert!(!engine.is_running());
        engine.set_disabled(false);
        assert!(engine.is_enabled());
        assert!(engine.is_running());
    }

    #[test]
    fn from_config_honors_animation_flags() {
        let mut config = Config::default();
        config.animation.autostart = Some(false);
        let engine = SpinnerEngine::from_config(&config).expect("valid config");
        assert!(!engine.is_running());
        assert!(engine.is_enabled());

        config.animation.enabled = Some(false);
        config.animation.autostart = Some(true);
        let engine = SpinnerEngine::from_config(&config).expect("valid config");
        assert!(!engine.is_running());
        assert!(!engine.is_enabled());

        let engine = SpinnerEngine::from_config(&Config::default()).expect("valid config");
        assert!(engine.is_running());
    }

    #[test]
    fn from_config_rejects_invalid_timing() {
        let mut config = Config::default();
        config.animation.frame_rate = Some(0);
        let err = SpinnerEngine::from_config(&config).unwrap_err();
        assert_eq!(err.field(), Some(Parameter::FrameRate));
    }
}

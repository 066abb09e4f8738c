// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the spinner engine in an Iced window.
//!
//! The `App` struct owns the engine, feeds it ticks from a time subscription
//! and window resizes from the event subscription, and keeps the last
//! rasterized frame for the view.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::spinner::{self, Effect, SpinnerEngine};
use crate::ui::design_tokens::sizing;
use crate::ui::raster;
use iced::widget::image;
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;
use std::path::Path;

/// Root Iced application state.
pub struct App {
    engine: SpinnerEngine,
    /// Size of the spinner area in pixels.
    canvas: (u32, u32),
    frame: Option<image::Handle>,
    /// Last rejected setting, or a settings-file warning at startup.
    error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("canvas", &self.canvas)
            .field("running", &self.engine.is_running())
            .field("error", &self.error)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Reads the settings named by the flags, falling back to defaults.
fn load_config(flags: &Flags) -> (Config, Option<String>) {
    match flags.config_path.as_deref().map(Path::new) {
        Some(path) => match config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                (Config::default(), Some(format!("{}: {}", path.display(), err)))
            }
        },
        None => config::load(),
    }
}

impl App {
    /// Initializes application state from the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, mut warning) = load_config(&flags);

        let engine = match SpinnerEngine::from_config(&config) {
            Ok(engine) => engine,
            Err(err) => {
                tracing::warn!(error = %err, "settings rejected, using defaults");
                warning = Some(err.to_string());
                SpinnerEngine::default()
            }
        };

        let mut app = Self {
            engine,
            canvas: (0, 0),
            frame: None,
            error: warning,
        };
        app.resize_canvas(Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Arrow Spinner")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Spinner(msg) => self.dispatch(msg),
            Message::WindowResized(size) => self.resize_canvas(size),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            engine: &self.engine,
            frame: self.frame.as_ref(),
            error: self.error.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.engine.is_running(),
                self.engine.frame_interval(),
            ),
        ])
    }

    fn dispatch(&mut self, msg: spinner::Message) {
        let is_tick = matches!(msg, spinner::Message::Tick);
        match self.engine.handle(msg) {
            Ok(effect) => {
                if !is_tick {
                    self.error = None;
                }
                if effect == Effect::Redraw {
                    self.redraw();
                }
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// The spinner takes whatever the control panel leaves.
    fn resize_canvas(&mut self, window: Size) {
        let width = (window.width - sizing::PANEL_WIDTH).max(0.0);
        let height = window.height.max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let canvas = (width as u32, height as u32);
        if canvas == self.canvas {
            return;
        }
        self.canvas = canvas;
        match self
            .engine
            .on_resize(f64::from(canvas.0), f64::from(canvas.1))
        {
            Ok(()) => self.redraw(),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Rasterizes the current render data. A stopped spinner keeps its last frame.
    fn redraw(&mut self) {
        let (width, height) = self.canvas;
        self.frame = raster::rasterize(&self.engine.render_data(), width, height)
            .map(raster::Frame::into_handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn app_with_settings(contents: &str) -> App {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, contents).expect("write settings");
        let flags = Flags {
            config_path: Some(path.to_string_lossy().into_owned()),
        };
        App::new(flags).0
    }

    #[test]
    fn boot_rasterizes_first_frame() {
        let app = app_with_settings("");
        assert!(app.frame.is_some());
        assert!(app.error.is_none());
        assert_eq!(
            app.canvas,
            (WINDOW_DEFAULT_WIDTH - sizing::PANEL_WIDTH as u32, WINDOW_DEFAULT_HEIGHT)
        );
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults_with_warning() {
        let app = app_with_settings("[shape]\ngap_ratio = 1.5\n");
        assert!(app.error.is_some());
        assert_eq!(app.engine.arrow_count(), 3);
    }

    #[test]
    fn rejected_control_value_is_reported_and_cleared() {
        let mut app = app_with_settings("");
        let _ = app.update(Message::Spinner(spinner::Message::SetGapRatio(0.0)));
        assert!(app.error.is_some());

        let _ = app.update(Message::Spinner(spinner::Message::SetGapRatio(0.3)));
        assert!(app.error.is_none());
    }

    #[test]
    fn ticks_keep_the_error_visible() {
        let mut app = app_with_settings("");
        let _ = app.update(Message::Spinner(spinner::Message::SetArrowCount(0)));
        let _ = app.update(Message::Spinner(spinner::Message::Tick));
        assert!(app.error.is_some());
    }

    #[test]
    fn narrow_window_collapses_spinner_area() {
        let mut app = app_with_settings("");
        let _ = app.update(Message::WindowResized(Size::new(100.0, 400.0)));
        assert_eq!(app.canvas, (0, 400));
        assert!(app.frame.is_none());
    }

    #[test]
    fn stop_keeps_last_frame() {
        let mut app = app_with_settings("");
        let _ = app.update(Message::Spinner(spinner::Message::Stop));
        assert!(!app.engine.is_running());
        assert!(app.frame.is_some());
    }
}

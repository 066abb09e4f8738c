// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::spinner;
use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the spinner engine (controls and the tick source).
    Spinner(spinner::Message),
    /// The window was resized; the spinner area is derived from it.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional settings file, read instead of the one in the config directory.
    pub config_path: Option<String>,
}

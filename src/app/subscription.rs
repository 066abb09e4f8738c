// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.

use super::Message;
use crate::spinner;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes; every other native event is left to the widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Periodic spinner tick, only while the clock runs.
pub fn create_tick_subscription(running: bool, interval: Duration) -> Subscription<Message> {
    if running {
        time::every(interval).map(|_| Message::Spinner(spinner::Message::Tick))
    } else {
        Subscription::none()
    }
}

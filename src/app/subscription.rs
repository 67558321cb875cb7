// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always routed; frame and tick streams only run while
//! the carousel or the loading screen has something pending.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Period of the deadline tick. Carousel timers fire with at most this lag.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes window resize and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(
            window::Event::Resized(size) | window::Event::Opened { size, .. },
        ) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Per-frame updates while a drag, an eased move or the loader is on screen.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick while any timer is armed.
pub fn create_tick_subscription(has_deadline: bool) -> Subscription<Message> {
    if has_deadline {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

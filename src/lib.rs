// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an infinite drag carousel built with the Iced GUI framework.
//!
//! The track renders three copies of the image list and silently re-centers
//! after every settled move, so dragging, wheeling and auto-play never reach
//! an edge. A branded loading screen covers the window until every slide
//! image has been fetched.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod loader;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;

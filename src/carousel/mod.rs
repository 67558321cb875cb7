// SPDX-License-Identifier: MPL-2.0
//! Infinite drag carousel.
//!
//! The base images are rendered three times in a row on a horizontal track.
//! The viewport starts on the middle copy, follows drags and wheel steps,
//! advances on its own every few seconds and silently jumps by one copy
//! whenever it drifts too close to either end.
//!
//! Everything in this module is independent of the GUI toolkit. Rendering
//! goes through the [`TrackSurface`] trait.

pub mod animation;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod mount;
pub mod slides;
pub mod surface;
pub mod timer;

pub use engine::{Carousel, Effect, Message, WheelDirection};
pub use geometry::LoopGeometry;
pub use layout::{ResponsiveLayout, SlideMetrics};
pub use mount::Page;
pub use slides::{Slide, SlideList};
pub use surface::{Motion, RecordingSurface, TrackSurface};
pub use timer::TimerId;

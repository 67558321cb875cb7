// SPDX-License-Identifier: MPL-2.0
//! User interface components: the carousel track, the loading screen and
//! the shared design tokens.

pub mod carousel_view;
pub mod design_tokens;
pub mod loader_view;
pub mod theming;
pub mod widgets;

// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views are plain functions of borrowed state following the Elm-style
//! "state down, messages up" pattern; all state lives in the app and the
//! flow.
//!
//! # Screens
//!
//! - [`cards`] - One card per greeting step
//!
//! # Shared Infrastructure
//!
//! - [`carousel`] - Photo carousel with placeholder slots
//! - [`widgets`] - Custom Iced widgets (confetti canvas)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod cards;
pub mod carousel;
pub mod design_tokens;
pub mod styles;
pub mod widgets;

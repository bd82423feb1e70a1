// SPDX-License-Identifier: MPL-2.0
//! `iced_greeting` is an interactive birthday greeting built with the Iced
//! GUI framework.
//!
//! The greeting walks through four cards (entry heart, wish, treats,
//! celebration). The celebration card shows an auto-advancing photo
//! carousel, plays a background song and bursts into confetti.

#![doc(html_root_url = "https://docs.rs/iced_greeting/0.1.0")]

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod media;
pub mod ui;

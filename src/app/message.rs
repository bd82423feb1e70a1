// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::audio::TrackSamples;
use crate::error::Error;
use crate::media::GalleryImage;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The heart on the entry screen was tapped.
    StartTapped,
    Next,
    Back,
    /// The "Auto-play photos" checkbox changed.
    AutoAdvanceToggled(bool),
    CarouselNext,
    CarouselPrevious,
    TogglePlayback,
    /// Manual confetti burst.
    Celebrate,
    /// Clock tick driving flow timers and confetti animation.
    Tick(Instant),
    /// The song finished downloading and decoding.
    SongReady(Result<TrackSamples, Error>),
    /// A carousel photo finished loading.
    ImageLoaded {
        index: usize,
        result: Result<GalleryImage, Error>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional data directory override (`--data-dir`), holds the media cache.
    pub data_dir: Option<String>,
    /// Start without opening an audio device.
    pub no_audio: bool,
    /// Fixed seed for the confetti generator.
    pub seed: Option<u64>,
    /// Lower the default log level to debug.
    pub verbose: bool,
}

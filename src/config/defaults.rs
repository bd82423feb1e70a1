// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Card**: Greeting content
//! - **Audio**: Background song source and volume
//! - **Gallery**: Carousel images and auto-advance period
//! - **Celebration**: Confetti batch size and timings

// ==========================================================================
// Card Defaults
// ==========================================================================

/// Name shown on the greeting and celebration cards.
pub const DEFAULT_RECIPIENT: &str = "Lakshita";

// ==========================================================================
// Audio Defaults
// ==========================================================================

/// Background song played on the celebration card.
pub const DEFAULT_SONG_SOURCE: &str = "https://github.com/aurelureofficial-lgtm/vandan/blob/main/ranjheya-ve-zain-zohaib-yratta-media_axDPrvzX.mp3?raw=true";

/// Default song volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.6;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Photos shown in the celebration carousel, in display order.
pub const DEFAULT_GALLERY_IMAGES: [&str; 4] = [
    "https://github.com/aurelureofficial-lgtm/vandan/blob/main/Image/1.webp?raw=true",
    "https://github.com/aurelureofficial-lgtm/vandan/blob/main/Image/2.webp?raw=true",
    "https://github.com/aurelureofficial-lgtm/vandan/blob/main/Image/3.webp?raw=true",
    "https://github.com/aurelureofficial-lgtm/vandan/blob/main/Image/4.webp?raw=true",
];

/// Carousel auto-advance period (in milliseconds).
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 3000;

/// Minimum carousel auto-advance period (in milliseconds).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

/// Maximum carousel auto-advance period (in milliseconds).
pub const MAX_CAROUSEL_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Celebration Defaults
// ==========================================================================

/// Number of confetti pieces generated per activation.
pub const DEFAULT_PARTICLE_COUNT: usize = 60;

/// Maximum number of confetti pieces per activation.
pub const MAX_PARTICLE_COUNT: usize = 500;

/// Time after which a confetti batch is discarded (in milliseconds).
pub const DEFAULT_PARTICLE_LIFETIME_MS: u64 = 6000;

/// Minimum confetti lifetime (in milliseconds).
pub const MIN_PARTICLE_LIFETIME_MS: u64 = 1000;

/// Maximum confetti lifetime (in milliseconds).
pub const MAX_PARTICLE_LIFETIME_MS: u64 = 30_000;

/// Delay between entering the celebration card and the confetti burst
/// (in milliseconds).
pub const DEFAULT_ACTIVATION_DELAY_MS: u64 = 250;

/// Maximum activation delay (in milliseconds).
pub const MAX_ACTIVATION_DELAY_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);

    // Gallery validation
    assert!(!DEFAULT_GALLERY_IMAGES.is_empty());
    assert!(MIN_CAROUSEL_INTERVAL_MS > 0);
    assert!(DEFAULT_CAROUSEL_INTERVAL_MS >= MIN_CAROUSEL_INTERVAL_MS);
    assert!(DEFAULT_CAROUSEL_INTERVAL_MS <= MAX_CAROUSEL_INTERVAL_MS);

    // Celebration validation
    assert!(DEFAULT_PARTICLE_COUNT > 0);
    assert!(DEFAULT_PARTICLE_COUNT <= MAX_PARTICLE_COUNT);
    assert!(DEFAULT_PARTICLE_LIFETIME_MS >= MIN_PARTICLE_LIFETIME_MS);
    assert!(DEFAULT_PARTICLE_LIFETIME_MS <= MAX_PARTICLE_LIFETIME_MS);
    assert!(DEFAULT_ACTIVATION_DELAY_MS <= MAX_ACTIVATION_DELAY_MS);
};

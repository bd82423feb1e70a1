// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading the greeting
//! content and media sources from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[card]` - Greeting content (recipient name)
//! - `[audio]` - Background song source, volume and looping
//! - `[gallery]` - Carousel photos and auto-advance settings
//! - `[celebration]` - Confetti batch size and timings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_GREETING_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_greeting::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.card.recipient = Some("Ada".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::flow::{FlowSettings, ParticleSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Greeting card content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardConfig {
    /// Name shown on the greeting and celebration cards.
    #[serde(default = "default_recipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
        }
    }
}

/// Background song settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Song location: a local path or an `http(s)` URL.
    #[serde(default = "default_song_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether the song restarts when it reaches the end.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            source: default_song_source(),
            volume: default_volume(),
            loop_enabled: default_true(),
        }
    }
}

/// Photo carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Photo locations (local paths or `http(s)` URLs), in display order.
    #[serde(default = "default_gallery_images")]
    pub images: Vec<String>,

    /// Whether the carousel advances on its own (and the song auto-starts).
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Auto-advance period in milliseconds.
    #[serde(
        default = "default_carousel_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images: default_gallery_images(),
            autoplay: default_true(),
            interval_ms: default_carousel_interval_ms(),
        }
    }
}

/// Confetti settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CelebrationConfig {
    /// Number of confetti pieces per burst.
    #[serde(
        default = "default_particle_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub particle_count: Option<usize>,

    /// Lifetime of a burst in milliseconds.
    #[serde(
        default = "default_particle_lifetime_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub lifetime_ms: Option<u64>,

    /// Delay before the burst when the celebration card opens, in milliseconds.
    #[serde(
        default = "default_activation_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub activation_delay_ms: Option<u64>,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            lifetime_ms: default_particle_lifetime_ms(),
            activation_delay_ms: default_activation_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub card: CardConfig,

    #[serde(default)]
    pub audio: AudioConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub celebration: CelebrationConfig,
}

impl Config {
    /// Recipient name, falling back to the default when unset or blank.
    #[must_use]
    pub fn recipient(&self) -> &str {
        match self.card.recipient.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_RECIPIENT,
        }
    }

    /// Song source, or `None` when the song is explicitly disabled with an
    /// empty string.
    #[must_use]
    pub fn song_source(&self) -> Option<&str> {
        match self.audio.source.as_deref() {
            Some(source) if source.trim().is_empty() => None,
            Some(source) => Some(source.trim()),
            None => Some(DEFAULT_SONG_SOURCE),
        }
    }

    /// Song volume clamped to the supported range.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.audio
            .volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }

    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        self.audio.loop_enabled.unwrap_or(true)
    }

    /// Gallery sources. An empty list falls back to the default gallery so
    /// the carousel always has at least one slot.
    #[must_use]
    pub fn gallery_images(&self) -> Vec<String> {
        let images: Vec<String> = self
            .gallery
            .images
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if images.is_empty() {
            default_gallery_images()
        } else {
            images
        }
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.gallery.autoplay.unwrap_or(true)
    }

    /// Builds the timing and sizing settings of the flow, clamping every
    /// value into its supported range.
    #[must_use]
    pub fn flow_settings(&self) -> FlowSettings {
        let interval_ms = self
            .gallery
            .interval_ms
            .unwrap_or(DEFAULT_CAROUSEL_INTERVAL_MS)
            .clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS);
        let count = self
            .celebration
            .particle_count
            .unwrap_or(DEFAULT_PARTICLE_COUNT)
            .clamp(1, MAX_PARTICLE_COUNT);
        let lifetime_ms = self
            .celebration
            .lifetime_ms
            .unwrap_or(DEFAULT_PARTICLE_LIFETIME_MS)
            .clamp(MIN_PARTICLE_LIFETIME_MS, MAX_PARTICLE_LIFETIME_MS);
        let delay_ms = self
            .celebration
            .activation_delay_ms
            .unwrap_or(DEFAULT_ACTIVATION_DELAY_MS)
            .min(MAX_ACTIVATION_DELAY_MS);

        FlowSettings {
            gallery_len: self.gallery_images().len(),
            auto_advance: self.autoplay(),
            carousel_period: Duration::from_millis(interval_ms),
            activation_delay: Duration::from_millis(delay_ms),
            particles: ParticleSettings {
                count,
                lifetime: Duration::from_millis(lifetime_ms),
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_recipient() -> Option<String> {
    Some(DEFAULT_RECIPIENT.to_string())
}

fn default_song_source() -> Option<String> {
    Some(DEFAULT_SONG_SOURCE.to_string())
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_gallery_images() -> Vec<String> {
    DEFAULT_GALLERY_IMAGES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_carousel_interval_ms() -> Option<u64> {
    Some(DEFAULT_CAROUSEL_INTERVAL_MS)
}

fn default_particle_count() -> Option<usize> {
    Some(DEFAULT_PARTICLE_COUNT)
}

fn default_particle_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_PARTICLE_LIFETIME_MS)
}

fn default_activation_delay_ms() -> Option<u64> {
    Some(DEFAULT_ACTIVATION_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            card: CardConfig {
                recipient: Some("Ada".to_string()),
            },
            audio: AudioConfig {
                source: Some("/music/song.mp3".to_string()),
                volume: Some(0.3),
                loop_enabled: Some(false),
            },
            gallery: GalleryConfig {
                images: vec!["a.png".to_string(), "b.png".to_string()],
                autoplay: Some(false),
                interval_ms: Some(1500),
            },
            celebration: CelebrationConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[card]\nrecipient = \"Grace\"\n").expect("write");

        let config = load_from_path(&config_path).expect("load");
        assert_eq!(config.recipient(), "Grace");
        assert_eq!(config.volume(), DEFAULT_VOLUME);
        assert_eq!(config.gallery_images().len(), DEFAULT_GALLERY_IMAGES.len());
        assert!(config.autoplay());
    }

    #[test]
    fn default_config_matches_reference_values() {
        let settings = Config::default().flow_settings();
        assert_eq!(settings.gallery_len, 4);
        assert!(settings.auto_advance);
        assert_eq!(settings.carousel_period, Duration::from_millis(3000));
        assert_eq!(settings.activation_delay, Duration::from_millis(250));
        assert_eq!(settings.particles.count, 60);
        assert_eq!(settings.particles.lifetime, Duration::from_millis(6000));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.audio.volume = Some(4.0);
        config.gallery.interval_ms = Some(1);
        config.celebration.particle_count = Some(0);
        config.celebration.lifetime_ms = Some(u64::MAX);

        assert_eq!(config.volume(), MAX_VOLUME);
        let settings = config.flow_settings();
        assert_eq!(
            settings.carousel_period,
            Duration::from_millis(MIN_CAROUSEL_INTERVAL_MS)
        );
        assert_eq!(settings.particles.count, 1);
        assert_eq!(
            settings.particles.lifetime,
            Duration::from_millis(MAX_PARTICLE_LIFETIME_MS)
        );
    }

    #[test]
    fn empty_gallery_falls_back_to_defaults() {
        let mut config = Config::default();
        config.gallery.images = vec!["   ".to_string()];
        assert_eq!(config.gallery_images().len(), DEFAULT_GALLERY_IMAGES.len());
    }

    #[test]
    fn blank_song_source_disables_audio() {
        let mut config = Config::default();
        config.audio.source = Some(String::new());
        assert!(config.song_source().is_none());

        config.audio.source = None;
        assert_eq!(config.song_source(), Some(DEFAULT_SONG_SOURCE));
    }

    #[test]
    fn blank_recipient_uses_default() {
        let mut config = Config::default();
        config.card.recipient = Some("  ".to_string());
        assert_eq!(config.recipient(), DEFAULT_RECIPIENT);
    }
}

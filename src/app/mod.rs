// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the flow, the audio
//! controller and the asset loaders.
//!
//! The `App` struct owns the greeting [`Flow`], the background song and the
//! carousel photos, and translates messages into flow operations and side
//! effects. Closing the window is the single teardown point: every flow
//! timer is cancelled and the audio device is released before the window
//! goes away.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::ClockMode;

use crate::audio::{self, AudioController, LoopingOutput, Volume};
use crate::config::{self, Config};
use crate::flow::{Event, Flow, Step};
use crate::media::{self, AssetSource};
use crate::ui::carousel::Slot;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    flow: Flow,
    audio: AudioController<LoopingOutput>,
    gallery: Vec<Slot>,
    /// Time of the last clock tick, used to draw confetti and the heart pulse.
    last_tick: Instant,
    started_at: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("step", &self.flow.step())
            .field("is_playing", &self.audio.is_playing())
            .field("gallery_len", &self.gallery.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
///
/// Close requests are not honored automatically; the app tears down its
/// timers and audio first, then closes the window itself.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, opens the audio device and kicks off the song
    /// and photo downloads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let settings = config.flow_settings();
        let flow = match flags.seed {
            Some(seed) => Flow::seeded(settings, seed),
            None => Flow::new(settings),
        };

        let output = open_output(&config, flags.no_audio);
        let song_task = match (&output, config.song_source()) {
            (Some(output), Some(song)) => {
                let source = AssetSource::parse(song);
                let format = output.format();
                let cache_dir = paths::get_media_cache_dir();
                Task::perform(
                    audio::load_track(source, format, cache_dir),
                    Message::SongReady,
                )
            }
            _ => Task::none(),
        };

        let images = config.gallery_images();
        let gallery = vec![Slot::Loading; images.len()];
        let image_tasks = images.into_iter().enumerate().map(|(index, value)| {
            Task::perform(
                media::load_gallery_image(AssetSource::parse(&value)),
                move |result| Message::ImageLoaded { index, result },
            )
        });

        let now = Instant::now();
        let app = App {
            config,
            flow,
            audio: AudioController::new(output),
            gallery,
            last_tick: now,
            started_at: now,
        };

        (app, Task::batch(std::iter::once(song_task).chain(image_tasks)))
    }

    fn title(&self) -> String {
        format!("Happy Birthday, {}!", self.config.recipient())
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(ClockMode::for_flow(&self.flow));

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartTapped => {
                if self.flow.step() == Step::Entry {
                    let event = self.flow.advance(Instant::now());
                    self.handle_flow_event(event);
                }
            }
            Message::Next => {
                let event = self.flow.advance(Instant::now());
                self.handle_flow_event(event);
            }
            Message::Back => {
                let event = self.flow.retreat(Instant::now());
                self.handle_flow_event(event);
            }
            Message::AutoAdvanceToggled(enabled) => {
                self.flow.set_auto_advance(enabled, Instant::now());
            }
            Message::CarouselNext => self.flow.next_image(),
            Message::CarouselPrevious => self.flow.previous_image(),
            Message::TogglePlayback => self.audio.toggle(),
            Message::Celebrate => {
                let now = Instant::now();
                self.last_tick = now;
                self.flow.celebrate(now);
            }
            Message::Tick(now) => {
                self.last_tick = now;
                self.flow.tick(now);
            }
            Message::SongReady(result) => self.handle_song_ready(result),
            Message::ImageLoaded { index, result } => {
                if let Some(slot) = self.gallery.get_mut(index) {
                    *slot = match result {
                        Ok(photo) => Slot::Ready(photo),
                        Err(err) => {
                            tracing::warn!(index, %err, "gallery photo unavailable");
                            Slot::Failed
                        }
                    };
                }
            }
            Message::WindowCloseRequested(id) => {
                self.shutdown();
                return window::close(id);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            flow: &self.flow,
            recipient: self.config.recipient(),
            is_playing: self.audio.is_playing(),
            gallery: &self.gallery,
            now: self.last_tick,
            started_at: self.started_at,
        })
    }

    fn handle_flow_event(&mut self, event: Event) {
        match event {
            Event::StartPlayback => self.audio.play(),
            Event::None => {}
        }
    }

    fn handle_song_ready(&mut self, result: crate::error::Result<audio::TrackSamples>) {
        let Some(output) = self.audio.handle_mut() else {
            return;
        };
        match result {
            Ok(samples) => output.load(samples),
            Err(err) => {
                tracing::warn!(%err, "background song unavailable");
                output.fail(err.to_string());
            }
        }
    }

    /// Cancels every flow timer and releases the audio device.
    fn shutdown(&mut self) {
        self.flow.shutdown();
        self.audio.release();
        tracing::info!("greeting closed");
    }
}

/// Opens the audio output unless audio is disabled or no song is configured.
/// A missing or unusable device is logged and leaves the greeting silent.
fn open_output(config: &Config, no_audio: bool) -> Option<LoopingOutput> {
    if no_audio {
        tracing::info!("audio disabled from the command line");
        return None;
    }
    config.song_source()?;

    match LoopingOutput::new(Volume::new(config.volume()), config.loop_enabled()) {
        Ok(output) => Some(output),
        Err(err) => {
            tracing::warn!(%err, "audio output unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_close_requests_for_teardown() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
        let min = settings.min_size.expect("min size is set");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }

    #[test]
    fn no_audio_flag_skips_the_device() {
        assert!(open_output(&Config::default(), true).is_none());
    }

    #[test]
    fn empty_song_source_skips_the_device() {
        let mut config = Config::default();
        config.audio.source = Some(String::new());
        assert!(open_output(&config, false).is_none());
    }
}

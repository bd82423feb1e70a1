// SPDX-License-Identifier: MPL-2.0
//! Looping song output using cpal.
//!
//! The whole decoded song sits in memory; the device callback walks through
//! it and wraps around when looping. Until a track is loaded, and whenever
//! playback is paused, the callback outputs silence.

use super::{OutputFormat, Playback, Volume};
use crate::error::{AudioError, Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Interleaved f32 samples normalized to [-1.0, 1.0].
pub type TrackSamples = Arc<Vec<f32>>;

/// Shared state between audio thread and main thread.
struct SharedState {
    /// Current volume (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,
    paused: AtomicBool,
    looping: AtomicBool,
}

impl SharedState {
    fn new(volume: Volume, looping: bool) -> Self {
        Self {
            volume_bits: AtomicU32::new(volume.value().to_bits()),
            paused: AtomicBool::new(true),
            looping: AtomicBool::new(looping),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn set_volume(&self, volume: Volume) {
        self.volume_bits
            .store(volume.value().to_bits(), Ordering::Relaxed);
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    fn is_looping(&self) -> bool {
        self.looping.load(Ordering::Relaxed)
    }
}

/// Read cursor over the decoded song.
#[derive(Debug, Default)]
struct Track {
    samples: TrackSamples,
    position: usize,
}

impl Track {
    /// Next sample, wrapping around at the end when `looping`.
    fn next_sample(&mut self, looping: bool) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        if self.position >= self.samples.len() {
            if !looping {
                return None;
            }
            self.position = 0;
        }
        let sample = self.samples[self.position];
        self.position += 1;
        Some(sample)
    }

    fn at_end(&self) -> bool {
        self.position >= self.samples.len()
    }
}

/// Fills `out` from the track, padding with silence.
fn fill<T: cpal::SizedSample + cpal::FromSample<f32>>(
    out: &mut [T],
    track: &mut Track,
    volume: f32,
    looping: bool,
) {
    for sample in out.iter_mut() {
        let value = track
            .next_sample(looping)
            .map_or(0.0, |s| (s * volume).clamp(-1.0, 0.999_999_9));
        *sample = T::from_sample(value);
    }
}

/// Load state of the song, as seen from the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TrackStatus {
    Loading,
    Ready,
    Failed(String),
}

/// The song output stream. Implements [`Playback`].
pub struct LoopingOutput {
    shared: Arc<SharedState>,
    track: Arc<Mutex<Track>>,
    status: TrackStatus,
    format: OutputFormat,
    /// The audio stream (kept alive to maintain playback).
    stream: Option<cpal::Stream>,
}

impl std::fmt::Debug for LoopingOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopingOutput")
            .field("status", &self.status)
            .field("format", &self.format)
            .field("live", &self.stream.is_some())
            .finish()
    }
}

impl LoopingOutput {
    /// Opens the default output device. The stream starts paused with no
    /// track loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is found, if the device
    /// configuration cannot be retrieved, or if the stream cannot be built.
    pub fn new(volume: Volume, looping: bool) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(Error::Audio(AudioError::NoOutputDevice))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::UnsupportedOutput(e.to_string()))?;

        let format = OutputFormat {
            sample_rate: supported_config.sample_rate(),
            channels: supported_config.channels(),
        };

        let shared = Arc::new(SharedState::new(volume, looping));
        let track = Arc::new(Mutex::new(Track::default()));

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => Self::build_stream::<f32>(
                &device,
                &supported_config.into(),
                Arc::clone(&track),
                Arc::clone(&shared),
            )?,
            cpal::SampleFormat::I16 => Self::build_stream::<i16>(
                &device,
                &supported_config.into(),
                Arc::clone(&track),
                Arc::clone(&shared),
            )?,
            cpal::SampleFormat::U16 => Self::build_stream::<u16>(
                &device,
                &supported_config.into(),
                Arc::clone(&track),
                Arc::clone(&shared),
            )?,
            other => {
                return Err(AudioError::UnsupportedOutput(format!("{other:?}")).into());
            }
        };

        tracing::info!(
            sample_rate = format.sample_rate,
            channels = format.channels,
            "audio output opened"
        );

        Ok(Self {
            shared,
            track,
            status: TrackStatus::Loading,
            format,
            stream: Some(stream),
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        track: Arc<Mutex<Track>>,
        shared: Arc<SharedState>,
    ) -> Result<cpal::Stream> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let silent = shared.is_paused();
                    let guard = if silent { None } else { track.lock().ok() };
                    match guard {
                        Some(mut guard) => {
                            fill(data, &mut guard, shared.volume(), shared.is_looping());
                        }
                        None => {
                            for sample in data.iter_mut() {
                                *sample = T::from_sample(0.0f32);
                            }
                        }
                    }
                },
                |err| {
                    tracing::warn!(%err, "audio output error");
                },
                None,
            )
            .map_err(|e| AudioError::UnsupportedOutput(e.to_string()).into())
    }

    /// Sample rate and channel count the decoder must produce.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Hands over the decoded song. Playback (if requested earlier) picks it
    /// up on the next device callback.
    pub fn load(&mut self, samples: TrackSamples) {
        if let Ok(mut track) = self.track.lock() {
            track.samples = samples;
            track.position = 0;
        }
        self.status = TrackStatus::Ready;
    }

    /// Marks the song as unavailable; later play requests are rejected.
    pub fn fail(&mut self, reason: String) {
        self.status = TrackStatus::Failed(reason);
    }

    pub fn set_volume(&self, volume: Volume) {
        self.shared.set_volume(volume);
    }
}

impl Playback for LoopingOutput {
    fn play(&mut self) -> Result<()> {
        if let TrackStatus::Failed(reason) = &self.status {
            return Err(AudioError::TrackUnavailable(reason.clone()).into());
        }
        let Some(stream) = self.stream.as_ref() else {
            return Err(AudioError::StartRejected("output released".to_string()).into());
        };

        if let Ok(mut track) = self.track.lock() {
            if track.at_end() {
                track.position = 0;
            }
        }

        stream
            .play()
            .map_err(|e| Error::Audio(AudioError::StartRejected(e.to_string())))?;
        self.shared.set_paused(false);
        Ok(())
    }

    fn pause(&mut self) {
        self.shared.set_paused(true);
        if let Some(stream) = self.stream.as_ref() {
            if let Err(err) = stream.pause() {
                tracing::debug!(%err, "stream pause not supported, muting instead");
            }
        }
    }

    fn release(&mut self) {
        self.shared.set_paused(true);
        self.stream = None;
    }
}

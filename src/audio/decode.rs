// SPDX-License-Identifier: MPL-2.0
//! Song decoding using FFmpeg.
//!
//! The song is decoded in one go into interleaved f32 samples at the rate
//! and channel count of the output device, so the device callback never has
//! to resample.

use super::output::TrackSamples;
use crate::error::{AudioError, Error, Result};
use crate::media::{self, AssetSource};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

static FFMPEG_INIT: Once = Once::new();

/// Sample layout expected by the output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
}

fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Fetches (if remote) and decodes the song off the UI thread.
pub async fn load_track(
    source: AssetSource,
    format: OutputFormat,
    cache_dir: Option<PathBuf>,
) -> Result<TrackSamples> {
    let path = media::cache_remote(&source, cache_dir.as_deref()).await?;
    let samples = tokio::task::spawn_blocking(move || decode_file(&path, format))
        .await
        .map_err(|e| AudioError::DecodingFailed(e.to_string()))??;
    tracing::info!(
        source = %source,
        seconds = samples.len() as f64
            / (f64::from(format.sample_rate) * f64::from(format.channels)),
        "song decoded"
    );
    Ok(Arc::new(samples))
}

/// Decodes the best audio stream of `path` into interleaved f32 samples in
/// the requested format.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, has no audio stream, or
/// cannot be decoded.
pub fn decode_file(path: &Path, format: OutputFormat) -> Result<Vec<f32>> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| AudioError::TrackUnavailable(format!("Failed to open song: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| AudioError::TrackUnavailable("No audio stream found".to_string()))?;
    let audio_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| AudioError::DecodingFailed(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .audio()
        .map_err(|e| AudioError::DecodingFailed(format!("Failed to create audio decoder: {e}")))?;

    let output_channel_layout = match format.channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO, // Downmix anything else to stereo
    };
    let output_channels = output_channel_layout.channels() as u16;

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        output_channel_layout,
        format.sample_rate,
    )
    .map_err(|e| AudioError::DecodingFailed(format!("Failed to create resampler: {e}")))?;

    let mut samples = Vec::new();
    let mut drain = |decoder: &mut ffmpeg_next::decoder::Audio, samples: &mut Vec<f32>| {
        let mut decoded = ffmpeg_next::frame::Audio::empty();
        while decoder.receive_frame(&mut decoded).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            match resampler.run(&decoded, &mut resampled) {
                Ok(_) => samples.extend(extract_samples(&resampled, output_channels)),
                Err(e) => tracing::debug!(%e, "skipping frame that failed to resample"),
            }
        }
    };

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            tracing::debug!(%e, "skipping undecodable audio packet");
            continue;
        }
        drain(&mut decoder, &mut samples);
    }

    if decoder.send_eof().is_ok() {
        drain(&mut decoder, &mut samples);
    }

    if samples.is_empty() {
        return Err(AudioError::DecodingFailed("Song contains no audio".to_string()).into());
    }

    Ok(upmix(samples, output_channels, format.channels))
}

/// Extracts f32 samples from a resampled audio frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16) -> Vec<f32> {
    let data = frame.data(0);
    let sample_count = frame.samples() * channels as usize;

    data.chunks_exact(4)
        .take(sample_count)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

/// Spreads decoded frames over a device with more channels than the decoder
/// produced. Extra channels repeat the last decoded one.
fn upmix(samples: Vec<f32>, decoded_channels: u16, device_channels: u16) -> Vec<f32> {
    if device_channels <= decoded_channels || decoded_channels == 0 {
        return samples;
    }
    let decoded = decoded_channels as usize;
    let device = device_channels as usize;
    let mut out = Vec::with_capacity(samples.len() / decoded * device);
    for frame in samples.chunks_exact(decoded) {
        out.extend_from_slice(frame);
        let last = frame[decoded - 1];
        out.extend(std::iter::repeat_n(last, device - decoded));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upmix_keeps_matching_layouts() {
        let samples = vec![0.1, 0.2, 0.3, 0.4];
        assert_eq!(upmix(samples.clone(), 2, 2), samples);
        assert_eq!(upmix(samples.clone(), 2, 1), samples);
    }

    #[test]
    fn upmix_repeats_last_channel() {
        let samples = vec![0.1, 0.2, 0.3, 0.4];
        assert_eq!(
            upmix(samples, 2, 4),
            vec![0.1, 0.2, 0.2, 0.2, 0.3, 0.4, 0.4, 0.4]
        );
    }

    #[test]
    fn decode_fails_for_nonexistent_file() {
        let format = OutputFormat {
            sample_rate: 48_000,
            channels: 2,
        };
        let result = decode_file(Path::new("/nonexistent/song.mp3"), format);
        assert!(matches!(
            result,
            Err(Error::Audio(AudioError::TrackUnavailable(_)))
        ));
    }

    #[tokio::test]
    async fn load_track_fails_for_missing_local_file() {
        let format = OutputFormat {
            sample_rate: 44_100,
            channels: 2,
        };
        let source = AssetSource::parse("/nonexistent/song.mp3");
        assert!(load_track(source, format, None).await.is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Audio(AudioError),
    Asset(String),
}

/// Specific failures of the background song pipeline.
///
/// None of these ever reach the user: the flow keeps running and the song
/// simply stays silent until the user presses play again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No output device is available on this machine.
    NoOutputDevice,

    /// The output device rejected the stream configuration.
    UnsupportedOutput(String),

    /// The output stream refused to start.
    StartRejected(String),

    /// The song could not be fetched or decoded.
    TrackUnavailable(String),

    /// Decoding failed part way through the file.
    DecodingFailed(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "No audio output device found"),
            AudioError::UnsupportedOutput(msg) => write!(f, "Unsupported audio output: {}", msg),
            AudioError::StartRejected(msg) => write!(f, "Playback start rejected: {}", msg),
            AudioError::TrackUnavailable(msg) => write!(f, "Track unavailable: {}", msg),
            AudioError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Asset(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Asset(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_wraps_into_error() {
        let err: Error = AudioError::NoOutputDevice.into();
        assert!(matches!(err, Error::Audio(AudioError::NoOutputDevice)));
        assert_eq!(
            format!("{}", err),
            "Audio Error: No audio output device found"
        );
    }

    #[test]
    fn start_rejected_keeps_reason() {
        let err = AudioError::StartRejected("device busy".to_string());
        assert!(format!("{}", err).contains("device busy"));
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml must fail").into();
        assert!(matches!(err, Error::Config(_)));
    }
}

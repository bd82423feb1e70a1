// SPDX-License-Identifier: MPL-2.0
//! Background song playback.
//!
//! [`AudioController`] owns the single audio resource of the greeting. The
//! resource is created once when the window opens and released once when it
//! closes; in between, transport requests go through [`Playback`]. Start
//! failures (no device, track failed to load, stream refused to start) are
//! swallowed: the song just stays silent until the user presses play again.

mod decode;
mod output;
mod volume;

pub use decode::{decode_file, load_track, OutputFormat};
pub use output::{LoopingOutput, TrackSamples};
pub use volume::Volume;

use crate::error::Result;

/// Transport operations of a platform audio resource.
pub trait Playback {
    /// Requests playback start. May be rejected.
    fn play(&mut self) -> Result<()>;

    /// Stops playback, keeping the current position.
    fn pause(&mut self);

    /// Stops playback for good and frees the underlying device resources.
    fn release(&mut self);
}

/// Owner of the background song.
#[derive(Debug)]
pub struct AudioController<P: Playback> {
    handle: Option<P>,
    is_playing: bool,
}

impl<P: Playback> AudioController<P> {
    /// Takes ownership of the audio resource. `None` means audio is
    /// unavailable; every request is then a silent no-op.
    pub fn new(handle: Option<P>) -> Self {
        Self {
            handle,
            is_playing: false,
        }
    }

    /// Requests playback. `is_playing` is only set when the start request
    /// succeeds.
    pub fn play(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        match handle.play() {
            Ok(()) => self.is_playing = true,
            Err(err) => tracing::debug!(%err, "playback start ignored"),
        }
    }

    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
        }
        self.is_playing = false;
    }

    /// Plays when paused, pauses when playing.
    pub fn toggle(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pauses and drops the resource. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.pause();
            handle.release();
            tracing::debug!("audio resource released");
        }
        self.is_playing = false;
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the resource is still held.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Mutable access to the resource (e.g. to hand it a decoded track).
    pub fn handle_mut(&mut self) -> Option<&mut P> {
        self.handle.as_mut()
    }
}

impl<P: Playback> Drop for AudioController<P> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AudioError, Error};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Calls {
        play: usize,
        pause: usize,
        release: usize,
    }

    struct FakePlayback {
        calls: Rc<RefCell<Calls>>,
        reject: bool,
    }

    impl Playback for FakePlayback {
        fn play(&mut self) -> Result<()> {
            self.calls.borrow_mut().play += 1;
            if self.reject {
                Err(Error::Audio(AudioError::StartRejected("policy".into())))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.calls.borrow_mut().pause += 1;
        }

        fn release(&mut self) {
            self.calls.borrow_mut().release += 1;
        }
    }

    fn controller(reject: bool) -> (AudioController<FakePlayback>, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let fake = FakePlayback {
            calls: Rc::clone(&calls),
            reject,
        };
        (AudioController::new(Some(fake)), calls)
    }

    #[test]
    fn play_sets_playing_on_success() {
        let (mut audio, calls) = controller(false);
        audio.play();
        assert!(audio.is_playing());
        assert_eq!(calls.borrow().play, 1);
    }

    #[test]
    fn rejected_play_is_swallowed() {
        let (mut audio, calls) = controller(true);
        audio.play();
        assert!(!audio.is_playing());
        assert_eq!(calls.borrow().play, 1);
    }

    #[test]
    fn toggle_alternates_play_and_pause() {
        let (mut audio, calls) = controller(false);
        audio.toggle();
        assert!(audio.is_playing());
        audio.toggle();
        assert!(!audio.is_playing());
        assert_eq!(calls.borrow().play, 1);
        assert_eq!(calls.borrow().pause, 1);
    }

    #[test]
    fn toggle_after_rejection_retries_play() {
        let (mut audio, calls) = controller(true);
        audio.toggle();
        audio.toggle();
        assert_eq!(calls.borrow().play, 2);
        assert_eq!(calls.borrow().pause, 0);
    }

    #[test]
    fn release_happens_exactly_once() {
        let (mut audio, calls) = controller(false);
        audio.play();
        audio.release();
        audio.release();
        drop(audio);

        let calls = calls.borrow();
        assert_eq!(calls.release, 1);
        assert_eq!(calls.pause, 1);
    }

    #[test]
    fn drop_releases_resource() {
        let (audio, calls) = controller(false);
        drop(audio);
        assert_eq!(calls.borrow().release, 1);
    }

    #[test]
    fn released_controller_ignores_requests() {
        let (mut audio, calls) = controller(false);
        audio.release();
        audio.play();
        audio.toggle();
        assert!(!audio.is_playing());
        assert!(!audio.is_live());
        assert_eq!(calls.borrow().play, 0);
    }

    #[test]
    fn missing_resource_is_silent_no_op() {
        let mut audio: AudioController<FakePlayback> = AudioController::new(None);
        audio.play();
        assert!(!audio.is_playing());
        audio.pause();
        audio.release();
    }
}

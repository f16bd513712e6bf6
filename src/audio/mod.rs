/// Audio playback using rodio
use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::synth::NOTES;

pub mod bank;

use bank::SoundBank;

/// Shared handle to one encoded clip; lets a `Cursor` read the bank's
/// buffer without copying it on every keypress.
struct Clip(Arc<Vec<u8>>);

impl AsRef<[u8]> for Clip {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lifecycle of the sound bank. Kept as an explicit state so repeated or
/// early calls during a build are well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankState {
    Uninitialized,
    Initializing,
    Ready,
}

/// Plays catalog notes through the default output device.
///
/// The bank is built lazily on the first `play_note`, or eagerly through
/// `initialize` (intended for the first user gesture). On machines with no
/// audio device the engine still builds its bank and simply stays silent.
pub struct AudioEngine {
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    bank: Option<SoundBank>,
    state: BankState,
}

impl AudioEngine {
    pub fn new() -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(e) => {
                log::warn!("No audio output device available: {}", e);
                (None, None)
            }
        };

        Self {
            _stream: stream,
            handle,
            bank: None,
            state: BankState::Uninitialized,
        }
    }

    /// Builds the sound bank if it is not already built. Idempotent: a
    /// second call while Ready or Initializing does nothing.
    pub fn initialize(&mut self) {
        if self.state != BankState::Uninitialized {
            return;
        }

        self.state = BankState::Initializing;
        match SoundBank::build_all(&NOTES) {
            Ok(bank) => {
                log::info!("Sound bank ready: {} clips", bank.len());
                self.bank = Some(bank);
                self.state = BankState::Ready;
            }
            Err(e) => {
                log::error!("Sound bank build failed: {}", e);
                self.state = BankState::Uninitialized;
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state == BankState::Ready
    }

    pub fn state(&self) -> BankState {
        self.state
    }

    /// Triggers playback of the named note, building the bank first if
    /// needed. Fire-and-forget: overlapping notes mix freely and the call
    /// never blocks on playback. An unknown name is logged and skipped.
    pub fn play_note(&mut self, name: &str) {
        if !self.is_initialized() {
            self.initialize();
        }

        let clip = match self.bank.as_ref().and_then(|bank| bank.get(name)) {
            Some(clip) => clip,
            None => {
                log::warn!("Sound not found for note: {}", name);
                return;
            }
        };

        let handle = match &self.handle {
            Some(handle) => handle,
            None => return, // no device; lookup already validated the note
        };

        if let Ok(sink) = Sink::try_new(handle) {
            let cursor = Cursor::new(Clip(clip));
            match Decoder::new_wav(cursor) {
                Ok(source) => {
                    sink.append(source);
                    sink.detach();
                }
                Err(e) => log::warn!("Failed to decode clip for {}: {}", name, e),
            }
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sound bank - one encoded WAV clip per catalog note
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::synth::{self, Note, SynthError};
use crate::wav::{self, EncodeError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BankError {
    Synth(SynthError),
    Encode(EncodeError),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Synth(e) => write!(f, "failed to synthesize clip: {}", e),
            BankError::Encode(e) => write!(f, "failed to encode clip: {}", e),
        }
    }
}

impl Error for BankError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BankError::Synth(e) => Some(e),
            BankError::Encode(e) => Some(e),
        }
    }
}

impl From<SynthError> for BankError {
    fn from(e: SynthError) -> Self {
        BankError::Synth(e)
    }
}

impl From<EncodeError> for BankError {
    fn from(e: EncodeError) -> Self {
        BankError::Encode(e)
    }
}

/// Holds the playable clip for every note, keyed by note name.
///
/// Clips are immutable once built; rebuilding replaces the whole bank.
pub struct SoundBank {
    clips: HashMap<&'static str, Arc<Vec<u8>>>,
}

impl SoundBank {
    /// Renders and encodes a clip for each note in `notes`.
    pub fn build_all(notes: &'static [Note]) -> Result<Self, BankError> {
        let mut clips = HashMap::with_capacity(notes.len());
        for note in notes {
            let samples =
                synth::synthesize(note.frequency, synth::TONE_DURATION, synth::SAMPLE_RATE)?;
            let bytes = wav::encode(&samples, synth::SAMPLE_RATE, 1)?;
            clips.insert(note.name, Arc::new(bytes));
        }
        Ok(Self { clips })
    }

    pub fn get(&self, name: &str) -> Option<Arc<Vec<u8>>> {
        self.clips.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

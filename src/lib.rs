/// PLINK - A desktop piano soundboard library
///
/// This library provides the core components for building the soundboard:
/// - A fixed catalog of notes with synthesized decaying sine tones
/// - WAV encoding for in-memory playback buffers
/// - A sound bank and playback engine for fire-and-forget audio
/// - Grid state and a timer-driven autoplay engine

pub mod audio;
pub mod board;
pub mod synth;
pub mod wav;

// Re-export commonly used types
pub use audio::bank::{BankError, SoundBank};
pub use audio::{AudioEngine, BankState};
pub use board::autoplay::{Autoplay, AutoplayEvent, AUTOPLAY_INTERVAL};
pub use board::{Board, KEY_FLASH, MAX_COLUMNS, MIN_COLUMNS, ROWS};
pub use synth::{note_for_cell, synthesize, Note, SynthError, NOTES, SAMPLE_RATE, TONE_DURATION};
pub use wav::{encode, EncodeError};

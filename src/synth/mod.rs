/// Tone synthesis - the note catalog and the decaying sine generator
use std::error::Error;
use std::fmt;

/// Sample rate used for every generated clip.
pub const SAMPLE_RATE: u32 = 44_100;

/// Length of each synthesized tone in seconds.
pub const TONE_DURATION: f32 = 2.0;

/// A named pitch with its frequency in standard tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub name: &'static str,
    pub frequency: f32,
}

/// The full catalog: 21 notes spanning C3 to B5.
pub const NOTES: [Note; 21] = [
    Note { name: "C3", frequency: 130.81 },
    Note { name: "D3", frequency: 146.83 },
    Note { name: "E3", frequency: 164.81 },
    Note { name: "F3", frequency: 174.61 },
    Note { name: "G3", frequency: 196.00 },
    Note { name: "A3", frequency: 220.00 },
    Note { name: "B3", frequency: 246.94 },
    Note { name: "C4", frequency: 261.63 }, // Middle C
    Note { name: "D4", frequency: 293.66 },
    Note { name: "E4", frequency: 329.63 },
    Note { name: "F4", frequency: 349.23 },
    Note { name: "G4", frequency: 392.00 },
    Note { name: "A4", frequency: 440.00 }, // A440 tuning reference
    Note { name: "B4", frequency: 493.88 },
    Note { name: "C5", frequency: 523.25 },
    Note { name: "D5", frequency: 587.33 },
    Note { name: "E5", frequency: 659.25 },
    Note { name: "F5", frequency: 698.46 },
    Note { name: "G5", frequency: 783.99 },
    Note { name: "A5", frequency: 880.00 },
    Note { name: "B5", frequency: 987.77 },
];

impl Note {
    pub fn find(name: &str) -> Option<&'static Note> {
        NOTES.iter().find(|n| n.name == name)
    }
}

/// Maps a grid cell to its note; cells beyond the catalog wrap around.
pub fn note_for_cell(index: usize) -> &'static Note {
    &NOTES[index % NOTES.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SynthError {
    InvalidFrequency(f32),
    InvalidDuration(f32),
    InvalidSampleRate(u32),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidFrequency(hz) => {
                write!(f, "frequency must be positive, got {} Hz", hz)
            }
            SynthError::InvalidDuration(secs) => {
                write!(f, "duration must be positive, got {} s", secs)
            }
            SynthError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be positive, got {} Hz", rate)
            }
        }
    }
}

impl Error for SynthError {}

/// Generates a pure sine tone at `frequency_hz` with an exponential decay.
///
/// Returns exactly `round(duration_secs * sample_rate)` samples, each in
/// [-1, 1]. Deterministic: the same inputs always yield the same buffer.
pub fn synthesize(
    frequency_hz: f32,
    duration_secs: f32,
    sample_rate: u32,
) -> Result<Vec<f32>, SynthError> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(SynthError::InvalidFrequency(frequency_hz));
    }
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(SynthError::InvalidDuration(duration_secs));
    }
    if sample_rate == 0 {
        return Err(SynthError::InvalidSampleRate(sample_rate));
    }

    let num_samples = (duration_secs * sample_rate as f32).round() as usize;
    let samples = (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * std::f32::consts::PI * frequency_hz * t).sin() * (-3.0 * t).exp()
        })
        .collect();

    Ok(samples)
}

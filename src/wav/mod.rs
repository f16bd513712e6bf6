/// WAV encoding - wraps f32 samples into a valid in-memory PCM WAV buffer
use std::error::Error;
use std::fmt;

const HEADER_LEN: usize = 44;
const BITS_PER_SAMPLE: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    EmptySamples,
    InvalidSampleRate,
    InvalidChannelCount,
    /// Sample count is not a multiple of the channel count.
    RaggedInterleave { samples: usize, channels: u16 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EmptySamples => write!(f, "cannot encode an empty sample buffer"),
            EncodeError::InvalidSampleRate => write!(f, "sample rate must be positive"),
            EncodeError::InvalidChannelCount => write!(f, "channel count must be positive"),
            EncodeError::RaggedInterleave { samples, channels } => write!(
                f,
                "{} samples cannot be interleaved across {} channels",
                samples, channels
            ),
        }
    }
}

impl Error for EncodeError {}

/// Encodes interleaved f32 samples as an uncompressed 16-bit PCM WAV file.
///
/// The output is a 44-byte RIFF/WAVE header followed by the data chunk, for
/// a total of exactly `44 + samples.len() * 2` bytes. Each sample is clamped
/// to [-1, 1] and quantized with the asymmetric scaling inherited from the
/// generator this replaces: negative values scale by 32768, non-negative by
/// 32767, truncating toward zero.
pub fn encode(samples: &[f32], sample_rate: u32, channels: u16) -> Result<Vec<u8>, EncodeError> {
    if samples.is_empty() {
        return Err(EncodeError::EmptySamples);
    }
    if sample_rate == 0 {
        return Err(EncodeError::InvalidSampleRate);
    }
    if channels == 0 {
        return Err(EncodeError::InvalidChannelCount);
    }
    if samples.len() % channels as usize != 0 {
        return Err(EncodeError::RaggedInterleave {
            samples: samples.len(),
            channels,
        });
    }

    let byte_rate = sample_rate * channels as u32 * (BITS_PER_SAMPLE as u32) / 8;
    let block_align = channels * BITS_PER_SAMPLE / 8;
    let data_size = samples.len() as u32 * 2;
    let riff_size = 36 + data_size;

    let mut buf = Vec::with_capacity(HEADER_LEN + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&riff_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());

    for &s in samples {
        buf.extend_from_slice(&quantize(s).to_le_bytes());
    }

    Ok(buf)
}

fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled as i16
}

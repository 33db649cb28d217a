use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::byte_order::ByteOrder;
use crate::error::Error;
use crate::source::FormatSource;

pub(crate) const DEFAULT_SIGNED: bool = true;
pub(crate) const DEFAULT_FLOAT: bool = false;
pub(crate) const DEFAULT_BIT_DEPTH: u32 = 16;
pub(crate) const DEFAULT_CHANNELS: usize = 2;
pub(crate) const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub(crate) const DEFAULT_INTERLEAVED: bool = true;
pub(crate) const DEFAULT_SAMPLES_PER_FRAME: usize = 1024;

/// A format descriptor where any field may be absent.
///
/// This is what callers construct, deserialize or collect from a
/// [FormatSource]. It is turned into a complete [Format][crate::Format]
/// through [Format::normalize][crate::Format::normalize], which fills in
/// absent fields from [PartialFormat::DEFAULT].
///
/// # Examples
///
/// ```rust
/// use pcm_core::{ByteOrder, PartialFormat};
///
/// let partial = PartialFormat::new()
///     .with_bit_depth(16)
///     .with_byte_order(ByteOrder::Be);
///
/// assert_eq!(partial.bit_depth, Some(16));
/// assert_eq!(partial.channels, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialFormat {
    /// Integer samples are two's complement signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,
    /// Samples are IEEE floating point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<bool>,
    /// Bits per sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u32>,
    /// Byte order of multi-byte samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_order: Option<ByteOrder>,
    /// Number of channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<usize>,
    /// Frames per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    /// Samples are stored frame by frame rather than channel by channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interleaved: Option<bool>,
    /// Frame buffer sizing hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_per_frame: Option<usize>,
}

impl PartialFormat {
    /// The default format: signed 16-bit integers in host byte order,
    /// interleaved stereo at 44100 Hz with 1024 samples per frame.
    pub const DEFAULT: PartialFormat = PartialFormat {
        signed: Some(DEFAULT_SIGNED),
        float: Some(DEFAULT_FLOAT),
        bit_depth: Some(DEFAULT_BIT_DEPTH),
        byte_order: Some(ByteOrder::NATIVE),
        channels: Some(DEFAULT_CHANNELS),
        sample_rate: Some(DEFAULT_SAMPLE_RATE),
        interleaved: Some(DEFAULT_INTERLEAVED),
        samples_per_frame: Some(DEFAULT_SAMPLES_PER_FRAME),
    };

    /// Construct a partial format with every field absent.
    pub const fn new() -> Self {
        Self {
            signed: None,
            float: None,
            bit_depth: None,
            byte_order: None,
            channels: None,
            sample_rate: None,
            interleaved: None,
            samples_per_frame: None,
        }
    }

    /// Collect every field a source declares.
    ///
    /// Fields the source doesn't declare stay absent, defaults are *not*
    /// filled in.
    ///
    /// ```rust
    /// use pcm_core::PartialFormat;
    ///
    /// let samples: &[f32] = &[0.0, 0.5];
    /// let partial = PartialFormat::from_source(samples);
    ///
    /// assert_eq!(partial.float, Some(true));
    /// assert_eq!(partial.bit_depth, Some(32));
    /// assert_eq!(partial.channels, None);
    ///
    /// assert_eq!(PartialFormat::from_source(&PartialFormat::new()), PartialFormat::new());
    /// ```
    pub fn from_source<S>(source: &S) -> Self
    where
        S: ?Sized + FormatSource,
    {
        Self {
            signed: source.signed(),
            float: source.float(),
            bit_depth: source.bit_depth(),
            byte_order: source.byte_order(),
            channels: source.channels(),
            sample_rate: source.sample_rate(),
            interleaved: source.interleaved(),
            samples_per_frame: source.samples_per_frame(),
        }
    }

    /// Test if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Set whether integer samples are signed.
    pub const fn with_signed(mut self, signed: bool) -> Self {
        self.signed = Some(signed);
        self
    }

    /// Set whether samples are floating point.
    pub const fn with_float(mut self, float: bool) -> Self {
        self.float = Some(float);
        self
    }

    /// Set the bit depth.
    pub const fn with_bit_depth(mut self, bit_depth: u32) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    /// Set the byte order.
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }

    /// Set the channel count.
    pub const fn with_channels(mut self, channels: usize) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the sample rate.
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Set whether samples are interleaved.
    pub const fn with_interleaved(mut self, interleaved: bool) -> Self {
        self.interleaved = Some(interleaved);
        self
    }

    /// Set the number of samples per frame.
    pub const fn with_samples_per_frame(mut self, samples_per_frame: usize) -> Self {
        self.samples_per_frame = Some(samples_per_frame);
        self
    }
}

impl FromStr for PartialFormat {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::id::parse_id(s)
    }
}

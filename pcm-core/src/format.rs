use std::fmt;
use std::hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::byte_order::{ByteOrder, Endian};
use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::partial::{self, PartialFormat};
use crate::source::FormatSource;

/// A complete, normalized format descriptor.
///
/// A format can only be constructed through normalization, which guarantees
/// that:
///
/// * Float formats are signed and have a bit depth of 32 or 64.
/// * Formats with a bit depth of 8 or less have no byte order.
/// * The calculated fields ([sample size][Format::sample_size],
///   [encoding][Format::encoding], [max int][Format::max_int] and
///   [id][Format::id]) agree with the rest of the descriptor.
///
/// Two formats are equal if their [ids][Format::id] are equal. Note that the
/// [samples per frame][Format::samples_per_frame] hint is not part of the
/// id.
///
/// # Examples
///
/// ```rust
/// use pcm_core::{ByteOrder, Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_bit_depth(8).with_byte_order(ByteOrder::Be))?;
///
/// assert_eq!(format.byte_order(), ByteOrder::None);
/// assert_eq!(format.id(), "S_8__2_44100_I");
/// assert_eq!(format.min(), -128.0);
/// assert_eq!(format.max(), 127.0);
/// # Ok::<_, pcm_core::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PartialFormat", into = "PartialFormat")]
pub struct Format {
    signed: bool,
    float: bool,
    bit_depth: u32,
    byte_order: ByteOrder,
    channels: usize,
    sample_rate: u32,
    interleaved: bool,
    samples_per_frame: usize,
    encoding: Encoding,
    max_int: u64,
    id: String,
}

impl Format {
    /// Normalize a format from the fields declared by `source`.
    ///
    /// Absent fields are taken from [PartialFormat::DEFAULT]. A float format
    /// is forced to be signed with a bit depth of 32, unless 64 was asked
    /// for. A format with a bit depth of 8 or less loses its byte order.
    ///
    /// Normalizing an already normalized format returns a copy of it.
    ///
    /// # Errors
    ///
    /// Errors with [Error::InvalidFormatField] if the resulting format can't
    /// describe a buffer, such as an integer bit depth other than 8, 16, 24
    /// or 32, zero channels or a multi-byte format without a byte order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pcm_core::{Format, PartialFormat};
    ///
    /// let format = Format::normalize(&PartialFormat::new().with_float(true).with_bit_depth(16))?;
    /// assert_eq!(format.bit_depth(), 32);
    /// assert!(format.is_signed());
    ///
    /// assert!(Format::normalize(&PartialFormat::new().with_channels(0)).is_err());
    /// # Ok::<_, pcm_core::Error>(())
    /// ```
    pub fn normalize<S>(source: &S) -> Result<Self>
    where
        S: ?Sized + FormatSource,
    {
        if let Some(format) = source.as_format() {
            return Ok(format.clone());
        }

        let mut signed = source.signed().unwrap_or(partial::DEFAULT_SIGNED);
        let float = source.float().unwrap_or(partial::DEFAULT_FLOAT);
        let mut bit_depth = source.bit_depth().unwrap_or(partial::DEFAULT_BIT_DEPTH);
        let mut byte_order = source.byte_order().unwrap_or(ByteOrder::NATIVE);
        let channels = source.channels().unwrap_or(partial::DEFAULT_CHANNELS);
        let sample_rate = source.sample_rate().unwrap_or(partial::DEFAULT_SAMPLE_RATE);
        let interleaved = source.interleaved().unwrap_or(partial::DEFAULT_INTERLEAVED);
        let samples_per_frame = source
            .samples_per_frame()
            .unwrap_or(partial::DEFAULT_SAMPLES_PER_FRAME);

        if float {
            bit_depth = if bit_depth == 64 { 64 } else { 32 };
            signed = true;
        }

        if bit_depth <= 8 {
            byte_order = ByteOrder::None;
        }

        if !float && !matches!(bit_depth, 8 | 16 | 24 | 32) {
            return Err(Error::invalid_field("bitDepth", bit_depth));
        }

        if channels == 0 {
            return Err(Error::invalid_field("channels", channels));
        }

        if sample_rate == 0 {
            return Err(Error::invalid_field("sampleRate", sample_rate));
        }

        if samples_per_frame == 0 {
            return Err(Error::invalid_field("samplesPerFrame", samples_per_frame));
        }

        let encoding = Encoding::new(float, signed, bit_depth, byte_order)
            .ok_or_else(|| Error::invalid_field("byteOrder", "none"))?;

        Ok(Self::from_parts(
            signed,
            float,
            bit_depth,
            byte_order,
            channels,
            sample_rate,
            interleaved,
            samples_per_frame,
            encoding,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn from_parts(
        signed: bool,
        float: bool,
        bit_depth: u32,
        byte_order: ByteOrder,
        channels: usize,
        sample_rate: u32,
        interleaved: bool,
        samples_per_frame: usize,
        encoding: Encoding,
    ) -> Self {
        let id = crate::id::stringify(
            float,
            signed,
            bit_depth,
            byte_order,
            channels,
            sample_rate,
            interleaved,
        );

        Self {
            signed,
            float,
            bit_depth,
            byte_order,
            channels,
            sample_rate,
            interleaved,
            samples_per_frame,
            encoding,
            max_int: 1u64 << (bit_depth - 1),
            id,
        }
    }

    /// Integer samples are two's complement signed. Always `true` for float
    /// formats.
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Samples are IEEE floating point.
    #[inline]
    pub fn is_float(&self) -> bool {
        self.float
    }

    /// Bits per sample.
    #[inline]
    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Byte order of multi-byte samples.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Number of channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Frames per second. This isn't used when translating samples.
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples are stored frame by frame (`[l, r, l, r]`) rather than
    /// channel by channel (`[l, l, r, r]`).
    #[inline]
    pub fn is_interleaved(&self) -> bool {
        self.interleaved
    }

    /// Frame buffer sizing hint.
    #[inline]
    pub fn samples_per_frame(&self) -> usize {
        self.samples_per_frame
    }

    /// The number of bytes used by one sample.
    #[inline]
    pub fn sample_size(&self) -> usize {
        self.encoding.size()
    }

    /// The number of bytes used by one sample of every channel.
    #[inline]
    pub fn frame_size(&self) -> usize {
        self.sample_size() * self.channels
    }

    /// How a single sample is stored.
    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The magnitude of the signed range, `2^(bit_depth - 1)`, like `32768`
    /// for a 16-bit format.
    #[inline]
    pub fn max_int(&self) -> u64 {
        self.max_int
    }

    /// The canonical id of the format, like `S_16_LE_2_44100_I`.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The smallest sample value of the format.
    ///
    /// ```rust
    /// use pcm_core::{Format, PartialFormat};
    ///
    /// let unsigned = Format::normalize(&PartialFormat::new().with_signed(false))?;
    /// assert_eq!(unsigned.min(), 0.0);
    /// assert_eq!(unsigned.max(), 65535.0);
    /// # Ok::<_, pcm_core::Error>(())
    /// ```
    pub fn min(&self) -> f64 {
        if self.float {
            -1.0
        } else if self.signed {
            -(self.max_int as f64)
        } else {
            0.0
        }
    }

    /// The largest sample value of the format.
    pub fn max(&self) -> f64 {
        if self.float {
            1.0
        } else if self.signed {
            self.max_int as f64 - 1.0
        } else {
            (self.max_int as f64) * 2.0 - 1.0
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        let (signed, float, bit_depth) = (
            partial::DEFAULT_SIGNED,
            partial::DEFAULT_FLOAT,
            partial::DEFAULT_BIT_DEPTH,
        );

        Self::from_parts(
            signed,
            float,
            bit_depth,
            ByteOrder::NATIVE,
            partial::DEFAULT_CHANNELS,
            partial::DEFAULT_SAMPLE_RATE,
            partial::DEFAULT_INTERLEAVED,
            partial::DEFAULT_SAMPLES_PER_FRAME,
            Encoding::I16(Endian::NATIVE),
        )
    }
}

impl PartialEq for Format {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Format {}

impl hash::Hash for Format {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Format {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<Format> for PartialFormat {
    fn from(format: Format) -> Self {
        PartialFormat::from_source(&format)
    }
}

impl TryFrom<PartialFormat> for Format {
    type Error = Error;

    #[inline]
    fn try_from(partial: PartialFormat) -> Result<Self> {
        Format::normalize(&partial)
    }
}

/// Parse and normalize a format from its id.
///
/// ```rust
/// use pcm_core::Format;
///
/// let format: Format = "U_8__1_8000_N".parse()?;
/// assert!(!format.is_signed());
/// assert!(!format.is_interleaved());
/// assert_eq!(format.channels(), 1);
/// # Ok::<_, pcm_core::Error>(())
/// ```
impl FromStr for Format {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Format::normalize(&s.parse::<PartialFormat>()?)
    }
}

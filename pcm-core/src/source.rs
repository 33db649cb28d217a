use crate::byte_order::ByteOrder;
use crate::format::Format;
use crate::partial::PartialFormat;
use crate::sample::TypedSample;

/// Something which can declare some or all of the fields of a format.
///
/// Every accessor returns `None` by default, meaning the field is absent and
/// will be filled in from [PartialFormat::DEFAULT] during normalization.
///
/// This is implemented for literal descriptors ([PartialFormat] and
/// [Format]), for typed sample slices which declare the sample type they
/// hold, and can be implemented by anything else which carries format
/// information, like an audio stream.
///
/// # Examples
///
/// ```rust
/// use pcm_core::{Format, FormatSource};
///
/// struct Stream {
///     rate: u32,
/// }
///
/// impl FormatSource for Stream {
///     fn sample_rate(&self) -> Option<u32> {
///         Some(self.rate)
///     }
///
///     fn channels(&self) -> Option<usize> {
///         Some(1)
///     }
/// }
///
/// let format = Format::normalize(&Stream { rate: 48000 })?;
/// assert_eq!(format.sample_rate(), 48000);
/// assert_eq!(format.channels(), 1);
/// assert_eq!(format.bit_depth(), 16);
/// # Ok::<_, pcm_core::Error>(())
/// ```
pub trait FormatSource {
    /// Whether integer samples are signed.
    fn signed(&self) -> Option<bool> {
        None
    }

    /// Whether samples are floating point.
    fn float(&self) -> Option<bool> {
        None
    }

    /// Bits per sample.
    fn bit_depth(&self) -> Option<u32> {
        None
    }

    /// Byte order of multi-byte samples.
    fn byte_order(&self) -> Option<ByteOrder> {
        None
    }

    /// Number of channels.
    fn channels(&self) -> Option<usize> {
        None
    }

    /// Frames per second.
    fn sample_rate(&self) -> Option<u32> {
        None
    }

    /// Whether samples are interleaved.
    fn interleaved(&self) -> Option<bool> {
        None
    }

    /// Frame buffer sizing hint.
    fn samples_per_frame(&self) -> Option<usize> {
        None
    }

    /// Access the source as an already normalized format.
    ///
    /// Normalization returns a copy of this format as-is if it's available.
    fn as_format(&self) -> Option<&Format> {
        None
    }
}

impl<T> FormatSource for &T
where
    T: ?Sized + FormatSource,
{
    #[inline]
    fn signed(&self) -> Option<bool> {
        (**self).signed()
    }

    #[inline]
    fn float(&self) -> Option<bool> {
        (**self).float()
    }

    #[inline]
    fn bit_depth(&self) -> Option<u32> {
        (**self).bit_depth()
    }

    #[inline]
    fn byte_order(&self) -> Option<ByteOrder> {
        (**self).byte_order()
    }

    #[inline]
    fn channels(&self) -> Option<usize> {
        (**self).channels()
    }

    #[inline]
    fn sample_rate(&self) -> Option<u32> {
        (**self).sample_rate()
    }

    #[inline]
    fn interleaved(&self) -> Option<bool> {
        (**self).interleaved()
    }

    #[inline]
    fn samples_per_frame(&self) -> Option<usize> {
        (**self).samples_per_frame()
    }

    #[inline]
    fn as_format(&self) -> Option<&Format> {
        (**self).as_format()
    }
}

impl FormatSource for PartialFormat {
    #[inline]
    fn signed(&self) -> Option<bool> {
        self.signed
    }

    #[inline]
    fn float(&self) -> Option<bool> {
        self.float
    }

    #[inline]
    fn bit_depth(&self) -> Option<u32> {
        self.bit_depth
    }

    #[inline]
    fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    #[inline]
    fn channels(&self) -> Option<usize> {
        self.channels
    }

    #[inline]
    fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    #[inline]
    fn interleaved(&self) -> Option<bool> {
        self.interleaved
    }

    #[inline]
    fn samples_per_frame(&self) -> Option<usize> {
        self.samples_per_frame
    }
}

impl FormatSource for Format {
    #[inline]
    fn signed(&self) -> Option<bool> {
        Some(self.is_signed())
    }

    #[inline]
    fn float(&self) -> Option<bool> {
        Some(self.is_float())
    }

    #[inline]
    fn bit_depth(&self) -> Option<u32> {
        Some(Format::bit_depth(self))
    }

    #[inline]
    fn byte_order(&self) -> Option<ByteOrder> {
        Some(Format::byte_order(self))
    }

    #[inline]
    fn channels(&self) -> Option<usize> {
        Some(Format::channels(self))
    }

    #[inline]
    fn sample_rate(&self) -> Option<u32> {
        Some(Format::sample_rate(self))
    }

    #[inline]
    fn interleaved(&self) -> Option<bool> {
        Some(self.is_interleaved())
    }

    #[inline]
    fn samples_per_frame(&self) -> Option<usize> {
        Some(Format::samples_per_frame(self))
    }

    #[inline]
    fn as_format(&self) -> Option<&Format> {
        Some(self)
    }
}

/// A slice of typed samples declares the kind of sample it holds, but nothing
/// about channels or layout.
impl<T> FormatSource for [T]
where
    T: TypedSample,
{
    #[inline]
    fn signed(&self) -> Option<bool> {
        Some(T::SIGNED)
    }

    #[inline]
    fn float(&self) -> Option<bool> {
        Some(T::FLOAT)
    }

    #[inline]
    fn bit_depth(&self) -> Option<u32> {
        Some(T::BIT_DEPTH)
    }
}

impl<T> FormatSource for Vec<T>
where
    T: TypedSample,
{
    #[inline]
    fn signed(&self) -> Option<bool> {
        Some(T::SIGNED)
    }

    #[inline]
    fn float(&self) -> Option<bool> {
        Some(T::FLOAT)
    }

    #[inline]
    fn bit_depth(&self) -> Option<u32> {
        Some(T::BIT_DEPTH)
    }
}

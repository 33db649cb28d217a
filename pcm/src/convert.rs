use std::borrow::Cow;

use pcm_core::{Error, Format, Result};

use crate::channel::{channel_data, copy_to_channel};

/// Convert a buffer from one format to another.
///
/// If the two formats are equal the buffer is returned as-is, without
/// copying. Otherwise a new buffer is allocated and every channel is read,
/// translated and written at the location dictated by the layout of `to`.
/// The input buffer is never modified.
///
/// Changing the bit depth, signedness, byte order, layout or sample rate
/// label of a buffer is supported. The sample rate is only a label, no
/// resampling is performed.
///
/// # Errors
///
/// * [Error::UnsupportedChannelCountChange] if `from` and `to` have different
///   channel counts.
/// * [Error::BufferLengthMismatch] if `buf` doesn't hold a whole number of
///   frames in `from`.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use pcm::{Format, PartialFormat};
///
/// let interleaved = Format::normalize(&PartialFormat::new().with_bit_depth(8))?;
/// let planar = Format::normalize(&PartialFormat::new().with_bit_depth(8).with_interleaved(false))?;
///
/// let buf = [1u8, 5, 2, 6, 3, 7];
///
/// assert!(matches!(pcm::convert(&buf, &interleaved, &interleaved)?, Cow::Borrowed(..)));
/// assert_eq!(&pcm::convert(&buf, &interleaved, &planar)?[..], &[1, 2, 3, 5, 6, 7]);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn convert<'a>(buf: &'a [u8], from: &Format, to: &Format) -> Result<Cow<'a, [u8]>> {
    tracing::trace!(len = buf.len(), from = %from, to = %to, "converting buffer");

    if from == to {
        tracing::debug!(format = %from, "formats are equal, skipping conversion");
        return Ok(Cow::Borrowed(buf));
    }

    if from.channels() != to.channels() {
        return Err(Error::UnsupportedChannelCountChange {
            from: from.channels(),
            to: to.channels(),
        });
    }

    let frames = buf.len() / from.frame_size();

    if frames * from.frame_size() != buf.len() {
        return Err(Error::BufferLengthMismatch {
            expected: frames * from.frame_size(),
            actual: buf.len(),
        });
    }

    let mut out = vec![0u8; frames * to.frame_size()];

    for channel in 0..from.channels() {
        let data = channel_data(buf, channel, from, Some(to))?;
        copy_to_channel(&mut out, &data, channel, to)?;
    }

    Ok(Cow::Owned(out))
}

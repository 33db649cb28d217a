//! Locating samples inside of a raw buffer.

use pcm_core::Format;

/// Calculate the byte offset of the sample at `frame` in `channel`.
///
/// For interleaved formats the sample is found at `channel + frame *
/// channels`, for planar formats at `channel * frame_length + frame`, which
/// is then multiplied by the size of a sample.
///
/// `frame_length` is the number of frames in the buffer being accessed. It is
/// only used by planar formats, and defaults to
/// [samples per frame][Format::samples_per_frame] which is only correct for
/// buffers of that size. When working with an existing buffer, use
/// [frame_length] to calculate it.
///
/// # Examples
///
/// ```rust
/// use pcm::{Format, PartialFormat};
///
/// let interleaved = Format::normalize(&PartialFormat::new().with_channels(2))?;
/// assert_eq!(pcm::offset(1, 3, &interleaved, None), 14);
///
/// let planar = Format::normalize(&PartialFormat::new().with_channels(2).with_interleaved(false))?;
/// assert_eq!(pcm::offset(1, 3, &planar, Some(4)), 14);
/// assert_eq!(pcm::offset(1, 3, &planar, None), 2054);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn offset(channel: usize, frame: usize, format: &Format, frame_length: Option<usize>) -> usize {
    let index = if format.is_interleaved() {
        channel + frame * format.channels()
    } else {
        let frame_length = frame_length.unwrap_or_else(|| format.samples_per_frame());
        channel * frame_length + frame
    };

    index * format.sample_size()
}

/// The number of complete frames stored in `buf`.
///
/// Trailing bytes which don't make up a complete frame are ignored.
///
/// # Examples
///
/// ```rust
/// use pcm::{Format, PartialFormat};
///
/// let mono = Format::normalize(&PartialFormat::new().with_float(true).with_channels(1))?;
/// let stereo = Format::normalize(&PartialFormat::new().with_float(true).with_channels(2))?;
///
/// assert_eq!(pcm::frame_length(&[0; 8], &mono), 2);
/// assert_eq!(pcm::frame_length(&[0; 8], &stereo), 1);
/// assert_eq!(pcm::frame_length(&[0; 7], &stereo), 0);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn frame_length(buf: &[u8], format: &Format) -> usize {
    buf.len() / format.frame_size()
}

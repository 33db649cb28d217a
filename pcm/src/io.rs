//! Reading and writing individual samples in raw buffers.

use pcm_core::{Error, Format, Result};

/// Read the sample stored at the byte `offset` of `buf`.
///
/// # Errors
///
/// Errors with [Error::BufferLengthMismatch] if the sample doesn't fit in the
/// buffer.
///
/// # Examples
///
/// ```rust
/// use pcm::{ByteOrder, Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_byte_order(ByteOrder::Be))?;
///
/// assert_eq!(pcm::read_sample(&[0x00, 0x01, 0x80, 0x00], 2, &format)?, -32768.0);
/// assert!(pcm::read_sample(&[0x00, 0x01, 0x80], 2, &format).is_err());
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn read_sample(buf: &[u8], offset: usize, format: &Format) -> Result<f64> {
    let end = end_of(offset, format);

    let bytes = buf.get(offset..end).ok_or(Error::BufferLengthMismatch {
        expected: end,
        actual: buf.len(),
    })?;

    Ok(format.encoding().read(bytes))
}

/// Write a sample at the byte `offset` of `buf`.
///
/// Values are stored as they are, except that integer formats truncate any
/// fractional part and saturate values outside of the range of the format.
///
/// # Errors
///
/// Errors with [Error::BufferLengthMismatch] if the sample doesn't fit in the
/// buffer.
///
/// # Examples
///
/// ```rust
/// use pcm::{Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_bit_depth(8).with_signed(false))?;
/// let mut buf = [0u8; 2];
///
/// pcm::write_sample(&mut buf, 1, 300.0, &format)?;
/// assert_eq!(buf, [0, 255]);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn write_sample(buf: &mut [u8], offset: usize, value: f64, format: &Format) -> Result<()> {
    let end = end_of(offset, format);
    let actual = buf.len();

    let bytes = buf
        .get_mut(offset..end)
        .ok_or(Error::BufferLengthMismatch {
            expected: end,
            actual,
        })?;

    format.encoding().write(bytes, value);
    Ok(())
}

/// End of the sample at `offset`. Saturates so that an out of range offset
/// fails the bounds check instead of overflowing.
fn end_of(offset: usize, format: &Format) -> usize {
    offset.saturating_add(format.sample_size())
}

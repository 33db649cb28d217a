//! Reading and writing the samples of individual channels.

use pcm_core::{convert_sample, Error, Format, Result};

use crate::io::{read_sample, write_sample};
use crate::offset::{frame_length, offset};

fn check_channel(channel: usize, format: &Format) -> Result<()> {
    if channel >= format.channels() {
        return Err(Error::ChannelOutOfBounds {
            channel,
            channels: format.channels(),
        });
    }

    Ok(())
}

/// Read every sample of one channel in `buf`.
///
/// If `to` is specified, samples are translated into that format with
/// [convert_sample]. Otherwise they're returned as stored.
///
/// # Errors
///
/// Errors with [Error::ChannelOutOfBounds] if `from` doesn't have the given
/// channel.
///
/// # Examples
///
/// ```rust
/// use pcm::{Format, PartialFormat};
///
/// let from = Format::normalize(&PartialFormat::new().with_channels(2))?;
/// let to = Format::normalize(&PartialFormat::new().with_float(true))?;
///
/// let buf: Vec<u8> = [0i16, 32767, 0, -32768].iter().flat_map(|s| s.to_ne_bytes()).collect();
///
/// assert_eq!(pcm::channel_data(&buf, 1, &from, None)?, vec![32767.0, -32768.0]);
/// assert_eq!(pcm::channel_data(&buf, 1, &from, Some(&to))?, vec![1.0, -1.0]);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn channel_data(
    buf: &[u8],
    channel: usize,
    from: &Format,
    to: Option<&Format>,
) -> Result<Vec<f64>> {
    check_channel(channel, from)?;

    let frames = frame_length(buf, from);
    let mut data = Vec::with_capacity(frames);

    for frame in 0..frames {
        let value = read_sample(buf, offset(channel, frame, from, Some(frames)), from)?;

        data.push(match to {
            Some(to) => convert_sample(value, from, to),
            None => value,
        });
    }

    Ok(data)
}

/// Read the samples of every channel in `buf`, one sequence per channel.
///
/// See [channel_data].
///
/// # Examples
///
/// ```rust
/// use pcm::{Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_float(true).with_channels(2))?;
///
/// let mut buf = Vec::new();
/// buf.extend_from_slice(&1.0f32.to_ne_bytes());
/// buf.extend_from_slice(&(-0.5f32).to_ne_bytes());
///
/// assert_eq!(pcm::channels_data(&buf, &format, None)?, vec![vec![1.0], vec![-0.5]]);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn channels_data(buf: &[u8], from: &Format, to: Option<&Format>) -> Result<Vec<Vec<f64>>> {
    (0..from.channels())
        .map(|channel| channel_data(buf, channel, from, to))
        .collect()
}

/// Write `data` into one channel of `buf`.
///
/// The length of `data` is taken to be the number of frames in `buf`, which
/// matters for planar formats. Values are rounded to the nearest integer for
/// integer formats, with halves rounded up.
///
/// # Errors
///
/// Errors with [Error::ChannelOutOfBounds] if `to` doesn't have the given
/// channel, or [Error::BufferLengthMismatch] if `buf` is too small to hold
/// `data`.
///
/// # Examples
///
/// ```rust
/// use pcm::{ByteOrder, Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_byte_order(ByteOrder::Le).with_interleaved(false))?;
/// let mut buf = [0u8; 8];
///
/// pcm::copy_to_channel(&mut buf, &[1.5, -2.5], 1, &format)?;
/// assert_eq!(buf, [0, 0, 0, 0, 2, 0, 0xfe, 0xff]);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn copy_to_channel(buf: &mut [u8], data: &[f64], channel: usize, to: &Format) -> Result<()> {
    check_channel(channel, to)?;

    for (frame, &value) in data.iter().enumerate() {
        let value = if to.is_float() {
            value
        } else {
            round(value)
        };

        write_sample(buf, offset(channel, frame, to, Some(data.len())), value, to)?;
    }

    Ok(())
}

/// Round to the nearest integer, with halves rounded towards positive
/// infinity.
#[inline]
pub(crate) fn round(value: f64) -> f64 {
    (value + 0.5).floor()
}

//! The canonical format id, like `S_16_LE_2_44100_I`.
//!
//! The id is made up of six fields separated by `_`:
//!
//! * `F`, `S` or `U` for float, signed or unsigned samples.
//! * The bit depth.
//! * The byte order, `LE`, `BE` or empty for single byte samples.
//! * The number of channels.
//! * The sample rate.
//! * `I` or `N` for interleaved or non-interleaved samples.

use std::fmt::Write as _;

use crate::byte_order::ByteOrder;
use crate::error::{Error, Result};
use crate::partial::PartialFormat;

const SEPARATOR: char = '_';

pub(crate) fn stringify(
    float: bool,
    signed: bool,
    bit_depth: u32,
    byte_order: ByteOrder,
    channels: usize,
    sample_rate: u32,
    interleaved: bool,
) -> String {
    let kind = if float {
        'F'
    } else if signed {
        'S'
    } else {
        'U'
    };

    let layout = if interleaved { 'I' } else { 'N' };

    let mut id = String::new();
    // NB: writing to a string can't fail.
    let _ = write!(
        id,
        "{kind}{s}{bit_depth}{s}{byte_order}{s}{channels}{s}{sample_rate}{s}{layout}",
        s = SEPARATOR
    );
    id
}

/// Parse a format id into the fields it declares.
///
/// The result is not normalized, so it should be passed through
/// [Format::normalize][crate::Format::normalize] before it is used. Token
/// values aren't range checked here, only that they can be parsed.
///
/// # Errors
///
/// Errors with [Error::MalformedFormatId] if the id doesn't have exactly six
/// fields or if any of them can't be parsed.
///
/// # Examples
///
/// ```rust
/// use pcm_core::{ByteOrder, PartialFormat};
///
/// let partial = pcm_core::parse_id("S_16_LE_2_44100_I")?;
///
/// assert_eq!(partial, PartialFormat::new()
///     .with_float(false)
///     .with_signed(true)
///     .with_bit_depth(16)
///     .with_byte_order(ByteOrder::Le)
///     .with_channels(2)
///     .with_sample_rate(44100)
///     .with_interleaved(true));
///
/// assert!(pcm_core::parse_id("S_16_LE_2").is_err());
/// assert!(pcm_core::parse_id("X_16_LE_2_44100_I").is_err());
/// # Ok::<_, pcm_core::Error>(())
/// ```
pub fn parse_id(id: &str) -> Result<PartialFormat> {
    let mut it = id.split(SEPARATOR);

    let mut next = || {
        it.next()
            .ok_or_else(|| Error::malformed_id(id, "expected six fields"))
    };

    let (float, signed) = match next()? {
        "F" => (true, true),
        "S" => (false, true),
        "U" => (false, false),
        _ => return Err(Error::malformed_id(id, "sample kind must be `F`, `S` or `U`")),
    };

    let bit_depth = next()?
        .parse::<u32>()
        .map_err(|_| Error::malformed_id(id, "bit depth is not a number"))?;

    let byte_order = next()?
        .parse::<ByteOrder>()
        .map_err(|_| Error::malformed_id(id, "byte order must be `LE`, `BE` or empty"))?;

    let channels = next()?
        .parse::<usize>()
        .map_err(|_| Error::malformed_id(id, "channel count is not a number"))?;

    let sample_rate = next()?
        .parse::<u32>()
        .map_err(|_| Error::malformed_id(id, "sample rate is not a number"))?;

    let interleaved = match next()? {
        "I" => true,
        "N" => false,
        _ => return Err(Error::malformed_id(id, "layout must be `I` or `N`")),
    };

    if it.next().is_some() {
        return Err(Error::malformed_id(id, "expected six fields"));
    }

    Ok(PartialFormat {
        signed: Some(signed),
        float: Some(float),
        bit_depth: Some(bit_depth),
        byte_order: Some(byte_order),
        channels: Some(channels),
        sample_rate: Some(sample_rate),
        interleaved: Some(interleaved),
        samples_per_frame: None,
    })
}

//! Translating individual samples between formats.
//!
//! Samples are translated through a float domain with a midpoint of `0.0`
//! and a range of `-1.0` to `1.0` (inclusive):
//!
//! * Float samples are used as-is.
//! * Unsigned samples are first centered by subtracting
//!   [max int][crate::Format::max_int], so that `0x8000` is silence for a
//!   16-bit format.
//! * Integer samples are then divided by `max_int - 1`. This means that the
//!   highest positive value, like `32767`, decodes to exactly `1.0` while the
//!   lowest negative value, like `-32768`, decodes to slightly below `-1.0`.
//!
//! The decoded value is clamped to `-1.0..=1.0` before being encoded into the
//! target format. Clamping is how out of range values are dealt with, it is
//! not an error.
//!
//! Encoding is the inverse, rounded down and kept within the range of the
//! target format:
//!
//! * Signed: `floor(value * (max_int - 1))` for positive values, so that `1.0`
//!   becomes the highest positive value, and `floor(value * max_int)` for
//!   negative ones, so that `-1.0` becomes the lowest negative value.
//! * Unsigned: `floor((value + 1) * max_int)`, capped at `2 * max_int - 1`.
//!
//! Integer formats of the same bit depth skip the float domain entirely. A
//! byte order change leaves the value untouched and a signedness change only
//! shifts it by `max_int`, so such conversions are lossless.

use crate::format::Format;


/// Decode a sample in the given format into the float domain.
///
/// The result is *not* clamped.
///
/// ```rust
/// use pcm_core::{Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_bit_depth(16))?;
///
/// assert_eq!(pcm_core::translate::decode(32767.0, &format), 1.0);
/// assert!(pcm_core::translate::decode(-32768.0, &format) < -1.0);
/// # Ok::<_, pcm_core::Error>(())
/// ```
pub fn decode(value: f64, format: &Format) -> f64 {
    if format.is_float() {
        return value;
    }

    let max_int = format.max_int() as f64;

    let value = if format.is_signed() {
        value
    } else {
        value - max_int
    };

    value / (max_int - 1.0)
}

/// Encode a value in the float domain into a sample of the given format.
///
/// The value is expected to already be clamped.
///
/// ```rust
/// use pcm_core::{Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new().with_bit_depth(16))?;
///
/// assert_eq!(pcm_core::translate::encode(1.0, &format), 32767.0);
/// assert_eq!(pcm_core::translate::encode(-1.0, &format), -32768.0);
/// # Ok::<_, pcm_core::Error>(())
/// ```
pub fn encode(value: f64, format: &Format) -> f64 {
    if format.is_float() {
        return value;
    }

    let max_int = format.max_int() as f64;

    if format.is_signed() {
        if value < 0.0 {
            (value * max_int).floor()
        } else {
            (value * (max_int - 1.0)).floor()
        }
    } else {
        ((value + 1.0) * max_int).floor().min(format.max())
    }
}

/// Translate a single sample from one format to another.
///
/// If both formats only differ in byte order the value is returned as-is.
/// Byte order and layout don't matter for a sample which has already been
/// read. Integer formats which only differ in signedness are shifted by
/// [max int][crate::Format::max_int] without going through the float domain.
///
/// # Examples
///
/// ```rust
/// use pcm_core::{Format, PartialFormat};
///
/// let float = Format::normalize(&PartialFormat::new().with_float(true))?;
/// let int = Format::normalize(&PartialFormat::new().with_bit_depth(16).with_signed(true))?;
///
/// assert_eq!(pcm_core::convert_sample(1.0, &float, &int), 32767.0);
/// assert_eq!(pcm_core::convert_sample(-1.0, &float, &int), -32768.0);
/// assert_eq!(pcm_core::convert_sample(-0.5, &float, &int), -16384.0);
/// assert_eq!(pcm_core::convert_sample(32767.0, &int, &float), 1.0);
///
/// let unsigned = Format::normalize(&PartialFormat::new().with_bit_depth(16).with_signed(false))?;
/// assert_eq!(pcm_core::convert_sample(-100.0, &int, &unsigned), 32668.0);
/// # Ok::<_, pcm_core::Error>(())
/// ```
pub fn convert_sample(value: f64, from: &Format, to: &Format) -> f64 {
    if from.is_float() == to.is_float() && from.bit_depth() == to.bit_depth() {
        if from.is_float() || from.is_signed() == to.is_signed() {
            return value;
        }

        let max_int = from.max_int() as f64;

        return if to.is_signed() {
            value - max_int
        } else {
            value + max_int
        };
    }

    let value = decode(value, from).clamp(-1.0, 1.0);
    encode(value, to)
}

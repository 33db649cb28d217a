use super::{f32_le_bytes, float_le, format, i16_le_bytes, init_tracing};
use crate::{ByteOrder, PartialFormat};

#[test]
fn test_map_int16() {
    let format = format(PartialFormat::new().with_byte_order(ByteOrder::Le));
    let buf = i16_le_bytes(&[20001, -10001, 32767, -32768]);

    let out = crate::map_samples(&buf, |x| -0.5 * x, &format);

    assert_eq!(out, i16_le_bytes(&[-10000, 5001, -16383, 16384]));
}

#[test]
fn test_map_ignores_channels() {
    // A planar mono format and an interleaved stereo format map identically.
    let mono = format(
        PartialFormat::new()
            .with_byte_order(ByteOrder::Le)
            .with_channels(1)
            .with_interleaved(false),
    );
    let stereo = format(PartialFormat::new().with_byte_order(ByteOrder::Le));

    let buf = i16_le_bytes(&[1, 2, 3]);

    assert_eq!(crate::map_samples(&buf, |x| x + 1.0, &mono), i16_le_bytes(&[2, 3, 4]));
    assert_eq!(crate::map_samples(&buf, |x| x + 1.0, &stereo), i16_le_bytes(&[2, 3, 4]));
}

#[test]
fn test_map_float() {
    let buf = f32_le_bytes(&[0.5, -0.25]);
    let out = crate::map_samples(&buf, |x| x * 0.3, &float_le(2));

    assert_eq!(out, f32_le_bytes(&[0.5 * 0.3, -0.25 * 0.3]));
}

#[test]
fn test_map_saturates_and_keeps_length() {
    init_tracing();

    let format = format(PartialFormat::new().with_byte_order(ByteOrder::Le));
    let mut buf = i16_le_bytes(&[30000, -30000]);
    buf.push(0x7f);

    let out = crate::map_samples(&buf, |x| x * 2.0, &format);

    assert_eq!(out.len(), 5);
    assert_eq!(out[..4], i16_le_bytes(&[32767, -32768])[..]);
    assert_eq!(out[4], 0);
}

#[test]
fn test_map_counts_calls() {
    let format = format(PartialFormat::new().with_bit_depth(8));
    let mut calls = 0;

    let out = crate::map_samples(
        &[1, 2, 3, 4, 5],
        |x| {
            calls += 1;
            x
        },
        &format,
    );

    assert_eq!(calls, 5);
    assert_eq!(out, [1, 2, 3, 4, 5]);
}

use std::borrow::Cow;

use rand::Rng;

use super::{f32_le_bytes, float_le, format, i16_le_bytes, init_tracing};
use crate::{ByteOrder, Error, PartialFormat};

#[test]
fn test_float_le_to_int16_be() {
    init_tracing();

    let buf = f32_le_bytes(&[1.0, -0.5]);
    let to = format(
        PartialFormat::new()
            .with_float(false)
            .with_signed(true)
            .with_bit_depth(16)
            .with_byte_order(ByteOrder::Be),
    );

    let out = crate::convert(&buf, &float_le(2), &to).unwrap();

    assert_eq!(out.len(), 4);
    assert_eq!(i16::from_be_bytes([out[0], out[1]]), 32767);
    assert_eq!(i16::from_be_bytes([out[2], out[3]]), -16384);
}

#[test]
fn test_identity_is_borrowed() {
    init_tracing();

    let buf = i16_le_bytes(&[1, 2, 3]);
    let from = format(PartialFormat::new().with_channels(3));
    let to = format(PartialFormat::new().with_channels(3).with_samples_per_frame(16));

    match crate::convert(&buf, &from, &to).unwrap() {
        Cow::Borrowed(out) => {
            assert_eq!(out, &buf[..]);
            assert!(std::ptr::eq(out, &buf[..]));
        }
        Cow::Owned(..) => panic!("expected the input buffer to be returned"),
    }
}

#[test]
fn test_does_not_modify_input() {
    let buf = f32_le_bytes(&[0.25, -0.25, 0.5, -0.5]);
    let copy = buf.clone();
    let to = format(PartialFormat::new().with_bit_depth(8).with_signed(false));

    let out = crate::convert(&buf, &float_le(2), &to).unwrap();

    assert_eq!(buf, copy);
    assert_eq!(&out[..], &[160, 96, 192, 64]);
}

#[test]
fn test_channel_count_change() {
    let buf = f32_le_bytes(&[1.0, -0.5]);

    assert_eq! {
        crate::convert(&buf, &float_le(2), &float_le(1)),
        Err(Error::UnsupportedChannelCountChange { from: 2, to: 1 }),
    };
}

#[test]
fn test_partial_frame() {
    let buf = f32_le_bytes(&[1.0, -0.5, 0.25]);
    let to = format(PartialFormat::new());

    assert_eq! {
        crate::convert(&buf, &float_le(2), &to),
        Err(Error::BufferLengthMismatch { expected: 8, actual: 12 }),
    };
}

#[test]
fn test_layout_change() {
    let interleaved = format(PartialFormat::new().with_channels(3).with_byte_order(ByteOrder::Le));
    let planar = format(
        PartialFormat::new()
            .with_channels(3)
            .with_byte_order(ByteOrder::Le)
            .with_interleaved(false),
    );

    let buf = i16_le_bytes(&[1, 10, 100, 2, 20, 200]);
    let out = crate::convert(&buf, &interleaved, &planar).unwrap();
    assert_eq!(&out[..], &i16_le_bytes(&[1, 2, 10, 20, 100, 200])[..]);

    let back = crate::convert(&out, &planar, &interleaved).unwrap();
    assert_eq!(&back[..], &buf[..]);
}

#[test]
fn test_byte_swap() {
    let le = format(PartialFormat::new().with_byte_order(ByteOrder::Le));
    let be = format(PartialFormat::new().with_byte_order(ByteOrder::Be));

    let buf = i16_le_bytes(&[32767, -32768]);
    let out = crate::convert(&buf, &le, &be).unwrap();
    assert_eq!(&out[..], &[0x7f, 0xff, 0x80, 0x00]);
}

#[test]
fn test_byte_swap_keeps_negative_samples() {
    let le = format(PartialFormat::new().with_byte_order(ByteOrder::Le));
    let be = format(PartialFormat::new().with_byte_order(ByteOrder::Be));

    let samples = [-1, -100, -16384, -32767, -32768, 0, 100, 12345];
    let buf = i16_le_bytes(&samples);
    let out = crate::convert(&buf, &le, &be).unwrap();

    let swapped: Vec<i16> = out
        .chunks_exact(2)
        .map(|b| i16::from_be_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(swapped, samples);

    let back = crate::convert(&out, &be, &le).unwrap();
    assert_eq!(&back[..], &buf[..]);
}

#[test]
fn test_float_width_round_trip() {
    let mut rng = rand::thread_rng();

    let single = float_le(2);
    let double = format(
        PartialFormat::new()
            .with_float(true)
            .with_bit_depth(64)
            .with_byte_order(ByteOrder::Be)
            .with_interleaved(false),
    );

    for _ in 0..100 {
        let frames = rng.gen_range(0..64);
        let samples: Vec<f32> = (0..frames * 2).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let buf = f32_le_bytes(&samples);

        let wide = crate::convert(&buf, &single, &double).unwrap();
        assert_eq!(wide.len(), buf.len() * 2);

        let narrow = crate::convert(&wide, &double, &single).unwrap();
        assert_eq!(&narrow[..], &buf[..]);
    }
}

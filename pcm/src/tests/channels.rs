use super::{f32_le_bytes, float_le, format, i16_le_bytes};
use crate::{ByteOrder, Error, PartialFormat};

#[test]
fn test_channels_data_interleaved() {
    let buf = f32_le_bytes(&[1.0, -0.5]);

    assert_eq! {
        crate::channels_data(&buf, &float_le(2), None).unwrap(),
        vec![vec![1.0], vec![-0.5]],
    };

    assert_eq! {
        crate::channels_data(&buf, &float_le(1), None).unwrap(),
        vec![vec![1.0, -0.5]],
    };
}

#[test]
fn test_channels_data_layouts() {
    let buf = f32_le_bytes(&[0.0, 1.0, 0.0, -1.0, 0.0, 1.0]);

    assert_eq! {
        crate::channels_data(&buf, &float_le(3), None).unwrap(),
        vec![vec![0.0, -1.0], vec![1.0, 0.0], vec![0.0, 1.0]],
    };

    let planar = format(
        PartialFormat::new()
            .with_float(true)
            .with_byte_order(ByteOrder::Le)
            .with_channels(3)
            .with_interleaved(false),
    );

    assert_eq! {
        crate::channels_data(&buf, &planar, None).unwrap(),
        vec![vec![0.0, 1.0], vec![0.0, -1.0], vec![0.0, 1.0]],
    };
}

#[test]
fn test_channel_data_ignores_partial_frames() {
    // 2 channels, 2 complete frames and a dangling sample.
    let buf = i16_le_bytes(&[1, 2, 3, 4, 5]);
    let format = format(PartialFormat::new().with_byte_order(ByteOrder::Le));

    assert_eq!(crate::channel_data(&buf, 0, &format, None).unwrap(), vec![1.0, 3.0]);
    assert_eq!(crate::channel_data(&buf, 1, &format, None).unwrap(), vec![2.0, 4.0]);
}

#[test]
fn test_channel_out_of_bounds() {
    let buf = f32_le_bytes(&[1.0, -0.5]);

    assert_eq! {
        crate::channel_data(&buf, 2, &float_le(2), None),
        Err(Error::ChannelOutOfBounds { channel: 2, channels: 2 }),
    };

    let mut out = [0u8; 8];

    assert_eq! {
        crate::copy_to_channel(&mut out, &[0.0], 1, &float_le(1)),
        Err(Error::ChannelOutOfBounds { channel: 1, channels: 1 }),
    };
}

#[test]
fn test_copy_to_channel() {
    let format = format(PartialFormat::new().with_byte_order(ByteOrder::Le));
    let mut buf = [0u8; 8];

    crate::copy_to_channel(&mut buf, &[0.0, 32767.0], 0, &format).unwrap();
    crate::copy_to_channel(&mut buf, &[-32768.0, -0.5], 1, &format).unwrap();

    assert_eq!(buf[..], i16_le_bytes(&[0, -32768, 32767, 0])[..]);
}

#[test]
fn test_copy_to_channel_too_small() {
    let format = format(PartialFormat::new().with_byte_order(ByteOrder::Le));
    let mut buf = [0u8; 6];

    assert_eq! {
        crate::copy_to_channel(&mut buf, &[1.0, 2.0], 1, &format),
        Err(Error::BufferLengthMismatch { expected: 8, actual: 6 }),
    };
}

#[test]
fn test_channels_data_converted() {
    let from = format(
        PartialFormat::new()
            .with_signed(false)
            .with_bit_depth(8)
            .with_channels(1),
    );

    assert_eq! {
        crate::channels_data(&[0, 128, 255], &from, Some(&float_le(1))).unwrap(),
        vec![vec![-1.0, 0.0, 1.0]],
    };
}

mod channels;
mod convert;
mod map;

use crate::{ByteOrder, Format, PartialFormat};

pub(crate) fn format(partial: PartialFormat) -> Format {
    Format::normalize(&partial).unwrap()
}

pub(crate) fn float_le(channels: usize) -> Format {
    format(
        PartialFormat::new()
            .with_float(true)
            .with_byte_order(ByteOrder::Le)
            .with_channels(channels),
    )
}

pub(crate) fn f32_le_bytes(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

pub(crate) fn i16_le_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

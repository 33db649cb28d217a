//! A crate for converting and inspecting raw PCM audio buffers.
//!
//! This is made up of two parts:
//!
//! * [pcm-core] - The core crate, which defines the [Format] descriptor, how
//!   formats are normalized and identified, and how individual samples are
//!   translated between formats.
//! * [pcm] - This crate, which works on whole byte buffers described by a
//!   [Format].
//!
//! A buffer holds zero or more frames. A frame is one sample of every channel,
//! taken at the same moment in time. The samples can be stored in two ways,
//! as shown here for the two channels `[1, 2, 3, 4]` and `[5, 6, 7, 8]`:
//!
//! * Interleaved: samples are stored frame by frame. So
//!   `[1, 5, 2, 6, 3, 7, 4, 8]`.
//! * Planar (non-interleaved): each channel is stored one after the other. So
//!   `[1, 2, 3, 4, 5, 6, 7, 8]`.
//!
//! <br>
//!
//! ## Examples
//!
//! Converting a buffer of 32-bit little-endian floats into 16-bit big-endian
//! integers:
//!
//! ```rust
//! use pcm::{ByteOrder, Format, PartialFormat};
//!
//! let from = Format::normalize(&PartialFormat::new().with_float(true).with_byte_order(ByteOrder::Le))?;
//! let to = Format::normalize(&PartialFormat::new().with_bit_depth(16).with_byte_order(ByteOrder::Be))?;
//!
//! let mut buf = Vec::new();
//! buf.extend_from_slice(&1.0f32.to_le_bytes());
//! buf.extend_from_slice(&(-0.5f32).to_le_bytes());
//!
//! let out = pcm::convert(&buf, &from, &to)?;
//!
//! assert_eq!(&out[..], &[0x7f, 0xff, 0xc0, 0x00]);
//! # Ok::<_, pcm::Error>(())
//! ```
//!
//! Reading the channels of a buffer:
//!
//! ```rust
//! use pcm::{Format, PartialFormat};
//!
//! let format = Format::normalize(&PartialFormat::new().with_channels(3).with_interleaved(false))?;
//!
//! let buf: Vec<u8> = [1i16, 2, 3, 4, 5, 6].iter().flat_map(|s| s.to_ne_bytes()).collect();
//!
//! assert_eq! {
//!     pcm::channels_data(&buf, &format, None)?,
//!     vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
//! };
//! # Ok::<_, pcm::Error>(())
//! ```
//!
//! [pcm-core]: https://docs.rs/pcm-core
//! [pcm]: https://docs.rs/pcm

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod channel;
pub use self::channel::{channel_data, channels_data, copy_to_channel};

mod convert;
pub use self::convert::convert;

pub mod io;
pub use self::io::{read_sample, write_sample};

mod map;
pub use self::map::map_samples;

pub mod offset;
pub use self::offset::{frame_length, offset};

#[cfg(test)]
mod tests;

pub use pcm_core::*;

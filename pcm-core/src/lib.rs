//! The core [pcm] types.
//!
//! This crate defines the format descriptor used to describe a raw PCM buffer,
//! how partial descriptors are normalized into complete ones, the canonical
//! format identifier and how individual samples are translated from one format
//! to another.
//!
//! If you only need to describe or compare formats, or translate individual
//! samples, you can add a dependency directly to this crate instead of
//! depending on all of [pcm].
//!
//! ```rust
//! use pcm_core::{ByteOrder, Format, PartialFormat};
//!
//! let format = Format::normalize(&PartialFormat::new().with_float(true))?;
//!
//! assert!(format.is_float());
//! assert_eq!(format.bit_depth(), 32);
//! assert_eq!(format.sample_size(), 4);
//! assert_eq!(format.byte_order(), ByteOrder::NATIVE);
//! # Ok::<_, pcm_core::Error>(())
//! ```
//!
//! [pcm]: https://docs.rs/pcm

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod byte_order;
pub use self::byte_order::{ByteOrder, Endian};

mod encoding;
pub use self::encoding::Encoding;

mod error;
pub use self::error::{Error, Result};

mod format;
pub use self::format::Format;

mod id;
pub use self::id::parse_id;

mod partial;
pub use self::partial::PartialFormat;

mod sample;
pub use self::sample::TypedSample;

mod source;
pub use self::source::FormatSource;

pub mod translate;
pub use self::translate::convert_sample;

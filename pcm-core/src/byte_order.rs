use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The byte order declared by a format.
///
/// Single byte formats carry no byte order, which is represented by
/// [ByteOrder::None].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Little endian.
    #[serde(rename = "LE")]
    Le,
    /// Big endian.
    #[serde(rename = "BE")]
    Be,
    /// No byte order, as used by formats with a bit depth of 8 or less.
    #[serde(rename = "")]
    None,
}

impl ByteOrder {
    /// The byte order of the host.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Be
    } else {
        ByteOrder::Le
    };

    /// The token used for this byte order in format identifiers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pcm_core::ByteOrder;
    ///
    /// assert_eq!(ByteOrder::Le.as_str(), "LE");
    /// assert_eq!(ByteOrder::None.as_str(), "");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Le => "LE",
            ByteOrder::Be => "BE",
            ByteOrder::None => "",
        }
    }

    /// The endianness used to read and write multi-byte samples, if any.
    pub const fn endian(self) -> Option<Endian> {
        match self {
            ByteOrder::Le => Some(Endian::Little),
            ByteOrder::Be => Some(Endian::Big),
            ByteOrder::None => None,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LE" => Ok(ByteOrder::Le),
            "BE" => Ok(ByteOrder::Be),
            "" => Ok(ByteOrder::None),
            other => Err(Error::invalid_field("byteOrder", other)),
        }
    }
}

/// The concrete endianness of a multi-byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// The endianness of the host.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };

    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            Endian::Little => "LE",
            Endian::Big => "BE",
        }
    }
}

use std::fmt;

use byteorder::{BigEndian, LittleEndian};

use crate::byte_order::{ByteOrder, Endian};

/// How a single sample is stored in a raw buffer.
///
/// This combines whether the sample is a float, its signedness, bit depth
/// and byte order. Two formats with the same encoding store individual
/// samples identically, so samples can be copied between them without
/// translation.
///
/// # Examples
///
/// ```rust
/// use pcm_core::{Encoding, Endian};
///
/// let encoding = Encoding::I16(Endian::Big);
/// let mut bytes = [0u8; 2];
///
/// encoding.write(&mut bytes, -2.0);
/// assert_eq!(bytes, [0xff, 0xfe]);
/// assert_eq!(encoding.read(&bytes), -2.0);
/// assert_eq!(encoding.to_string(), "Int16BE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Unsigned 8-bit.
    U8,
    /// Signed 8-bit.
    I8,
    /// Unsigned 16-bit.
    U16(Endian),
    /// Signed 16-bit.
    I16(Endian),
    /// Unsigned 24-bit, packed into three bytes.
    U24(Endian),
    /// Signed 24-bit, packed into three bytes.
    I24(Endian),
    /// Unsigned 32-bit.
    U32(Endian),
    /// Signed 32-bit.
    I32(Endian),
    /// 32-bit float.
    F32(Endian),
    /// 64-bit float.
    F64(Endian),
}

impl Encoding {
    /// Resolve the encoding for the given parameters.
    ///
    /// Returns `None` if there is no such encoding, like a 16-bit float or a
    /// multi-byte sample without a byte order.
    pub fn new(float: bool, signed: bool, bit_depth: u32, byte_order: ByteOrder) -> Option<Self> {
        let endian = byte_order.endian();

        Some(match (float, signed, bit_depth) {
            (false, false, 8) => Encoding::U8,
            (false, true, 8) => Encoding::I8,
            (false, false, 16) => Encoding::U16(endian?),
            (false, true, 16) => Encoding::I16(endian?),
            (false, false, 24) => Encoding::U24(endian?),
            (false, true, 24) => Encoding::I24(endian?),
            (false, false, 32) => Encoding::U32(endian?),
            (false, true, 32) => Encoding::I32(endian?),
            (true, _, 32) => Encoding::F32(endian?),
            (true, _, 64) => Encoding::F64(endian?),
            _ => return None,
        })
    }

    /// The number of bytes used by one sample.
    pub const fn size(self) -> usize {
        match self {
            Encoding::U8 | Encoding::I8 => 1,
            Encoding::U16(..) | Encoding::I16(..) => 2,
            Encoding::U24(..) | Encoding::I24(..) => 3,
            Encoding::U32(..) | Encoding::I32(..) | Encoding::F32(..) => 4,
            Encoding::F64(..) => 8,
        }
    }

    /// The endianness of the encoding, or `None` for single byte encodings.
    pub const fn endian(self) -> Option<Endian> {
        match self {
            Encoding::U8 | Encoding::I8 => None,
            Encoding::U16(e)
            | Encoding::I16(e)
            | Encoding::U24(e)
            | Encoding::I24(e)
            | Encoding::U32(e)
            | Encoding::I32(e)
            | Encoding::F32(e)
            | Encoding::F64(e) => Some(e),
        }
    }

    /// Test if this is a floating point encoding.
    pub const fn is_float(self) -> bool {
        matches!(self, Encoding::F32(..) | Encoding::F64(..))
    }

    /// The smallest value the encoding can store.
    ///
    /// Float encodings can store any value, so this is `-inf` for them.
    pub fn min(self) -> f64 {
        match self {
            Encoding::U8 | Encoding::U16(..) | Encoding::U24(..) | Encoding::U32(..) => 0.0,
            Encoding::I8 => f64::from(i8::MIN),
            Encoding::I16(..) => f64::from(i16::MIN),
            Encoding::I24(..) => -8_388_608.0,
            Encoding::I32(..) => f64::from(i32::MIN),
            Encoding::F32(..) | Encoding::F64(..) => f64::NEG_INFINITY,
        }
    }

    /// The largest value the encoding can store.
    ///
    /// Float encodings can store any value, so this is `inf` for them.
    pub fn max(self) -> f64 {
        match self {
            Encoding::U8 => f64::from(u8::MAX),
            Encoding::I8 => f64::from(i8::MAX),
            Encoding::U16(..) => f64::from(u16::MAX),
            Encoding::I16(..) => f64::from(i16::MAX),
            Encoding::U24(..) => 16_777_215.0,
            Encoding::I24(..) => 8_388_607.0,
            Encoding::U32(..) => f64::from(u32::MAX),
            Encoding::I32(..) => f64::from(i32::MAX),
            Encoding::F32(..) | Encoding::F64(..) => f64::INFINITY,
        }
    }

    /// Read one sample from the start of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [Encoding::size].
    pub fn read(self, bytes: &[u8]) -> f64 {
        match self.endian() {
            Some(Endian::Big) => self.read_as::<BigEndian>(bytes),
            _ => self.read_as::<LittleEndian>(bytes),
        }
    }

    /// Write one sample to the start of `bytes`.
    ///
    /// Integer encodings saturate values outside of the range they can store
    /// and truncate any fractional part. A `NaN` is stored as `0`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [Encoding::size].
    pub fn write(self, bytes: &mut [u8], value: f64) {
        match self.endian() {
            Some(Endian::Big) => self.write_as::<BigEndian>(bytes, value),
            _ => self.write_as::<LittleEndian>(bytes, value),
        }
    }

    fn read_as<B>(self, bytes: &[u8]) -> f64
    where
        B: byteorder::ByteOrder,
    {
        match self {
            Encoding::U8 => f64::from(bytes[0]),
            Encoding::I8 => f64::from(bytes[0] as i8),
            Encoding::U16(..) => f64::from(B::read_u16(bytes)),
            Encoding::I16(..) => f64::from(B::read_i16(bytes)),
            Encoding::U24(..) => f64::from(B::read_u24(bytes)),
            Encoding::I24(..) => f64::from(B::read_i24(bytes)),
            Encoding::U32(..) => f64::from(B::read_u32(bytes)),
            Encoding::I32(..) => f64::from(B::read_i32(bytes)),
            Encoding::F32(..) => f64::from(B::read_f32(bytes)),
            Encoding::F64(..) => B::read_f64(bytes),
        }
    }

    fn write_as<B>(self, bytes: &mut [u8], value: f64)
    where
        B: byteorder::ByteOrder,
    {
        // NB: `as` saturates float to integer casts, but 24-bit samples are
        // stored in wider integers so they need explicit bounds.
        let value = if self.is_float() || value.is_nan() {
            value
        } else {
            value.max(self.min()).min(self.max())
        };

        match self {
            Encoding::U8 => bytes[0] = value as u8,
            Encoding::I8 => bytes[0] = value as i8 as u8,
            Encoding::U16(..) => B::write_u16(bytes, value as u16),
            Encoding::I16(..) => B::write_i16(bytes, value as i16),
            Encoding::U24(..) => B::write_u24(bytes, value as u32),
            Encoding::I24(..) => B::write_i24(bytes, value as i32),
            Encoding::U32(..) => B::write_u32(bytes, value as u32),
            Encoding::I32(..) => B::write_i32(bytes, value as i32),
            Encoding::F32(..) => B::write_f32(bytes, value as f32),
            Encoding::F64(..) => B::write_f64(bytes, value),
        }
    }
}

/// Formats the encoding as the suffix of its read and write methods, like
/// `Int16LE`, `UInt8` or `FloatBE`.
impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::U8 => "UInt8",
            Encoding::I8 => "Int8",
            Encoding::U16(..) => "UInt16",
            Encoding::I16(..) => "Int16",
            Encoding::U24(..) => "UInt24",
            Encoding::I24(..) => "Int24",
            Encoding::U32(..) => "UInt32",
            Encoding::I32(..) => "Int32",
            Encoding::F32(..) => "Float",
            Encoding::F64(..) => "Double",
        };

        f.write_str(name)?;

        if let Some(endian) = self.endian() {
            f.write_str(endian.suffix())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Encoding;
    use crate::byte_order::{ByteOrder, Endian};

    #[test]
    fn test_resolve() {
        assert_eq!(Encoding::new(false, true, 8, ByteOrder::None), Some(Encoding::I8));
        assert_eq!(
            Encoding::new(false, false, 24, ByteOrder::Be),
            Some(Encoding::U24(Endian::Big))
        );
        assert_eq!(
            Encoding::new(true, false, 64, ByteOrder::Le),
            Some(Encoding::F64(Endian::Little))
        );
        assert_eq!(Encoding::new(false, true, 16, ByteOrder::None), None);
        assert_eq!(Encoding::new(true, true, 16, ByteOrder::Le), None);
        assert_eq!(Encoding::new(false, true, 12, ByteOrder::Le), None);
    }

    #[test]
    fn test_24_bit() {
        let mut bytes = [0u8; 3];

        Encoding::I24(Endian::Little).write(&mut bytes, -2.0);
        assert_eq!(bytes, [0xfe, 0xff, 0xff]);
        assert_eq!(Encoding::I24(Endian::Little).read(&bytes), -2.0);

        Encoding::U24(Endian::Big).write(&mut bytes, 0x123456 as f64);
        assert_eq!(bytes, [0x12, 0x34, 0x56]);
        assert_eq!(Encoding::U24(Endian::Big).read(&bytes), 0x123456 as f64);
    }

    #[test]
    fn test_saturate() {
        let mut bytes = [0u8; 3];

        Encoding::U16(Endian::Little).write(&mut bytes, 65536.0);
        assert_eq!(Encoding::U16(Endian::Little).read(&bytes), 65535.0);

        Encoding::I24(Endian::Big).write(&mut bytes, 1e9);
        assert_eq!(Encoding::I24(Endian::Big).read(&bytes), 8_388_607.0);

        Encoding::I8.write(&mut bytes, -1000.0);
        assert_eq!(Encoding::I8.read(&bytes), -128.0);

        Encoding::I16(Endian::Big).write(&mut bytes, f64::NAN);
        assert_eq!(Encoding::I16(Endian::Big).read(&bytes), 0.0);
    }

    #[test]
    fn test_float() {
        let mut bytes = [0u8; 8];

        Encoding::F32(Endian::Little).write(&mut bytes, -0.5);
        assert_eq!(&bytes[..4], &(-0.5f32).to_le_bytes());
        assert_eq!(Encoding::F32(Endian::Little).read(&bytes), -0.5);

        Encoding::F64(Endian::Big).write(&mut bytes, 0.25);
        assert_eq!(bytes, 0.25f64.to_be_bytes());
        assert_eq!(Encoding::F64(Endian::Big).read(&bytes), 0.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Encoding::U8.to_string(), "UInt8");
        assert_eq!(Encoding::I16(Endian::Little).to_string(), "Int16LE");
        assert_eq!(Encoding::F32(Endian::Big).to_string(), "FloatBE");
        assert_eq!(Encoding::F64(Endian::Little).to_string(), "DoubleLE");
    }
}

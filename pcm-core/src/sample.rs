/// A primitive type which can hold one decoded sample, such as the element of
/// a typed sample slice.
///
/// This is used to infer the format of a slice of samples, see
/// [FormatSource][crate::FormatSource].
///
/// ```rust
/// use pcm_core::TypedSample;
///
/// assert!(f32::FLOAT);
/// assert_eq!(i16::BIT_DEPTH, 16);
/// assert!(!u8::SIGNED);
/// ```
pub trait TypedSample: Copy {
    /// The sample is a floating point number.
    const FLOAT: bool;
    /// The sample is signed.
    const SIGNED: bool;
    /// The number of bits in the sample.
    const BIT_DEPTH: u32;
}

// Helper macro to implement [TypedSample] for primitive types.
macro_rules! impl_typed {
    ($ty:ty, $float:expr, $signed:expr) => {
        impl TypedSample for $ty {
            const FLOAT: bool = $float;
            const SIGNED: bool = $signed;
            const BIT_DEPTH: u32 = (std::mem::size_of::<$ty>() * 8) as u32;
        }
    };
}

impl_typed!(u8, false, false);
impl_typed!(u16, false, false);
impl_typed!(u32, false, false);
impl_typed!(i8, false, true);
impl_typed!(i16, false, true);
impl_typed!(i32, false, true);
impl_typed!(f32, true, true);
impl_typed!(f64, true, true);

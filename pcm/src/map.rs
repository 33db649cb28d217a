use pcm_core::Format;

use crate::channel::round;

/// Apply `f` to every sample in `buf`, returning a new buffer in the same
/// format.
///
/// This works on the flat sequence of samples, regardless of channels and
/// layout. For integer formats the result of `f` is rounded to the nearest
/// integer, with halves rounded up, and saturated to the range of the
/// format. Trailing bytes which don't make up a complete sample are left as
/// zeros in the new buffer.
///
/// # Examples
///
/// ```rust
/// use pcm::{Format, PartialFormat};
///
/// let format = Format::normalize(&PartialFormat::new())?;
///
/// let buf: Vec<u8> = [20001i16, -10001, 32767, -32768].iter().flat_map(|s| s.to_ne_bytes()).collect();
/// let out = pcm::map_samples(&buf, |x| x * -0.5, &format);
///
/// let samples: Vec<i16> = out.chunks(2).map(|c| i16::from_ne_bytes([c[0], c[1]])).collect();
/// assert_eq!(samples, [-10000, 5001, -16383, 16384]);
/// # Ok::<_, pcm::Error>(())
/// ```
pub fn map_samples<F>(buf: &[u8], mut f: F, format: &Format) -> Vec<u8>
where
    F: FnMut(f64) -> f64,
{
    let size = format.sample_size();
    let encoding = format.encoding();
    let mut out = vec![0u8; buf.len()];

    if buf.len() % size != 0 {
        tracing::warn!(
            len = buf.len(),
            format = %format,
            "buffer ends with an incomplete sample"
        );
    }

    for (from, to) in buf.chunks_exact(size).zip(out.chunks_exact_mut(size)) {
        let value = f(encoding.read(from));

        let value = if format.is_float() {
            value
        } else {
            round(value)
        };

        encoding.write(to, value);
    }

    out
}

//! In-place helpers over interleaved `(re, im)` scalar buffers.
//!
//! ```text
//!   [0]   [1]   [2]   [3]  ...  [2n-2]  [2n-1]
//! Re[0] Im[0] Re[1] Im[1]  ...  Re[n-1] Im[n-1]
//! ```

use crate::num::Float;

/// Scalars per complex pair.
pub const STRIDE: usize = 2;

/// Reverse the order of the complex pairs in `buf[..count]`, in place.
///
/// `count` is a number of scalars, so `count / 2` pairs are involved and
/// pair `i` trades places with pair `count / 2 - 1 - i`. The real/imaginary
/// order inside each pair is kept. `count` of 0 or 2 leaves the buffer
/// untouched, and applying the swap twice restores the original contents.
///
/// `count` must be even and no larger than `buf.len()`.
#[inline]
pub fn cmplx_swap<T: Copy>(buf: &mut [T], count: usize) {
    debug_assert!(count % STRIDE == 0, "cmplx_swap: odd scalar count {count}");
    debug_assert!(
        count <= buf.len(),
        "cmplx_swap: count {count} exceeds buffer of {}",
        buf.len()
    );
    let pairs = count / STRIDE;
    for k in 0..pairs / 2 {
        let lo = STRIDE * k;
        let hi = count - STRIDE * (k + 1);
        // both ends are read before either is written
        let re = buf[lo];
        let im = buf[lo + 1];
        buf[lo] = buf[hi];
        buf[lo + 1] = buf[hi + 1];
        buf[hi] = re;
        buf[hi + 1] = im;
    }
}

/// Write the complex conjugate of the first `pairs` pairs of `src` into
/// `dst`, keeping their order.
#[inline]
pub fn conj_into<T: Float>(src: &[T], dst: &mut [T], pairs: usize) {
    let count = STRIDE * pairs;
    debug_assert!(count <= src.len(), "conj_into: source too short");
    debug_assert!(count <= dst.len(), "conj_into: destination too short");
    for (d, s) in dst[..count]
        .chunks_exact_mut(STRIDE)
        .zip(src[..count].chunks_exact(STRIDE))
    {
        d[0] = s[0];
        d[1] = -s[1];
    }
}

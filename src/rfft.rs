//! Fast real FFT backend built on a half-length complex FFT.
//!
//! An `N`-point real signal is viewed as `N/2` complex samples
//! `z[i] = x[2i] + i*x[2i+1]`, transformed with an in-place radix-2 FFT and
//! then split into the even/odd spectra to recover bins `0..=N/2`. The
//! result is written in the real-packed layout described in
//! [`crate::transform`], the same layout an `rfft_fast` style instance on a
//! microcontroller produces.

use alloc::{collections::VecDeque, sync::Arc, vec, vec::Vec};

use hashbrown::HashMap;

use crate::mirror::STRIDE;
use crate::num::{pair, Complex, Float};
use crate::transform::{validate_len, Direction, FftError, RealTransform};

/// Scalar used for halving values during the split step.
pub const HALF: f32 = 0.5;

/// Maximum number of cached twiddle tables to retain in the planner.
pub const MAX_CACHE_ENTRIES: usize = 64;

/// Build the table `e^(-iπk/m)` for `k in 0..m`.
///
/// The split step needs every entry; the half-length complex FFT reads the
/// even entries, which are its own `e^(-2πik/m)` twiddles. Entries are
/// evaluated directly rather than by repeated multiplication so long tables
/// do not accumulate rounding drift.
fn build_twiddle_table<T: Float>(m: usize) -> Result<Vec<Complex<T>>, FftError> {
    if m == 0 {
        return Err(FftError::InvalidValue);
    }
    let m_t = T::from_usize(m).ok_or(FftError::InvalidValue)?;
    let step = -T::pi() / m_t;
    (0..m)
        .map(|k| {
            let k_t = T::from_usize(k).ok_or(FftError::InvalidValue)?;
            Ok(Complex::expi(step * k_t))
        })
        .collect()
}

/// In-place iterative radix-2 FFT over `buf` (length a power of two).
///
/// `twiddles` is a [`build_twiddle_table`] table of the same length.
fn fft_in_place<T: Float>(buf: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let m = buf.len();
    if m <= 1 {
        return;
    }
    debug_assert!(m.is_power_of_two());
    debug_assert!(twiddles.len() >= m);
    // Bit-reversal permutation
    let mut j = 0;
    for i in 1..m {
        let mut bit = m >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            buf.swap(i, j);
        }
    }
    let mut len = 2;
    while len <= m {
        let half = len / 2;
        let stride = 2 * m / len;
        let mut i = 0;
        while i < m {
            for k in 0..half {
                let w = twiddles[k * stride];
                let u = buf[i + k];
                let v = buf[i + k + half].mul(w);
                buf[i + k] = u.add(v);
                buf[i + k + half] = u.sub(v);
            }
            i += len;
        }
        len <<= 1;
    }
}

/// Inverse of [`fft_in_place`], scaled by `1 / buf.len()`.
fn ifft_in_place<T: Float>(buf: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let m = buf.len();
    for c in buf.iter_mut() {
        c.im = -c.im;
    }
    fft_in_place(buf, twiddles);
    let scale = T::one() / T::from_usize(m).unwrap_or_else(T::one);
    for c in buf.iter_mut() {
        *c = c.conj().scale(scale);
    }
}

/// Planner that caches twiddle tables by half-length.
///
/// Tables are shared between every [`RfftFast`] planned for the same length.
/// Cached tables are evicted in least-recently-used order once more than
/// [`MAX_CACHE_ENTRIES`] are retained.
pub struct RfftPlanner<T: Float> {
    cache: HashMap<usize, Arc<[Complex<T>]>>,
    /// LRU order for the twiddle cache.
    cache_order: VecDeque<usize>,
}

impl<T: Float> Default for RfftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RfftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            cache_order: VecDeque::new(),
        }
    }

    /// Retrieve or build the twiddle table for half-length `m`.
    pub fn get_twiddles(&mut self, m: usize) -> Result<Arc<[Complex<T>]>, FftError> {
        let table = match self.cache.get(&m) {
            Some(table) => Arc::clone(table),
            None => {
                crate::vlog!(debug, "building rfft twiddle table for m = {}", m);
                let table: Arc<[Complex<T>]> = Arc::from(build_twiddle_table::<T>(m)?);
                if self.cache.len() == MAX_CACHE_ENTRIES {
                    if let Some(old) = self.cache_order.pop_front() {
                        crate::vlog!(debug, "evicting rfft twiddle table for m = {}", old);
                        self.cache.remove(&old);
                    }
                }
                self.cache.insert(m, Arc::clone(&table));
                table
            }
        };
        self.cache_order.retain(|&x| x != m);
        self.cache_order.push_back(m);
        Ok(table)
    }

    /// Number of entries currently stored in the twiddle cache.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Build an initialized [`RfftFast`] for `length`, sharing cached tables.
    pub fn plan(&mut self, length: usize) -> Result<RfftFast<T>, FftError> {
        validate_len(length)?;
        let twiddles = self.get_twiddles(length / STRIDE)?;
        Ok(RfftFast::from_table(length, twiddles))
    }
}

/// Real FFT instance for one power-of-two length.
///
/// Holds its twiddle table and an `N/2` complex scratch buffer, both sized at
/// initialization; `execute` itself never allocates.
pub struct RfftFast<T: Float> {
    len: usize,
    twiddles: Arc<[Complex<T>]>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float> Default for RfftFast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RfftFast<T> {
    /// Create an unconfigured instance; call
    /// [`initialize`](RealTransform::initialize) before executing.
    pub fn new() -> Self {
        Self {
            len: 0,
            twiddles: Arc::from(Vec::new()),
            scratch: Vec::new(),
        }
    }

    /// Create and initialize in one go.
    pub fn with_len(length: usize) -> Result<Self, FftError> {
        let mut rfft = Self::new();
        rfft.initialize(length)?;
        Ok(rfft)
    }

    fn from_table(length: usize, twiddles: Arc<[Complex<T>]>) -> Self {
        Self {
            len: length,
            twiddles,
            scratch: vec![Complex::zero(); length / STRIDE],
        }
    }

    fn forward(&mut self, input: &[T], output: &mut [T]) {
        let m = self.len / STRIDE;
        let Self {
            twiddles, scratch, ..
        } = self;
        for (i, z) in scratch.iter_mut().enumerate() {
            *z = pair(input, i);
        }
        fft_in_place(scratch, twiddles);
        let y0 = scratch[0];
        output[0] = y0.re + y0.im;
        output[1] = y0.re - y0.im;
        let half = T::from_f32(HALF);
        for k in 1..m {
            let a = scratch[k];
            let b = scratch[m - k].conj();
            let sum = a.add(b);
            let diff = a.sub(b);
            let t = twiddles[k].mul(diff);
            let x = sum.add(Complex::new(t.im, -t.re)).scale(half);
            output[STRIDE * k] = x.re;
            output[STRIDE * k + 1] = x.im;
        }
    }

    fn inverse(&mut self, input: &[T], output: &mut [T]) {
        let m = self.len / STRIDE;
        let Self {
            twiddles, scratch, ..
        } = self;
        let half = T::from_f32(HALF);
        scratch[0] = Complex::new((input[0] + input[1]) * half, (input[0] - input[1]) * half);
        for k in 1..m {
            let a = pair(input, k);
            let b = pair(input, m - k).conj();
            let sum = a.add(b);
            let diff = a.sub(b);
            let t = twiddles[k].conj().mul(diff);
            scratch[k] = sum.sub(Complex::new(t.im, -t.re)).scale(half);
        }
        ifft_in_place(scratch, twiddles);
        for (i, z) in scratch.iter().enumerate() {
            output[STRIDE * i] = z.re;
            output[STRIDE * i + 1] = z.im;
        }
    }
}

impl<T: Float> RealTransform<T> for RfftFast<T> {
    fn initialize(&mut self, length: usize) -> Result<(), FftError> {
        validate_len(length)?;
        let m = length / STRIDE;
        let twiddles = build_twiddle_table::<T>(m)?;
        *self = Self::from_table(length, Arc::from(twiddles));
        crate::vlog!(debug, "rfft initialized for length {}", length);
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn execute(&mut self, input: &mut [T], output: &mut [T], direction: Direction) {
        debug_assert!(self.len != 0, "RfftFast executed before initialize");
        debug_assert!(input.len() >= self.len && output.len() >= self.len);
        match direction {
            Direction::Forward => self.forward(input, output),
            Direction::Inverse => self.inverse(input, output),
        }
    }
}

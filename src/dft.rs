//! Direct O(N^2) DFT backend speaking the real-packed layout.
//!
//! Slow, but it allocates nothing (twiddles are evaluated on the fly) and
//! its arithmetic is easy to audit, which makes it the reference the fast
//! backend and the repacker are tested against.

use crate::num::{Complex, Float};
use crate::transform::{validate_len, Direction, FftError, RealTransform};

/// Reference real DFT. Must be initialized before use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDft<T: Float> {
    len: usize,
    /// `-2π / len`, fixed at initialization.
    step: Option<T>,
}

impl<T: Float> NaiveDft<T> {
    pub fn new() -> Self {
        Self {
            len: 0,
            step: None,
        }
    }

    /// Create and initialize in one go.
    pub fn with_len(length: usize) -> Result<Self, FftError> {
        let mut dft = Self::new();
        dft.initialize(length)?;
        Ok(dft)
    }

    /// `e^(-2πi * idx / len)` for `idx < len`.
    #[inline]
    fn twiddle(&self, step: T, idx: usize) -> Complex<T> {
        // idx < len, and len was checked to be exactly representable
        let k = T::from_usize(idx).unwrap_or_else(T::zero);
        Complex::expi(step * k)
    }

    fn forward(&self, step: T, input: &[T], output: &mut [T]) {
        let n = self.len;
        let half = n / 2;
        for k in 0..=half {
            let mut acc = Complex::zero();
            for (i, &x) in input[..n].iter().enumerate() {
                let w = self.twiddle(step, (k * i) % n);
                acc = acc.add(w.scale(x));
            }
            match k {
                0 => output[0] = acc.re,
                k if k == half => output[1] = acc.re,
                k => {
                    output[2 * k] = acc.re;
                    output[2 * k + 1] = acc.im;
                }
            }
        }
    }

    fn inverse(&self, step: T, input: &[T], output: &mut [T]) {
        let n = self.len;
        let half = n / 2;
        let two = T::from_f32(2.0);
        let scale = T::one() / T::from_usize(n).unwrap_or_else(T::one);
        let dc = input[0];
        let nyquist = input[1];
        for (i, out) in output[..n].iter_mut().enumerate() {
            let mut acc = if i % 2 == 0 { dc + nyquist } else { dc - nyquist };
            for k in 1..half {
                // Re(X * e^(+iθ)) with w = e^(-iθ)
                let w = self.twiddle(step, (k * i) % n);
                let re = input[2 * k];
                let im = input[2 * k + 1];
                acc = acc + two * (re * w.re + im * w.im);
            }
            *out = acc * scale;
        }
    }
}

impl<T: Float> RealTransform<T> for NaiveDft<T> {
    fn initialize(&mut self, length: usize) -> Result<(), FftError> {
        validate_len(length)?;
        let n = T::from_usize(length).ok_or(FftError::InvalidValue)?;
        self.len = length;
        self.step = Some(-T::from_f32(2.0) * T::pi() / n);
        crate::vlog!(debug, "naive dft initialized for length {}", length);
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn execute(&mut self, input: &mut [T], output: &mut [T], direction: Direction) {
        debug_assert!(self.step.is_some(), "NaiveDft executed before initialize");
        debug_assert!(input.len() >= self.len && output.len() >= self.len);
        let Some(step) = self.step else {
            return;
        };
        match direction {
            Direction::Forward => self.forward(step, input, output),
            Direction::Inverse => self.inverse(step, input, output),
        }
    }
}

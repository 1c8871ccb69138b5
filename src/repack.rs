//! Presents a real-packed transform as a full complex spectrum.
//!
//! For a transform of length `N` the forward direction turns the backend's
//! `N`-scalar packed output into `2N` scalars holding all `N` bins:
//!
//! ```text
//! packed:  Re[0] Re[N/2] | Re[1] Im[1] ... Re[N/2-1] Im[N/2-1]
//! full:    Re[0] 0       | Re[1] Im[1] ... Re[N/2-1] Im[N/2-1]
//!          Re[N/2] 0     | Re[N/2-1] -Im[N/2-1] ... Re[1] -Im[1]
//! ```
//!
//! The inverse direction reads a full spectrum, moves the Nyquist real part
//! back into slot 1 and hands the first `N` scalars to the backend. Bins
//! above Nyquist are never consulted; conjugate symmetry is assumed.

use core::marker::PhantomData;

use crate::dft::NaiveDft;
use crate::mirror::{cmplx_swap, conj_into, STRIDE};
use crate::num::Float;
use crate::rfft::{RfftFast, RfftPlanner};
use crate::transform::{validate_len, Direction, FftError, RealTransform, MIN_LEN};

/// Run `instance` and repack so the result matches a complex-to-complex FFT.
///
/// - `Forward`: `input[..length]` holds real samples (the backend may use it
///   as workspace); `output[..2 * length]` receives the full spectrum.
/// - `Inverse`: `input` holds a full spectrum of which `input[..=length]` is
///   read (slot 1 is overwritten); `output[..length]` receives the real
///   samples, scaled as the backend scales its inverse.
///
/// `length` must be the power of two `instance` was initialized with and
/// the buffers must be sized as above. These are caller obligations checked
/// only by debug assertions; see [`try_r2cfft`] for the checked variant.
pub fn r2cfft<T: Float, B: RealTransform<T> + ?Sized>(
    instance: &mut B,
    input: &mut [T],
    output: &mut [T],
    length: usize,
    direction: Direction,
) {
    debug_assert!(length >= MIN_LEN && length.is_power_of_two());
    debug_assert_eq!(instance.len(), length, "instance configured for another length");
    match direction {
        Direction::Inverse => {
            debug_assert!(input.len() > length && output.len() >= length);
            // the packed layout expects Re[N/2] where Im[0] would be
            input[1] = input[length];
            instance.execute(&mut input[..length], &mut output[..length], direction);
        }
        Direction::Forward => {
            debug_assert!(input.len() >= length && output.len() >= STRIDE * length);
            instance.execute(&mut input[..length], &mut output[..length], direction);
            let (packed, upper) = output[..STRIDE * length].split_at_mut(length);
            // bins 1..N/2 conjugated into N/2+1.., then flipped to descend
            conj_into(&packed[STRIDE..], &mut upper[STRIDE..], length / STRIDE - 1);
            cmplx_swap(&mut upper[STRIDE..], length - STRIDE);
            upper[0] = packed[1];
            upper[1] = T::zero();
            packed[1] = T::zero();
        }
    }
}

/// Validate every precondition of [`r2cfft`] without touching the buffers.
fn check_call<T: Float, B: RealTransform<T> + ?Sized>(
    instance: &B,
    input: &[T],
    output: &[T],
    length: usize,
    direction: Direction,
) -> Result<(), FftError> {
    validate_len(length)?;
    if instance.is_empty() {
        return Err(FftError::Uninitialized);
    }
    if instance.len() != length {
        return Err(FftError::MismatchedLengths);
    }
    let (need_in, need_out) = match direction {
        Direction::Forward => (length, STRIDE * length),
        Direction::Inverse => (length + 1, length),
    };
    if input.len() < need_in || output.len() < need_out {
        return Err(FftError::MismatchedLengths);
    }
    Ok(())
}

/// Checked form of [`r2cfft`]: rejects bad lengths, an unconfigured or
/// mismatched instance and short buffers before running the transform.
pub fn try_r2cfft<T: Float, B: RealTransform<T> + ?Sized>(
    instance: &mut B,
    input: &mut [T],
    output: &mut [T],
    length: usize,
    direction: Direction,
) -> Result<(), FftError> {
    if let Err(e) = check_call(instance, input, output, length, direction) {
        crate::vlog!(warn, "{:?} repack of length {} rejected: {}", direction, length, e);
        return Err(e);
    }
    r2cfft(instance, input, output, length, direction);
    Ok(())
}

/// A transform backend bound to its length, exposing full-spectrum
/// forward and inverse calls.
pub struct R2cFft<T: Float, B: RealTransform<T>> {
    backend: B,
    len: usize,
    _scalar: PhantomData<T>,
}

impl<T: Float, B: RealTransform<T>> R2cFft<T, B> {
    /// Initialize `backend` for `length` and wrap it.
    pub fn new(mut backend: B, length: usize) -> Result<Self, FftError> {
        backend.initialize(length)?;
        Ok(Self {
            backend,
            len: length,
            _scalar: PhantomData,
        })
    }

    /// Wrap a backend that has already been initialized.
    pub fn from_initialized(backend: B) -> Result<Self, FftError> {
        if backend.is_empty() {
            return Err(FftError::Uninitialized);
        }
        let len = backend.len();
        Ok(Self {
            backend,
            len,
            _scalar: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    /// `len()` real samples in, `2 * len()` scalars of full spectrum out.
    pub fn forward(&mut self, input: &mut [T], output: &mut [T]) -> Result<(), FftError> {
        try_r2cfft(&mut self.backend, input, output, self.len, Direction::Forward)
    }

    /// Full spectrum in (at least `len() + 1` scalars), `len()` samples out.
    pub fn inverse(&mut self, input: &mut [T], output: &mut [T]) -> Result<(), FftError> {
        try_r2cfft(&mut self.backend, input, output, self.len, Direction::Inverse)
    }
}

impl<T: Float> R2cFft<T, RfftFast<T>> {
    /// Full-spectrum transform over the fast real FFT.
    pub fn fast(length: usize) -> Result<Self, FftError> {
        Self::new(RfftFast::new(), length)
    }

    /// Like [`fast`](Self::fast) but sharing twiddle tables through `planner`.
    pub fn planned(planner: &mut RfftPlanner<T>, length: usize) -> Result<Self, FftError> {
        Self::from_initialized(planner.plan(length)?)
    }
}

impl<T: Float> R2cFft<T, NaiveDft<T>> {
    /// Full-spectrum transform over the allocation-free reference DFT.
    pub fn reference(length: usize) -> Result<Self, FftError> {
        Self::new(NaiveDft::new(), length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Backend that writes a fixed packed spectrum, so the repacking can be
    /// checked independently of any transform arithmetic.
    struct Canned<'a> {
        packed: &'a [f32],
        seen_inverse: Option<[f32; 2]>,
    }

    impl RealTransform<f32> for Canned<'_> {
        fn initialize(&mut self, length: usize) -> Result<(), FftError> {
            validate_len(length)
        }
        fn len(&self) -> usize {
            self.packed.len()
        }
        fn execute(&mut self, input: &mut [f32], output: &mut [f32], direction: Direction) {
            match direction {
                Direction::Forward => output.copy_from_slice(self.packed),
                Direction::Inverse => self.seen_inverse = Some([input[0], input[1]]),
            }
        }
    }

    #[test]
    fn forward_places_mirrored_bin_for_length_four() {
        // DC = 2, Nyquist = 0, bin 1 = 1 - 1i
        let mut backend = Canned {
            packed: &[2.0, 0.0, 1.0, -1.0],
            seen_inverse: None,
        };
        let mut input = [0.0f32; 4];
        let mut output = [f32::NAN; 8];
        r2cfft(&mut backend, &mut input, &mut output, 4, Direction::Forward);
        assert_eq!(output, [2.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn forward_reverses_upper_half() {
        // N = 8: bins 1..3 = (1,2) (3,4) (5,6), Nyquist = 9
        let mut backend = Canned {
            packed: &[7.0, 9.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            seen_inverse: None,
        };
        let mut input = [0.0f32; 8];
        let mut output = [f32::NAN; 16];
        r2cfft(&mut backend, &mut input, &mut output, 8, Direction::Forward);
        let expected = [
            7.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, // bins 0..3
            9.0, 0.0, 5.0, -6.0, 3.0, -4.0, 1.0, -2.0, // bins 4..7
        ];
        assert_eq!(output, expected);
    }

    #[test]
    fn inverse_repacks_nyquist() {
        let mut backend = Canned {
            packed: &[0.0; 8],
            seen_inverse: None,
        };
        let mut input = vec![0.0f32; 16];
        input[0] = 3.0;
        input[1] = 0.0;
        input[8] = -5.0;
        let mut output = [0.0f32; 8];
        r2cfft(&mut backend, &mut input, &mut output, 8, Direction::Inverse);
        assert_eq!(backend.seen_inverse, Some([3.0, -5.0]));
        assert_eq!(input[1], -5.0);
    }

    #[test]
    fn length_two_has_no_mirror_region() {
        let mut backend = Canned {
            packed: &[3.0, -1.0],
            seen_inverse: None,
        };
        let mut input = [0.0f32; 2];
        let mut output = [f32::NAN; 4];
        r2cfft(&mut backend, &mut input, &mut output, 2, Direction::Forward);
        assert_eq!(output, [3.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn checked_call_rejects_preconditions() {
        let mut dft = NaiveDft::<f32>::new();
        let mut input = [0.0f32; 8];
        let mut output = [0.0f32; 16];
        assert_eq!(
            try_r2cfft(&mut dft, &mut input, &mut output, 8, Direction::Forward),
            Err(FftError::Uninitialized)
        );
        dft.initialize(8).unwrap();
        assert_eq!(
            try_r2cfft(&mut dft, &mut input, &mut output, 0, Direction::Forward),
            Err(FftError::EmptyInput)
        );
        assert_eq!(
            try_r2cfft(&mut dft, &mut input, &mut output, 6, Direction::Forward),
            Err(FftError::NonPowerOfTwo)
        );
        assert_eq!(
            try_r2cfft(&mut dft, &mut input, &mut output, 4, Direction::Forward),
            Err(FftError::MismatchedLengths)
        );
        assert_eq!(
            try_r2cfft(&mut dft, &mut input, &mut output[..15], 8, Direction::Forward),
            Err(FftError::MismatchedLengths)
        );
        assert_eq!(
            try_r2cfft(&mut dft, &mut input, &mut output[..8], 8, Direction::Inverse),
            Err(FftError::MismatchedLengths)
        );
        assert_eq!(
            try_r2cfft(&mut dft, &mut output, &mut input, 8, Direction::Inverse),
            Ok(())
        );
    }

    #[test]
    fn wrapper_binds_length() {
        let mut fft: R2cFft<f64, NaiveDft<f64>> = R2cFft::reference(8).unwrap();
        assert_eq!(fft.len(), 8);
        let mut input = [1.0f64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut output = [0.0f64; 16];
        fft.forward(&mut input, &mut output).unwrap();
        assert_eq!(fft.inverse(&mut input, &mut output).err(), Some(FftError::MismatchedLengths));
        assert!(R2cFft::from_initialized(RfftFast::<f32>::new()).is_err());
        assert_eq!(fft.into_inner().len(), 8);
    }
}

//! The real-to-complex transform capability the repacker drives.
//!
//! A backend is configured once for a power-of-two length and then executed
//! any number of times. It speaks only the real-packed layout:
//!
//! ```text
//!  [0]    [1]        [2]    [3]    ...  [N-2]        [N-1]
//!  Re[0]  Re[N/2]    Re[1]  Im[1]  ...  Re[N/2-1]    Im[N/2-1]
//! ```
//!
//! DC and Nyquist are both purely real for a real signal, so the Nyquist real
//! part rides in the slot DC's imaginary part would otherwise occupy.

use core::fmt;

use crate::num::Float;

/// Smallest transform length a backend accepts.
pub const MIN_LEN: usize = 2;

/// Direction of a transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    pub fn is_inverse(self) -> bool {
        matches!(self, Direction::Inverse)
    }
}

/// Errors reported by backend configuration and the checked repack paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// A zero-length transform or buffer was supplied.
    EmptyInput,
    /// The transform length is not a power of two of at least [`MIN_LEN`].
    NonPowerOfTwo,
    /// A buffer is too short for the configured length, or the length passed
    /// to a call disagrees with the backend's configuration.
    MismatchedLengths,
    /// A length cannot be represented exactly in the scalar type.
    InvalidValue,
    /// The backend was executed before [`RealTransform::initialize`].
    Uninitialized,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "transform length or buffer is empty"),
            FftError::NonPowerOfTwo => {
                write!(f, "transform length must be a power of two >= {}", MIN_LEN)
            }
            FftError::MismatchedLengths => {
                write!(f, "buffer or length does not match the configured transform")
            }
            FftError::InvalidValue => write!(f, "length is not representable in the scalar type"),
            FftError::Uninitialized => write!(f, "transform instance has not been initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Check that `length` is a usable real-transform length.
pub fn validate_len(length: usize) -> Result<(), FftError> {
    if length == 0 {
        return Err(FftError::EmptyInput);
    }
    if length < MIN_LEN || !length.is_power_of_two() {
        return Err(FftError::NonPowerOfTwo);
    }
    Ok(())
}

/// A real-input FFT producing and consuming the real-packed layout.
///
/// `execute` is the hot path and does not report errors: buffer sizing is a
/// caller obligation checked only by debug assertions. Inverse output is
/// scaled by `1 / len()` so a forward call followed by an inverse call is the
/// identity.
pub trait RealTransform<T: Float> {
    /// Configure the instance for `length`. Calling it again reconfigures
    /// the instance for a new length.
    fn initialize(&mut self, length: usize) -> Result<(), FftError>;

    /// Configured length, or zero before [`initialize`](Self::initialize).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward: `input[..len]` real samples into `output[..len]` packed bins.
    /// Inverse: `input[..len]` packed bins into `output[..len]` real samples.
    ///
    /// `input` may be used as workspace by a backend.
    fn execute(&mut self, input: &mut [T], output: &mut [T], direction: Direction);
}

impl<T: Float, R: RealTransform<T> + ?Sized> RealTransform<T> for &mut R {
    fn initialize(&mut self, length: usize) -> Result<(), FftError> {
        (**self).initialize(length)
    }
    fn len(&self) -> usize {
        (**self).len()
    }
    fn execute(&mut self, input: &mut [T], output: &mut [T], direction: Direction) {
        (**self).execute(input, output, direction)
    }
}

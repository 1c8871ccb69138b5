//! # r2cfft - full complex spectra from a real-input FFT
//!
//! A real-to-complex FFT does roughly half the work of a complex FFT of the
//! same length, but it hands back a packed spectrum: `N` scalars, with the
//! Nyquist real part tucked into DC's imaginary slot and the conjugate
//! half of the spectrum left out. This crate runs such a transform and
//! repacks its output, in place and without allocating, into the `2N`
//! scalar interleaved layout a complex-to-complex FFT produces. The inverse
//! direction accepts that full layout and repacks it before running the
//! inverse real transform.
//!
//! ## Modules
//!
//! - [`mirror`]: in-place pair reversal and conjugation over interleaved
//!   `(re, im)` buffers
//! - [`repack`]: [`r2cfft`](repack::r2cfft), its checked form and the
//!   [`R2cFft`](repack::R2cFft) wrapper
//! - [`transform`]: the [`RealTransform`](transform::RealTransform) backend
//!   trait, [`Direction`](transform::Direction) and
//!   [`FftError`](transform::FftError)
//! - [`rfft`]: fast real FFT backend with a caching planner
//! - [`dft`]: allocation-free reference DFT backend
//! - [`num`]: `Float` and `Complex` types
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`](transform::FftError)
//! - `verbose-logging`: emit backend setup, planner cache and rejected-call
//!   messages through the `log` facade
//!
//! ## Example
//!
//! ```
//! use r2cfft::{R2cFft, RfftFast};
//!
//! let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(8).unwrap();
//! let mut signal = [1.0f32, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let mut spectrum = [0.0f32; 16];
//! fft.forward(&mut signal, &mut spectrum).unwrap();
//! // the DFT of an impulse is flat
//! for bin in spectrum.chunks_exact(2) {
//!     assert!((bin[0] - 1.0).abs() < 1e-6 && bin[1].abs() < 1e-6);
//! }
//!
//! let mut restored = [0.0f32; 8];
//! fft.inverse(&mut spectrum, &mut restored).unwrap();
//! assert!((restored[0] - 1.0).abs() < 1e-6);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Forward `log` calls when `verbose-logging` is enabled; otherwise the
/// arguments are type-checked and dropped.
#[cfg(feature = "verbose-logging")]
#[macro_export]
#[doc(hidden)]
macro_rules! vlog {
    ($lvl:ident, $($arg:tt)+) => {
        ::log::$lvl!($($arg)+)
    };
}

#[cfg(not(feature = "verbose-logging"))]
#[macro_export]
#[doc(hidden)]
macro_rules! vlog {
    ($lvl:ident, $($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

pub mod dft;
pub mod mirror;
/// Scalar and complex number types.
pub mod num;
pub mod repack;
/// Fast real FFT backend and twiddle planner.
pub mod rfft;
pub mod transform;

pub use dft::NaiveDft;
pub use mirror::{cmplx_swap, conj_into};
pub use num::{Complex, Complex32, Complex64, Float};
pub use repack::{r2cfft, try_r2cfft, R2cFft};
pub use rfft::{RfftFast, RfftPlanner};
pub use transform::{Direction, FftError, RealTransform};

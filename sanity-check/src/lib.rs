//! Round-trip check of the full-spectrum adapter against `rustfft`.
//!
//! Mirrors the bring-up program the adapter was first exercised with: a
//! half-length test signal is placed in the upper half of the working
//! buffer, transformed forward and back, and both passes are timed.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use r2cfft::{FftError, NaiveDft, R2cFft, RealTransform, RfftFast};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::{num_complex::Complex, FftPlanner};

/// Test signal written into the upper half of the buffer.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Unit impulse at the first captured sample.
    Impulse,
    /// Two-tone sine mix.
    Sine,
    /// Uniform noise in [-1, 1).
    Noise,
}

/// Transform backend the adapter drives.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Fast,
    Naive,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub len: usize,
    pub forward: Duration,
    pub inverse: Duration,
    /// Largest |x - inverse(forward(x))|.
    pub roundtrip_error: f32,
    /// Largest deviation from X[N-k] = conj(X[k]).
    pub symmetry_error: f32,
    /// Largest deviation from a complex FFT of the same signal.
    pub reference_error: f32,
}

/// Fill an `n`-sample buffer: lower half zero, `signal` in the upper half.
pub fn make_signal(n: usize, signal: Signal, seed: u64) -> Vec<f32> {
    let half = n / 2;
    let mut buf = vec![0.0f32; n];
    match signal {
        Signal::Impulse => buf[half] = 1.0,
        Signal::Sine => {
            for (i, x) in buf[half..].iter_mut().enumerate() {
                let t = i as f32 / n as f32;
                *x = (2.0 * std::f32::consts::PI * 5.0 * t).sin() * 0.7
                    + (2.0 * std::f32::consts::PI * 31.0 * t).cos() * 0.3;
            }
        }
        Signal::Noise => {
            let mut rng = StdRng::seed_from_u64(seed);
            for x in &mut buf[half..] {
                *x = rng.gen_range(-1.0..1.0);
            }
        }
    }
    buf
}

fn max_abs_diff<'a>(pairs: impl Iterator<Item = (&'a f32, f32)>) -> f32 {
    pairs.map(|(a, b)| (a - b).abs()).fold(0.0, f32::max)
}

/// Largest conjugate-symmetry deviation of a full `2 * n` scalar spectrum.
pub fn symmetry_error(full: &[f32], n: usize) -> f32 {
    (1..n / 2)
        .map(|k| {
            let re = (full[2 * k] - full[2 * (n - k)]).abs();
            let im = (full[2 * k + 1] + full[2 * (n - k) + 1]).abs();
            re.max(im)
        })
        .fold(0.0, f32::max)
}

/// Complex FFT of `signal` through `rustfft`, interleaved.
pub fn reference_spectrum(signal: &[f32]) -> Vec<f32> {
    let mut buf: Vec<Complex<f32>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    FftPlanner::<f32>::new()
        .plan_fft_forward(signal.len())
        .process(&mut buf);
    buf.iter().flat_map(|c| [c.re, c.im]).collect()
}

fn run_with<B: RealTransform<f32>>(
    mut fft: R2cFft<f32, B>,
    signal: &[f32],
) -> Result<Report, FftError> {
    let n = fft.len();
    let mut time = signal.to_vec();
    let mut full = vec![0.0f32; 2 * n];

    let start = Instant::now();
    fft.forward(&mut time, &mut full)?;
    let forward = start.elapsed();

    let symmetry = symmetry_error(&full, n);
    let reference = reference_spectrum(signal);
    let reference_error = max_abs_diff(full.iter().zip(reference.iter().copied()));

    let start = Instant::now();
    fft.inverse(&mut full, &mut time)?;
    let inverse = start.elapsed();

    Ok(Report {
        len: n,
        forward,
        inverse,
        roundtrip_error: max_abs_diff(signal.iter().zip(time.iter().copied())),
        symmetry_error: symmetry,
        reference_error,
    })
}

/// Run one forward/inverse cycle of length `n` over `backend`.
pub fn run(n: usize, backend: Backend, signal: Signal, seed: u64) -> Result<Report, FftError> {
    let input = make_signal(n, signal, seed);
    log::debug!("running {:?} round trip of length {} on {:?}", backend, n, signal);
    match backend {
        Backend::Fast => run_with(R2cFft::<f32, RfftFast<f32>>::fast(n)?, &input),
        Backend::Naive => run_with(R2cFft::<f32, NaiveDft<f32>>::reference(n)?, &input),
    }
}

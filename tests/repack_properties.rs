// Test intent: checks round trip, conjugate symmetry and special-bin
// invariants of the full layout over both backends.
use proptest::prelude::*;
use r2cfft::{Float, NaiveDft, R2cFft, RealTransform, RfftFast, RfftPlanner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_signal(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn assert_conjugate_symmetric<T: Float + Into<f64>>(full: &[T], n: usize, tol: f64) {
    for k in 1..n / 2 {
        let (re_k, im_k) = (full[2 * k].into(), full[2 * k + 1].into());
        let (re_m, im_m) = (full[2 * (n - k)].into(), full[2 * (n - k) + 1].into());
        assert!((re_k - re_m).abs() <= tol, "bin {}: re {} vs {}", k, re_k, re_m);
        assert!((im_k + im_m).abs() <= tol, "bin {}: im {} vs {}", k, im_k, -im_m);
    }
}

fn roundtrip_max_error<B: RealTransform<f32>>(fft: &mut R2cFft<f32, B>, signal: &[f32]) -> f32 {
    let n = signal.len();
    let mut input = signal.to_vec();
    let mut spectrum = vec![0.0f32; 2 * n];
    fft.forward(&mut input, &mut spectrum).unwrap();
    let mut back = vec![0.0f32; n];
    fft.inverse(&mut spectrum, &mut back).unwrap();
    signal
        .iter()
        .zip(back.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f32::max)
}

#[test]
fn roundtrip_length_1024_fast() {
    let signal = random_signal(1024, 42);
    let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(1024).unwrap();
    let err = roundtrip_max_error(&mut fft, &signal);
    assert!(err < 1e-4, "max error {}", err);
}

#[test]
fn roundtrip_length_1024_reference() {
    let signal = random_signal(1024, 7);
    let mut fft: R2cFft<f32, NaiveDft<f32>> = R2cFft::reference(1024).unwrap();
    let err = roundtrip_max_error(&mut fft, &signal);
    assert!(err < 1e-4, "max error {}", err);
}

#[test]
fn roundtrip_with_signal_in_upper_half() {
    // half-length capture placed in the upper half, lower half zero
    const N: usize = 1024;
    let capture = random_signal(N / 2, 3);
    let mut signal = vec![0.0f32; N];
    signal[N / 2..].copy_from_slice(&capture);
    let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(N).unwrap();
    let err = roundtrip_max_error(&mut fft, &signal);
    assert!(err < 1e-4, "max error {}", err);
}

#[test]
fn forward_output_is_conjugate_symmetric() {
    for &n in &[4usize, 8, 64, 512] {
        let signal = random_signal(n, n as u64);
        let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(n).unwrap();
        let mut input = signal.clone();
        let mut spectrum = vec![0.0f32; 2 * n];
        fft.forward(&mut input, &mut spectrum).unwrap();
        // the mirror is copied, not recomputed, so symmetry is exact
        assert_conjugate_symmetric(&spectrum, n, 0.0);
        assert_eq!(spectrum[1], 0.0);
        assert_eq!(spectrum[n + 1], 0.0);
    }
}

#[test]
fn backends_agree_on_full_spectrum() {
    let n = 256;
    let signal: Vec<f64> = (0..n).map(|i| ((i as f64) * 0.11).sin() + 0.3).collect();
    let mut planner = RfftPlanner::<f64>::new();
    let mut fast: R2cFft<f64, RfftFast<f64>> = R2cFft::planned(&mut planner, n).unwrap();
    let mut slow: R2cFft<f64, NaiveDft<f64>> = R2cFft::reference(n).unwrap();
    let mut a_in = signal.clone();
    let mut b_in = signal.clone();
    let mut a = vec![0.0f64; 2 * n];
    let mut b = vec![0.0f64; 2 * n];
    fast.forward(&mut a_in, &mut a).unwrap();
    slow.forward(&mut b_in, &mut b).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < 1e-9, "{} vs {}", x, y);
    }
    assert_conjugate_symmetric(&b, n, 0.0);
}

proptest! {
    #[test]
    fn prop_roundtrip_any_power_of_two(log2 in 1u32..11, seed in any::<u64>()) {
        let n = 1usize << log2;
        let signal = random_signal(n, seed);
        let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(n).unwrap();
        let err = roundtrip_max_error(&mut fft, &signal);
        prop_assert!(err < 1e-4, "n = {}: max error {}", n, err);
    }

    #[test]
    fn prop_special_bins_are_real(log2 in 1u32..9, seed in any::<u64>()) {
        let n = 1usize << log2;
        let mut input = random_signal(n, seed);
        let mut spectrum = vec![f32::NAN; 2 * n];
        let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(n).unwrap();
        fft.forward(&mut input, &mut spectrum).unwrap();
        prop_assert_eq!(spectrum[1], 0.0);
        prop_assert_eq!(spectrum[n + 1], 0.0);
        prop_assert!(spectrum.iter().all(|v| v.is_finite()));
    }
}

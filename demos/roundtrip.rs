//! Forward and inverse full-spectrum transform of a half-length capture
//! placed in the upper half of the working buffer, with timings.
use std::time::Instant;

use r2cfft::{R2cFft, RfftFast};

const FFT_SIZE: usize = 1024;

fn main() {
    let mut fft: R2cFft<f32, RfftFast<f32>> = R2cFft::fast(FFT_SIZE).expect("power-of-two length");

    let mut rfft_in = [0.0f32; FFT_SIZE];
    let mut rfft_out = [0.0f32; 2 * FFT_SIZE];
    for i in 0..FFT_SIZE / 2 {
        let t = i as f32 / FFT_SIZE as f32;
        rfft_in[i + FFT_SIZE / 2] = (2.0 * std::f32::consts::PI * 50.0 * t).sin() * 0.8
            + (2.0 * std::f32::consts::PI * 120.0 * t).cos() * 0.2;
    }
    let original = rfft_in;

    let start = Instant::now();
    fft.forward(&mut rfft_in, &mut rfft_out).unwrap();
    let forward = start.elapsed();
    fft.inverse(&mut rfft_out, &mut rfft_in).unwrap();
    let inverse = start.elapsed() - forward;

    let max_err = original
        .iter()
        .zip(rfft_in.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    println!("==Length {}==", FFT_SIZE);
    println!("RFFT:  {:?}", forward);
    println!("iRFFT: {:?}", inverse);
    println!("max round-trip error: {:e}", max_err);
}

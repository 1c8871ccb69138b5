//! Prints the packed spectrum a backend produces next to the repacked full
//! spectrum for a short signal.
use r2cfft::num::bins;
use r2cfft::{r2cfft, Direction, NaiveDft, RealTransform};

fn main() {
    const N: usize = 8;
    let signal = [1.0f32, 2.0, 0.0, -1.0, 0.5, 0.0, 0.0, 3.0];

    let mut dft = NaiveDft::<f32>::with_len(N).unwrap();
    let mut input = signal;
    let mut packed = [0.0f32; N];
    dft.execute(&mut input, &mut packed, Direction::Forward);
    println!("packed ({} scalars): {:?}", N, packed);

    let mut input = signal;
    let mut full = [0.0f32; 2 * N];
    r2cfft(&mut dft, &mut input, &mut full, N, Direction::Forward);
    for (k, bin) in bins(&full).enumerate() {
        println!("bin {:>2}: {:>8.4} {:+8.4}i", k, bin.re, bin.im);
    }
}

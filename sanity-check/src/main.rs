use clap::Parser;
use sanity_check::{run, Backend, Signal};
use std::error::Error;

/// Time a forward and inverse full-spectrum transform and check it against rustfft.
#[derive(Parser)]
struct Args {
    /// Transform length (power of two)
    #[arg(long, default_value_t = 1024)]
    len: usize,

    /// Signal placed in the upper half of the buffer
    #[arg(long, value_enum, default_value_t = Signal::Sine)]
    signal: Signal,

    /// Transform backend
    #[arg(long, value_enum, default_value_t = Backend::Fast)]
    backend: Backend,

    /// Seed for the noise signal
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum round-trip error before exiting with failure
    #[arg(long, default_value_t = 1e-4)]
    tolerance: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let report = run(args.len, args.backend, args.signal, args.seed)?;

    println!("==Length {}==", report.len);
    println!("RFFT:  {:?}", report.forward);
    println!("iRFFT: {:?}", report.inverse);
    println!("round-trip error: {:e}", report.roundtrip_error);
    println!("symmetry error:   {:e}", report.symmetry_error);
    println!("rustfft error:    {:e}", report.reference_error);

    if report.roundtrip_error > args.tolerance {
        return Err(format!(
            "round-trip error {:e} exceeds tolerance {:e}",
            report.roundtrip_error, args.tolerance
        )
        .into());
    }
    Ok(())
}

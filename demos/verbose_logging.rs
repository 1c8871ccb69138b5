//! Demonstrates enabling verbose logging for r2cfft.
use r2cfft::{try_r2cfft, Direction, RfftPlanner};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut planner = RfftPlanner::<f32>::new();
    let mut rfft = planner.plan(16).unwrap();
    let _again = planner.plan(16).unwrap();

    let mut input = [1.0f32; 16];
    let mut short = [0.0f32; 8];
    // rejected: the full spectrum needs 32 scalars
    let _ = try_r2cfft(&mut rfft, &mut input, &mut short, 16, Direction::Forward);
}

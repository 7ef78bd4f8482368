// Countdown service
// Breakdown calculation, per-tick state tracking and the tick loop

mod calculator;
mod service;
pub mod ticker;

pub use calculator::compute_breakdown;
pub use service::{CountdownService, CountdownTick};

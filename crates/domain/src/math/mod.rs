pub mod rounding;

pub use rounding::{round_dp, round2};

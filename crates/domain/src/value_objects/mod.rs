pub mod percentage;
pub mod risk_curve;
pub mod simulation_result;

pub use percentage::Percentage;
pub use risk_curve::RiskCurve;
pub use simulation_result::SimulationResult;

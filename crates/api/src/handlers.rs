//! Request handlers.
//!
//! Simulation work is CPU bound, so it runs on the blocking pool once the
//! request has been validated and checked against the draw budget.

use crate::error::ApiError;
use crate::models::{RiskCurveRequest, SimulationRequest};
use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use ffsim_domain::{RiskCurve, SimulationResult};
use ffsim_simulation::random::rng_from_seed;
use tracing::info;

/// Liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Runs one batch simulation.
pub async fn run_simulation(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResult>, ApiError> {
    let Json(request) = payload?;
    let params = request.to_parameters();
    params.validate()?;
    state.check_draw_budget(params.total_draws())?;

    let seed = state.seed_for(request.seed);
    let runner = state.runner();

    let result = tokio::task::spawn_blocking(move || {
        let mut rng = rng_from_seed(seed);
        runner.run_simulation(&params, &mut rng)
    })
    .await??;

    info!(
        simulations = result.num_paths(),
        average = result.average,
        sharpe = result.sharpe,
        "Simulation completed"
    );

    Ok(Json(result))
}

/// Runs the risk sweep.
pub async fn run_risk_curve(
    State(state): State<AppState>,
    payload: Result<Json<RiskCurveRequest>, JsonRejection>,
) -> Result<Json<RiskCurve>, ApiError> {
    let Json(request) = payload?;
    let params = request.to_parameters();
    params.validate()?;
    state.check_draw_budget(params.total_draws())?;

    let seed = state.seed_for(request.seed);
    let runner = state.runner();

    let curve = tokio::task::spawn_blocking(move || {
        let mut rng = rng_from_seed(seed);
        runner.run_risk_curve(&params, &mut rng)
    })
    .await??;

    info!(
        levels = curve.len(),
        best = ?curve.best(),
        "Risk sweep completed"
    );

    Ok(Json(curve))
}

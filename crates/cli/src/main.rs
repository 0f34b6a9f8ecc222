//! Command Line Interface for the fixed-fractional Monte Carlo simulator.
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ffsim_api::{ApiServer, ServerConfig};
use ffsim_domain::{
    Percentage, RiskCurve, RiskSweepParameters, SimulationParameters, SimulationResult,
};
use ffsim_simulation::monte_carlo::{ExecutionMode, MonteCarloRunner};
use ffsim_simulation::random::rng_from_seed;
use prettytable::{Table, row};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ffsim")]
#[command(about = "Monte Carlo simulator for fixed-fractional position sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one batch of equity paths
    Simulate {
        #[command(flatten)]
        model: ModelArgs,

        /// Risk per trade in whole percent
        #[arg(short, long, default_value_t = 1.0)]
        risk: f64,

        /// Days used to annualize the mean return
        #[arg(long, default_value_t = 252)]
        trading_days: u32,

        /// Print the raw JSON result instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Sweep risk per trade from 1% to 20%
    RiskCurve {
        #[command(flatten)]
        model: ModelArgs,

        /// Print the raw JSON curve instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON API
    Serve {
        /// Host to bind (overrides FFSIM_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides FFSIM_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Maximum random draws per request (overrides FFSIM_MAX_DRAWS)
        #[arg(long)]
        max_draws: Option<u64>,

        /// Seed applied to requests without one (overrides FFSIM_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Evaluate paths in parallel (overrides FFSIM_PARALLEL)
        #[arg(long)]
        parallel: bool,
    },
}

/// Inputs shared by both simulation modes.
#[derive(Args, Debug, Clone)]
struct ModelArgs {
    /// Starting portfolio value
    #[arg(long, default_value_t = 10_000.0)]
    initial_portfolio: f64,

    /// Reward multiplier on a winning trade
    #[arg(long, default_value_t = 2.0)]
    risk_reward_ratio: f64,

    /// Trades per simulated path
    #[arg(short, long, default_value_t = 1)]
    trades_per_day: u32,

    /// Number of simulated paths
    #[arg(short = 'n', long, default_value_t = 1_000)]
    num_simulations: u32,

    /// Win probability in whole percent
    #[arg(short, long, default_value_t = 50.0)]
    win_probability: f64,

    /// Annual risk-free rate as a plain fraction (0.04 = 4%)
    #[arg(long, default_value_t = 0.0)]
    risk_free_rate: f64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate paths in parallel
    #[arg(long)]
    parallel: bool,
}

impl ModelArgs {
    fn runner(&self) -> MonteCarloRunner {
        if self.parallel {
            MonteCarloRunner::new(ExecutionMode::Parallel)
        } else {
            MonteCarloRunner::new(ExecutionMode::Sequential)
        }
    }

    fn simulation_parameters(&self, risk: f64, trading_days: u32) -> SimulationParameters {
        SimulationParameters::new(self.initial_portfolio)
            .with_risk(Percentage::from_whole(risk))
            .with_risk_reward_ratio(self.risk_reward_ratio)
            .with_trades_per_day(self.trades_per_day)
            .with_trading_days(trading_days)
            .with_num_simulations(self.num_simulations)
            .with_win_probability(Percentage::from_whole(self.win_probability).fraction())
            .with_risk_free_rate(self.risk_free_rate)
    }

    fn sweep_parameters(&self) -> RiskSweepParameters {
        RiskSweepParameters::from(self.simulation_parameters(0.0, 0))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            model,
            risk,
            trading_days,
            json,
        } => {
            let params = model.simulation_parameters(risk, trading_days);
            params.validate()?;

            info!(draws = params.total_draws(), "Starting simulation");
            let mut rng = rng_from_seed(model.seed);
            let result = model.runner().run_simulation(&params, &mut rng)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_simulation(&params, &result);
            }
        }
        Commands::RiskCurve { model, json } => {
            let params = model.sweep_parameters();
            params.validate()?;

            info!(draws = params.total_draws(), "Starting risk sweep");
            let mut rng = rng_from_seed(model.seed);
            let curve = model.runner().run_risk_curve(&params, &mut rng)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&curve)?);
            } else {
                print_risk_curve(&curve);
            }
        }
        Commands::Serve {
            host,
            port,
            max_draws,
            seed,
            parallel,
        } => {
            let mut config = ServerConfig::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(max_draws) = max_draws {
                config.max_draws = max_draws;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.parallel |= parallel;

            ApiServer::new(config).run().await?;
        }
    }

    Ok(())
}

fn print_simulation(params: &SimulationParameters, result: &SimulationResult) {
    println!("\n📊 Simulation Results");
    println!("════════════════════════════════════");
    println!("Paths:           {}", result.num_paths());
    println!("Trades per path: {}", params.trades_per_day);
    println!(
        "Risk per trade:  {:.2}%",
        Percentage(params.risk_fraction).to_whole()
    );

    let mut table = Table::new();
    table.add_row(row!["Metric", "Value"]);
    table.add_row(row!["Average return", format!("{:.2}%", result.average)]);
    table.add_row(row!["Best", format!("{:.2}%", result.best)]);
    table.add_row(row!["Worst", format!("{:.2}%", result.worst)]);
    table.add_row(row!["Std dev", format!("{:.2}", result.std_dev)]);
    table.add_row(row!["Sharpe", format!("{:.2}", result.sharpe)]);
    table.add_row(row![
        format!("Annual ({} days)", params.trading_days),
        format!("{:.2}%", result.annual_return)
    ]);
    table.printstd();
}

fn print_risk_curve(curve: &RiskCurve) {
    println!("\n📈 Risk Curve");
    println!("════════════════════════════════════");

    let mut table = Table::new();
    table.add_row(row!["Risk %", "Sharpe"]);
    for (risk, sharpe) in curve.points() {
        table.add_row(row![risk, format!("{:.2}", sharpe)]);
    }
    table.printstd();

    if let Some((risk, sharpe)) = curve.best() {
        println!("Best risk level: {}% (ratio {:.2})", risk, sharpe);
    }
}

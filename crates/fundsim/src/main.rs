use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use fundsim::{
    AnalysisConfig, ReportHeader, default_data_dir, init_logging, render_json, render_text,
    render_trajectory,
};
use fundsim_core::compare_funds;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
#[command(name = "fundsim")]
#[command(about = "Monte Carlo comparison of funds with different return volatility")]
struct Args {
    /// Analysis config (default: ~/.fundsim/analysis.yaml, else built-in funds)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of trials per fund (overrides the config)
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// Base seed for reproducible runs (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Also print one illustrative trajectory per fund
    #[arg(long)]
    trajectory: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_deref())?;

    let mut config = AnalysisConfig::resolve(args.config.as_deref(), &default_data_dir())?;
    if let Some(trials) = args.trials {
        config.num_trials = trials;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let funds = config.fund_parameters()?;
    let trial_config = config.trial_config();

    tracing::info!(
        funds = funds.len(),
        num_trials = trial_config.num_trials,
        years = config.years,
        "Starting fund comparison"
    );

    let comparison = compare_funds(&funds, &trial_config, &config.thresholds)
        .wrap_err("fund simulation failed")?;

    let header = ReportHeader {
        num_trials: config.num_trials,
        years: config.years,
        annual_contribution: config.annual_contribution,
        seed: config.seed,
    };

    if args.json {
        println!("{}", render_json(&header, &comparison)?);
    } else {
        print!("{}", render_text(&header, &comparison));
    }

    if args.trajectory {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        for fund in &funds {
            let trajectory = fund
                .simulate(&mut rng)
                .wrap_err_with(|| format!("failed to simulate {}", fund.label()))?;
            println!();
            print!("{}", render_trajectory(&fund.label(), &trajectory));
        }
    }

    tracing::info!("Fund comparison finished");
    Ok(())
}

//! bsfd CLI - finite difference pricing of vanilla options
//!
//! # Commands
//!
//! - `bsfd-cli price --spot 50 --maturity 1 --strike 50 --rate 0.1 --vol 0.25`
//!   prices a European call on a 100 × 40 implicit grid
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=bsfd_methods=debug`).

use anyhow::{Context, Result};
use bsfd_instruments::{ExerciseType, OptionType, PlainVanillaPayoff, VanillaOption};
use bsfd_methods::SchemeKind;
use bsfd_pricingengines::{AnalyticEuropeanEngine, FdBlackScholesVanillaEngine, STABILITY_NORM};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

/// Finite difference Black-Scholes pricer
#[derive(Parser)]
#[command(name = "bsfd-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a vanilla option on a finite difference grid
    Price(PriceArgs),
}

#[derive(Debug, clap::Args)]
struct PriceArgs {
    /// Spot price of the underlying
    #[arg(long)]
    spot: f64,

    /// Time to maturity in years
    #[arg(long)]
    maturity: f64,

    /// Strike price
    #[arg(long)]
    strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dividend: f64,

    /// Volatility
    #[arg(long)]
    vol: f64,

    /// Number of time steps N
    #[arg(long, default_value_t = 100)]
    time_steps: usize,

    /// Number of space steps M
    #[arg(long, default_value_t = 40)]
    space_steps: usize,

    /// Price a put instead of a call
    #[arg(long)]
    put: bool,

    /// Allow early exercise
    #[arg(long)]
    american: bool,

    /// Time-stepping scheme (explicit, implicit)
    #[arg(long, default_value_t = SchemeKind::Implicit)]
    scheme: SchemeKind,

    /// Solver settings file (TOML)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Also print the closed-form European price
    #[arg(long)]
    compare: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Price(args) => run_price(&args),
    }
}

fn run_price(args: &PriceArgs) -> Result<()> {
    let settings = config::load(args.settings.as_deref())?;
    info!(?settings, scheme = %args.scheme, "pricing");

    let option = VanillaOption::new(
        PlainVanillaPayoff::new(OptionType::from_is_call(!args.put), args.strike),
        ExerciseType::from_is_american(args.american),
        args.maturity,
    );
    let engine = FdBlackScholesVanillaEngine::new(
        args.spot,
        args.rate,
        args.dividend,
        args.vol,
        args.time_steps,
        args.space_steps,
    )
    .with_scheme(args.scheme)
    .with_settings(settings);

    let results = option
        .price(&engine)
        .with_context(|| format!("{} pricing of {} failed", args.scheme, option.payoff()))?;
    let norm = results.result(STABILITY_NORM).unwrap_or(f64::NAN);

    println!("fair value      {:.6}", results.npv);
    println!("stability norm  {:.6}", norm);

    if args.compare {
        let european = VanillaOption::european(option.option_type(), args.strike, args.maturity);
        let analytic = european
            .price(&AnalyticEuropeanEngine::new(args.spot, args.rate, args.dividend, args.vol))
            .context("closed-form pricing failed")?;
        println!("analytic (BSM)  {:.6}", analytic.npv);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_full_price_command() {
        let cli = Cli::try_parse_from([
            "bsfd-cli",
            "price",
            "--spot",
            "50",
            "--maturity",
            "1",
            "--strike",
            "50",
            "--rate",
            "-0.01",
            "--vol",
            "0.25",
            "--put",
            "--american",
            "--scheme",
            "explicit",
        ])
        .unwrap();
        let Commands::Price(args) = cli.command;
        assert_eq!(args.scheme, SchemeKind::Explicit);
        assert_eq!(args.rate, -0.01);
        assert!(args.put && args.american);
        assert_eq!((args.time_steps, args.space_steps), (100, 40));
        assert!(run_price(&args).is_ok());
    }

    #[test]
    fn rejects_unknown_scheme() {
        let parsed = Cli::try_parse_from([
            "bsfd-cli", "price", "--spot", "50", "--maturity", "1", "--strike", "50", "--vol",
            "0.25", "--scheme", "crank-nicolson",
        ]);
        assert!(parsed.is_err());
    }
}

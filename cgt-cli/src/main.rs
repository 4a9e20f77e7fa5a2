use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cgt_cli::format::parse_amount;
use cgt_cli::policy_file::{load_policy, policy_to_toml};
use cgt_cli::report;
use cgt_core::{AdditionalDeductionInput, Comparison, CurrentTaxInput, PolicyParams, ReturnQuarter};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Capital-gains tax on foreign stock, under the current rules and the 2026
/// amendment (RIA relief and FX-hedge deduction).
///
/// Amounts are whole won and may be written as `1,000,000원`.
#[derive(Debug, Parser)]
#[command(name = "kr-cgt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Purchase price of the shares sold.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    acquisition_cost: Decimal,

    /// Sale price of the shares.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    sale_cost: Decimal,

    /// Brokerage fees and other costs of the sale.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    expenses: Decimal,

    /// Other foreign-stock gains realised in the same year.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    other_gains: Decimal,

    /// Apply the Reshoring Investment Account exemption.
    #[arg(long, default_value_t = false)]
    ria: bool,

    /// Quarter the proceeds are brought home in (1Q, 2Q or H2).
    #[arg(long, default_value = "1Q")]
    quarter: ReturnQuarter,

    /// Apply the FX-hedge deduction.
    #[arg(long, default_value_t = false)]
    hedge: bool,

    /// Notional of the qualifying FX hedge.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    hedge_amount: Decimal,

    /// Use the largest hedge notional that still earns a deduction.
    #[arg(long, default_value_t = false, conflicts_with = "hedge_amount")]
    hedge_max: bool,

    /// TOML file overriding the 2026-amendment policy parameters.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Print the comparison as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the effective policy as TOML and exit.
    #[arg(long, default_value_t = false)]
    print_policy: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so only input warnings reach the terminal.
/// * Writes to stderr so `--json` output stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let policy = match &cli.policy {
        Some(path) => load_policy(path)
            .with_context(|| format!("Failed to load policy: {}", path.display()))?,
        None => PolicyParams::default(),
    };
    debug!(version = %policy.version, "using policy");

    if cli.print_policy {
        let text = policy_to_toml(&policy).context("Failed to render policy as TOML")?;
        print!("{text}");
        return Ok(());
    }

    let input = CurrentTaxInput {
        acquisition_cost: cli.acquisition_cost,
        sale_cost: cli.sale_cost,
        expenses: cli.expenses,
        other_gains: cli.other_gains,
    };

    let mut election = AdditionalDeductionInput {
        apply_ria: cli.ria,
        return_quarter: cli.quarter,
        apply_hedge: cli.hedge,
        hedge_amount: cli.hedge_amount,
    };
    if cli.hedge_max {
        election = election.with_max_hedge(&policy);
    }

    let comparison = Comparison::compute(&policy, &input, &election);

    if cli.json {
        let json = serde_json::to_string_pretty(&comparison)
            .context("Failed to serialise comparison")?;
        println!("{json}");
    } else {
        print!("{}", report::render(&comparison, &policy));
    }

    Ok(())
}

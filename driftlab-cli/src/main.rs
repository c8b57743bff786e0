//! DriftLab CLI — fetch price history and run Monte-Carlo outlooks.
//!
//! Commands:
//! - `outlook` — fetch history for a symbol, run the simulation, print a
//!   report (text or JSON)
//! - `fetch` — preview what a provider returns for a symbol
//!
//! Provider selection: Yahoo Finance by default, `--csv` for a local file,
//! `--synthetic` for a deterministic offline walk.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use driftlab_core::data::{
    CsvProvider, PriceProvider, SyntheticProvider, YahooProvider, DEFAULT_WINDOW_DAYS,
};
use driftlab_core::domain::{OutlookResult, PriceSeries};
use driftlab_core::engine::{compute_outlook, SimulationConfig};

#[derive(Parser)]
#[command(name = "driftlab", about = "DriftLab CLI — Monte-Carlo price outlook engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch history, simulate, and print an outlook report.
    Outlook {
        /// Instrument symbol (e.g., SPY).
        symbol: String,

        /// Horizon in trading days.
        #[arg(long)]
        days: Option<usize>,

        /// Number of simulated paths.
        #[arg(long)]
        sims: Option<usize>,

        /// Master RNG seed.
        #[arg(long)]
        seed: Option<u64>,

        /// TOML file with simulation parameters (flags override it).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read history from a local CSV file instead of the network.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Use deterministic synthetic data (no network).
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Start date (YYYY-MM-DD). Defaults to 3 years ago.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Print the result as JSON instead of the text report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Preview what a provider returns for a symbol.
    Fetch {
        /// Instrument symbol (e.g., SPY).
        symbol: String,

        /// Read history from a local CSV file instead of the network.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Use deterministic synthetic data (no network).
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Start date (YYYY-MM-DD). Defaults to 3 years ago.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,driftlab_core=info".to_string()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Outlook {
            symbol,
            days,
            sims,
            seed,
            config,
            csv,
            synthetic,
            start,
            end,
            json,
        } => run_outlook(
            &symbol, days, sims, seed, config, csv, synthetic, start, end, json,
        ),
        Commands::Fetch {
            symbol,
            csv,
            synthetic,
            start,
            end,
        } => run_fetch(&symbol, csv, synthetic, start, end),
    }
}

// ── Command implementations ──────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn run_outlook(
    symbol: &str,
    days: Option<usize>,
    sims: Option<usize>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    csv: Option<PathBuf>,
    synthetic: bool,
    start: Option<String>,
    end: Option<String>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(days) = days {
        config.days = days;
    }
    if let Some(sims) = sims {
        config.sims = sims;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }

    let series = fetch_series(symbol, csv, synthetic, start, end)?;
    let result = compute_outlook(&series, &config)
        .with_context(|| format!("outlook failed for {symbol}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_report(&result));
    }
    Ok(())
}

fn run_fetch(
    symbol: &str,
    csv: Option<PathBuf>,
    synthetic: bool,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let series = fetch_series(symbol, csv, synthetic, start, end)?;
    let cleaned = series.clean_closes();

    println!("Symbol:       {}", series.symbol);
    println!("Rows:         {}", series.len());
    println!("Usable:       {}", cleaned.len());
    if let Some((first, last)) = series.date_range() {
        println!("Date range:   {first} → {last}");
    }
    if let Some(last_close) = cleaned.last() {
        println!("Last close:   {last_close:.2}");
    }
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────────────

fn load_config(path: Option<&std::path::Path>) -> Result<SimulationConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn fetch_series(
    symbol: &str,
    csv: Option<PathBuf>,
    synthetic: bool,
    start: Option<String>,
    end: Option<String>,
) -> Result<PriceSeries> {
    if csv.is_some() && synthetic {
        bail!("--csv and --synthetic are mutually exclusive");
    }

    let end = match end {
        Some(s) => parse_date(&s)?,
        None => chrono::Local::now().date_naive(),
    };
    let start = match start {
        Some(s) => parse_date(&s)?,
        None => end - chrono::Duration::days(DEFAULT_WINDOW_DAYS),
    };
    if start >= end {
        bail!("start date {start} is not before end date {end}");
    }

    let provider: Box<dyn PriceProvider> = if let Some(path) = csv {
        Box::new(CsvProvider::new(path))
    } else if synthetic {
        Box::new(SyntheticProvider::new())
    } else {
        Box::new(YahooProvider::new())
    };

    let series = provider
        .fetch(symbol, start, end)
        .with_context(|| format!("fetching {symbol} via {}", provider.name()))?;
    Ok(series)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {s}"))
}

/// Render the human-readable report. This is the only place the structured
/// result is flattened to text; machine consumers should use `--json`.
fn render_report(result: &OutlookResult) -> String {
    format!(
        "Monte-Carlo Outlook for {} ({}-day horizon):\n\
         - Outlook: {}\n\
         - Probability stock ends higher: {:.2}%\n\
         - Expected return: {:.2}%\n\
         - Expected volatility: {:.2}%\n\
         - Sharpe ratio (est.): {:.2}\n\
         *This forecast is experimental and based on Monte-Carlo simulation.*",
        result.symbol,
        result.days,
        result.label,
        result.prob_up * 100.0,
        result.expected_return * 100.0,
        result.volatility * 100.0,
        result.sharpe,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftlab_core::domain::OutlookLabel;

    #[test]
    fn report_includes_label_and_horizon() {
        let result = OutlookResult {
            symbol: "SPY".into(),
            label: OutlookLabel::ModeratelyBullish,
            prob_up: 0.6123,
            expected_return: 0.0123,
            volatility: 0.0567,
            sharpe: 0.79,
            mu_daily: 0.001,
            sigma_daily: 0.02,
            last_price: 470.0,
            days: 30,
            sims: 5000,
            seed: 42,
        };
        let report = render_report(&result);
        assert!(report.contains("Monte-Carlo Outlook for SPY (30-day horizon):"));
        assert!(report.contains("- Outlook: Moderately Bullish"));
        assert!(report.contains("Probability stock ends higher: 61.23%"));
        assert!(report.contains("Sharpe ratio (est.): 0.79"));
    }

    #[test]
    fn date_parsing_round_trips() {
        assert_eq!(
            parse_date("2024-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(parse_date("01/02/2024").is_err());
    }
}

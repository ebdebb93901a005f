use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tip_cli::app;
use tip_core::{CurrencyFormat, TipCalculator};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Gratuity calculator.
///
/// Computes a tip from a bill amount and a tip percentage, optionally
/// rounding the tip up to the next whole currency unit, and prints it
/// formatted for the active locale.
#[derive(Debug, Parser)]
#[command(name = "tip")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Bill amount as entered (free text; unparsable input counts as 0).
    #[arg(default_value = "")]
    amount: String,

    /// Tip percentage as entered (absent or unparsable input counts as 15).
    #[arg(short = 'p', long)]
    tip_percent: Option<String>,

    /// Raise the tip to the next whole currency unit.
    #[arg(short, long, default_value_t = false)]
    round_up: bool,

    /// Locale tag for currency formatting (e.g. en-US, de-DE).
    /// Defaults to the environment locale (LC_ALL, LC_MONETARY, LANG).
    #[arg(long)]
    locale: Option<String>,

    /// Prompt for inputs repeatedly, recomputing after every entry.
    #[arg(short, long, default_value_t = false)]
    interactive: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let format = match cli.locale.as_deref() {
        Some(tag) => CurrencyFormat::for_locale(tag),
        None => CurrencyFormat::active(),
    };
    debug!(?format, "resolved currency format");
    let calculator = TipCalculator::new(format);

    if cli.interactive {
        let stdin = std::io::stdin();
        app::run_interactive(&calculator, stdin.lock(), std::io::stdout())?;
    } else {
        let tip = app::compute_once(
            &calculator,
            &cli.amount,
            cli.tip_percent.as_deref(),
            cli.round_up,
        );
        println!("{tip}");
    }

    Ok(())
}

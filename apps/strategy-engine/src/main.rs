//! Strategy Engine Binary
//!
//! Analyzes a 1-2 leg options strategy from a JSON file.
//!
//! # Usage
//!
//! ```bash
//! strategy-engine <strategy.json> <reference-price> [--curve] [--close <price>]
//! ```
//!
//! - `strategy.json`: serialized `Strategy` (legs, underlying, created_at)
//! - `reference-price`: underlying price the payoff curve is centered on
//! - `--curve`: print the sampled payoff curve
//! - `--close <price>`: journal the trade and settle it at the given price
//! - `--config <path>`: explicit config file (default: `config.yaml`)
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH`: journal database path override
//! - `RUST_LOG`: log level (default: info)

use anyhow::{Context, bail};
use rust_decimal::Decimal;

use strategy_engine::config::{Config, load_config};
use strategy_engine::journal::{InMemoryTradeJournal, TradeRepository};
use strategy_engine::{PayoffEvaluator, Strategy, StrategyCalculator, StrategyMetrics};

/// Parsed command-line arguments.
struct CliArgs {
    strategy_path: String,
    reference_price: Decimal,
    show_curve: bool,
    close_price: Option<Decimal>,
    config_path: Option<String>,
}

/// Presentation-layer session state.
///
/// Holds the currently analyzed strategy and its metrics. State lives here,
/// owned by the binary, never inside the core.
struct AnalyzerSession {
    strategy: Strategy,
    metrics: StrategyMetrics,
}

impl AnalyzerSession {
    fn analyze(strategy: Strategy) -> anyhow::Result<Self> {
        let metrics = StrategyCalculator::new()
            .calculate(&strategy)
            .context("metric calculation failed")?;
        Ok(Self { strategy, metrics })
    }

    fn print_report(&self) {
        let m = &self.metrics;
        println!("Strategy: {}", self.strategy.underlying_symbol());
        for leg in self.strategy.legs() {
            let c = leg.contract();
            println!(
                "  {} {}x {} {} @ {} (bid {} / ask {})",
                leg.action(),
                leg.quantity(),
                c.strike(),
                c.option_type(),
                c.expiration(),
                c.bid(),
                c.ask(),
            );
        }
        println!("Net premium:      ${:.2}", m.net_premium);
        println!("Max profit:       {}", m.max_profit);
        println!("Max loss:         {}", m.max_loss);
        for breakeven in &m.breakeven_points {
            println!("Breakeven:        ${breakeven:.2}");
        }
        println!("Margin required:  {}", m.margin_requirement);
        println!("Return on margin: {:.2}%", m.return_on_margin);
    }

    fn print_curve(&self, reference_price: Decimal, config: &Config) -> anyhow::Result<()> {
        let curve = PayoffEvaluator::new()
            .sample_curve_with(&self.strategy, reference_price, config.curve.points)
            .context("curve sampling failed")?;
        println!("Payoff at expiration ({} points):", curve.len());
        for point in curve {
            println!("  {:>10.2}  {:>12.2}", point.price, point.payoff);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = parse_args(std::env::args().skip(1).collect())?;
    let config = load_config(args.config_path.as_deref())?;

    let strategy = load_strategy(&args.strategy_path)?;
    tracing::info!(
        underlying = strategy.underlying_symbol(),
        legs = strategy.leg_count(),
        "Strategy loaded"
    );

    let session = AnalyzerSession::analyze(strategy)?;
    session.print_report();

    if args.show_curve {
        session.print_curve(args.reference_price, &config)?;
    }

    if let Some(close_price) = args.close_price {
        settle(&session, close_price).await?;
    }

    Ok(())
}

/// Journal the analyzed strategy and settle it at the given closing price.
async fn settle(session: &AnalyzerSession, close_price: Decimal) -> anyhow::Result<()> {
    let journal = InMemoryTradeJournal::new();
    let trade = journal
        .save(session.strategy.clone(), session.metrics.clone())
        .await?;
    let closed = journal.close(trade.id, close_price).await?;
    tracing::info!(trade_id = closed.id, "Trade settled");
    println!(
        "Settled at ${close_price:.2}: final P&L ${:.2}",
        closed.final_pnl.unwrap_or_default()
    );
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant guaranteed
/// to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "strategy_engine=info"
                    .parse()
                    .expect("static directive 'strategy_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse command-line arguments.
fn parse_args(args: Vec<String>) -> anyhow::Result<CliArgs> {
    let mut positional = Vec::new();
    let mut show_curve = false;
    let mut close_price = None;
    let mut config_path = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--curve" => show_curve = true,
            "--close" => {
                let value = iter.next().context("--close requires a price")?;
                close_price = Some(value.parse().context("--close price must be a decimal")?);
            }
            "--config" => {
                config_path = Some(iter.next().context("--config requires a path")?);
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        bail!("usage: strategy-engine <strategy.json> <reference-price> [--curve] [--close <price>] [--config <path>]");
    }
    let reference_price: Decimal = positional[1]
        .parse()
        .context("reference price must be a decimal")?;
    if reference_price <= Decimal::ZERO {
        bail!("reference price must be positive");
    }

    Ok(CliArgs {
        strategy_path: positional[0].clone(),
        reference_price,
        show_curve,
        close_price,
        config_path,
    })
}

/// Load a serialized strategy from a JSON file.
fn load_strategy(path: &str) -> anyhow::Result<Strategy> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read strategy file '{path}'"))?;
    let strategy: Strategy =
        serde_json::from_str(&raw).with_context(|| format!("invalid strategy JSON in '{path}'"))?;
    Ok(strategy)
}

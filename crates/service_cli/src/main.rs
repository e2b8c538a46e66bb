//! fxdesk - Terminal Front End for FxDesk
//!
//! Drives the simulated live-rate feed and the FX analytics from a terminal.
//!
//! # Commands
//!
//! - `fxdesk pairs` - List the pair catalog, optionally filtered
//! - `fxdesk stream --pairs <ids>` - Stream live ticks for a while
//! - `fxdesk order move <source> <target>` - Reorder the rate table
//! - `fxdesk forward --pair <id> --date <date>` - Quote a forward and its hedging cost
//! - `fxdesk convert --pair <id> --amount <n>` - Convert between base and quote at spot
//! - `fxdesk technicals --pair <id>` - Moving averages, oscillators and pivots
//! - `fxdesk curves --pair <id>` - Money-market curves and their differential
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires `fx_feed` (simulation
//! and subscription) to `fx_core` (catalog and analytics).

use clap::{Parser, Subcommand, ValueEnum};
use fx_core::types::{Market, PairGroup};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// FxDesk live-rate simulator CLI
#[derive(Parser)]
#[command(name = "fxdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = fx_feed::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Market filter accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
enum MarketArg {
    Offshore,
    Onshore,
}

impl From<MarketArg> for Market {
    fn from(arg: MarketArg) -> Self {
        match arg {
            MarketArg::Offshore => Market::Offshore,
            MarketArg::Onshore => Market::Onshore,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List currency pairs
    Pairs {
        /// Restrict to one market
        #[arg(short, long, value_enum)]
        market: Option<MarketArg>,

        /// Restrict to a group (inr, g10, em)
        #[arg(short, long)]
        group: Option<PairGroup>,

        /// Case-insensitive search over name, legs and market
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Stream simulated live rates
    Stream {
        /// Comma-separated pair ids (default: the whole catalog)
        #[arg(short, long, value_delimiter = ',')]
        pairs: Vec<String>,

        /// How long to stream, in seconds
        #[arg(short, long, default_value = "5")]
        seconds: u64,

        /// Saved row order to apply
        #[arg(short, long, default_value = commands::order::DEFAULT_ORDER_FILE)]
        order_file: PathBuf,

        /// Print one JSON snapshot per update instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show or change the saved rate table order
    Order {
        /// Row order file
        #[arg(short, long, default_value = commands::order::DEFAULT_ORDER_FILE)]
        file: PathBuf,

        #[command(subcommand)]
        action: commands::order::OrderAction,
    },

    /// Quote a forward for a settlement date
    Forward {
        /// Pair id
        #[arg(short, long, default_value = "USDINR-OFF")]
        pair: String,

        /// Settlement date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Notional amount
        #[arg(short, long, default_value = "1000000")]
        amount: f64,

        /// Annual interest differential in percent
        #[arg(long, default_value_t = fx_feed::mock::DEFAULT_DIFFERENTIAL_PCT, allow_hyphen_values = true)]
        differential: f64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Convert an amount between the legs of a pair at spot
    Convert {
        /// Pair id
        #[arg(short, long, default_value = "USDINR-OFF")]
        pair: String,

        /// Amount to convert
        #[arg(short, long, default_value = "1")]
        amount: f64,

        /// Convert from the quote currency into the base
        #[arg(short, long)]
        reverse: bool,

        /// Print JSON instead of a line
        #[arg(long)]
        json: bool,
    },

    /// Technical indicators from daily history
    Technicals {
        /// Pair id
        #[arg(short, long, default_value = "USDINR-OFF")]
        pair: String,

        /// Calendar days of history
        #[arg(short, long, default_value = "365")]
        days: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Money-market curves of both legs and their differential
    Curves {
        /// Pair id
        #[arg(short, long, default_value = "USDINR-OFF")]
        pair: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::resolve(&cli.config)?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Pairs {
            market,
            group,
            search,
            json,
        } => commands::pairs::run(market.map(Market::from), group, &search, json)?,
        Commands::Stream {
            pairs,
            seconds,
            order_file,
            json,
        } => commands::stream::run(&config, &pairs, seconds, &order_file, json)?,
        Commands::Order { file, action } => commands::order::run(&file, action)?,
        Commands::Forward {
            pair,
            date,
            amount,
            differential,
            json,
        } => commands::forward::run(&config, &pair, &date, amount, differential, json)?,
        Commands::Convert {
            pair,
            amount,
            reverse,
            json,
        } => commands::convert::run(&config, &pair, amount, reverse, json)?,
        Commands::Technicals { pair, days, json } => {
            commands::technicals::run(&config, &pair, days, json)?
        }
        Commands::Curves { pair, json } => commands::curves::run(&config, &pair, json)?,
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use dcasim::commands::{self, OutputOptions, PriceSource};
use dcasim::data::DataDirectory;
use dcasim::{LogTarget, init_logging};
use dcasim_core::assets::{DEFAULT_ASSET, DEFAULT_MONTHLY_CONTRIBUTION, DEFAULT_START_MONTH};
use dcasim_core::chart::DEFAULT_MAX_CHART_POINTS;
use dcasim_core::model::{DcaRequest, YearMonth};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dcasim")]
#[command(about = "Replay a monthly investment plan against historical prices")]
struct Args {
    /// Path to the data directory (default: ~/.dcasim/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Log to stderr instead of the data directory
    #[arg(long, global = true)]
    log_stderr: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one plan
    Simulate {
        #[arg(long, default_value = DEFAULT_ASSET)]
        asset: String,

        /// Lump sum invested at the first available price
        #[arg(long, default_value_t = 0.0)]
        initial: f64,

        #[arg(long, default_value_t = DEFAULT_MONTHLY_CONTRIBUTION)]
        monthly: f64,

        /// First month, YYYY-MM
        #[arg(long, default_value = DEFAULT_START_MONTH)]
        start: String,

        /// Last month, YYYY-MM (default: last month)
        #[arg(long)]
        end: Option<String>,

        /// Read prices from this JSON/YAML file instead of the data directory
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Maximum trajectory rows in the text report
        #[arg(long, default_value_t = DEFAULT_MAX_CHART_POINTS)]
        max_points: usize,

        #[arg(long)]
        json: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run a batch of named scenarios (the built-in insights by default)
    Scenarios {
        /// YAML scenario list
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        json: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported assets and the data available for each
    Assets {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let store = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    let target = if args.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File(store.root())
    };
    init_logging(target, &args.log_level)?;

    let current = YearMonth::current();

    match args.command {
        Command::Simulate {
            asset,
            initial,
            monthly,
            start,
            end,
            prices,
            max_points,
            json,
            output,
        } => {
            let end = end.unwrap_or_else(|| current.pred().unwrap_or(current).to_string());
            let input = DcaRequest {
                asset: Some(asset),
                initial_investment: Some(initial),
                monthly_contribution: Some(monthly),
                start_date: Some(start),
                end_date: Some(end),
            }
            .parse()
            .wrap_err("invalid simulation request")?;

            let source = match &prices {
                Some(path) => PriceSource::File(path),
                None => PriceSource::Store(&store),
            };
            let out = OutputOptions { json, output };
            commands::simulate(&input, source, current, max_points, &out)?;
        }
        Command::Scenarios { file, json, output } => {
            let out = OutputOptions { json, output };
            commands::scenarios(file.as_deref(), &store, current, &out)?;
        }
        Command::Assets { json } => {
            commands::assets(&store, &OutputOptions { json, output: None })?;
        }
    }

    tracing::info!("dcasim finished");

    Ok(())
}

use clap::{Parser, Subcommand};
use url::Url;

use lectio::AppError;
use lectio::adapters::UsccbHttpProvider;
use lectio::ports::ReadingsProvider;

#[derive(Parser)]
#[command(name = "lectio")]
#[command(version)]
#[command(about = "Daily Catholic Mass readings as structured JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the readings for a date
    #[clap(visible_alias = "m")]
    Mass {
        /// Date in YYYY-MM-DD form
        date: String,
        /// Mass type: default, day, dawn, vigil, or night
        #[arg(short, long)]
        mass_type: Option<String>,
        /// Override the provider base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print liturgical season information for a date
    #[clap(visible_alias = "s")]
    Season {
        /// Date in YYYY-MM-DD form
        date: String,
    },
    /// List mass types the provider publishes for a date
    #[clap(visible_alias = "t")]
    Types {
        /// Date in YYYY-MM-DD form
        date: String,
        /// Override the provider base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() {
    // Logging is best-effort; a malformed RUST_LOG must not kill the CLI.
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .ok()
        .and_then(|logger| logger.log_to_stderr().start().ok());

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mass { date, mass_type, base_url, compact } => {
            run_mass(&date, mass_type.as_deref(), base_url.as_deref(), compact)
        }
        Commands::Season { date } => run_season(&date),
        Commands::Types { date, base_url } => run_types(&date, base_url.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_mass(
    date: &str,
    mass_type: Option<&str>,
    base_url: Option<&str>,
    compact: bool,
) -> Result<(), AppError> {
    let date = lectio::parse_date(date)?;
    let provider = build_provider(base_url)?;
    let response = lectio::mass_with_provider(&provider, date, mass_type)?;

    let json = if compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{}", json);
    Ok(())
}

fn run_season(date: &str) -> Result<(), AppError> {
    let date = lectio::parse_date(date)?;
    let info = lectio::season_for(date);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn run_types(date: &str, base_url: Option<&str>) -> Result<(), AppError> {
    let date = lectio::parse_date(date)?;
    let provider = build_provider(base_url)?;
    let types = provider.mass_types(date)?;

    for mass_type in types {
        println!("{}", mass_type);
    }
    Ok(())
}

fn build_provider(base_url: Option<&str>) -> Result<UsccbHttpProvider, AppError> {
    match base_url {
        Some(raw) => {
            let url = Url::parse(raw).map_err(|e| AppError::Provider {
                message: format!("Invalid base URL '{}': {}", raw, e),
                status: None,
            })?;
            UsccbHttpProvider::with_base_url(url)
        }
        None => UsccbHttpProvider::new(),
    }
}

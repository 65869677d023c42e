//! adname - Generate standardized ad-set and ad-level names for creative assets

mod config;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::{AdnameConfig, OutputFormat};
use naming_core::{GeneratedPair, Layout, Mode, generate};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "adname",
    about = "Generate standardized ad-set and ad-level names for creative assets",
    long_about = "Builds the ad-set and ad-level naming strings for a video or static creative from its form fields"
)]
#[command(version)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate both naming strings for one creative
    Generate {
        /// Asset mode (video, static); defaults to the configured mode
        #[arg(short, long)]
        mode: Option<Mode>,

        /// JSON or TOML record file, or "-" for JSON on stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Set a field, e.g. --set hookTheme=Fear (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Mark the creative as NCON
        #[arg(long)]
        ncon: bool,

        /// Output format; defaults to the configured format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the fields a mode reads, in naming order
    Fields {
        /// Asset mode (video, static); defaults to the configured mode
        #[arg(short, long)]
        mode: Option<Mode>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Set the default asset mode
    SetMode {
        /// video or static
        mode: Mode,
    },
    /// Set the default output format
    SetFormat {
        #[arg(value_enum)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Generate {
            mode,
            input,
            set,
            ncon,
            format,
        } => {
            let config = AdnameConfig::load()?;
            let mode = mode.unwrap_or(config.default_mode);
            let format = format.unwrap_or(config.output_format);

            let record = input::read_record(input.as_deref(), &set, ncon)?;
            let pair = generate(&record, mode);
            println!("{}", render_pair(&pair, format)?);
        }
        Commands::Fields { mode } => {
            let mode = match mode {
                Some(mode) => mode,
                None => AdnameConfig::load()?.default_mode,
            };
            println!("Fields read in {} mode:", mode);
            for field in Layout::for_mode(mode).fields() {
                println!("  {}", field);
            }
        }
        Commands::Config { action } => handle_config_command(&action)?,
    }
    Ok(())
}

/// Handle config subcommands
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AdnameConfig::load()?;
            let path = AdnameConfig::config_path()?;
            println!("Config file: {}", path.display());
            println!();
            println!("{:#?}", config);
        }
        ConfigAction::Path => {
            println!("{}", AdnameConfig::config_path()?.display());
        }
        ConfigAction::SetMode { mode } => {
            let mut config = AdnameConfig::load()?;
            config.default_mode = *mode;
            config.save()?;
            println!("Default mode set to: {}", mode);
        }
        ConfigAction::SetFormat { format } => {
            let mut config = AdnameConfig::load()?;
            config.output_format = *format;
            config.save()?;
            println!("Default output format set to: {:?}", format);
        }
    }
    Ok(())
}

fn render_pair(pair: &GeneratedPair, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!("Ad set:   {}\nAd level: {}", pair.ad_set, pair.ad_level),
        OutputFormat::Json => serde_json::to_string_pretty(pair)?,
    })
}

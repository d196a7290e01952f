use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use miette::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "flexver", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// When to use colored output
    #[arg(
        long,
        value_enum,
        default_value = "auto",
        env = "FLEXVER_COLOR",
        global = true
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for anstream::ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => anstream::ColorChoice::Auto,
            ColorMode::Always => anstream::ColorChoice::Always,
            ColorMode::Never => anstream::ColorChoice::Never,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compare two versions")]
    Compare {
        /// The left-hand version
        #[arg(allow_hyphen_values = true)]
        left: String,

        /// The right-hand version
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    #[command(about = "Sort versions from oldest to newest")]
    Sort {
        /// Versions to sort; read one per line from stdin when omitted
        #[arg(allow_hyphen_values = true)]
        versions: Vec<String>,

        /// Sort from newest to oldest
        #[arg(short, long)]
        reverse: bool,

        /// Output format for the sorted versions
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    #[command(about = "Show how a version is broken into components")]
    Decompose {
        /// The version to decompose
        #[arg(allow_hyphen_values = true)]
        version: String,

        /// Output format for the components
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    #[command(about = "Run test vector files of `<version> <op> <version>` lines")]
    Check {
        /// Test vector files to run
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,
    },
}

fn setup_tracing(level: LevelFilter) {
    // `RUST_LOG` takes precedence over `-v`/`-q`.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anstream::ColorChoice::from(cli.color).write_global();
    setup_tracing(cli.verbosity.tracing_level_filter());

    match cli.command {
        Commands::Compare { left, right } => commands::compare::compare(&left, &right),
        Commands::Sort {
            versions,
            reverse,
            format,
        } => commands::sort::sort(versions, reverse, format)?,
        Commands::Decompose { version, format } => {
            commands::decompose::decompose(&version, format)?
        }
        Commands::Check { files } => commands::check::check(&files)?,
    }

    Ok(())
}

//! CLI Adapter.

mod clean;
mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use crate::app::api::BundleOptions;
use crate::app::config::ConfigOverrides;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "winsw-bundle")]
#[command(version)]
#[command(
    about = "Package a Java application jar as a WinSW Windows service bundle",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wrapper, descriptor, and lifecycle scripts
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        bundle: BundleArgs,
        /// Service identifier (replaces service.id and service.project_name)
        #[arg(long)]
        service_id: Option<String>,
        /// Log directory written to the descriptor; may contain %BASE%
        #[arg(long)]
        log_path: Option<String>,
        /// Fail on the first error while mirroring additional directories
        #[arg(long)]
        strict: bool,
        /// Print the summary as a single JSON line
        #[arg(long)]
        json: bool,
    },
    /// Remove artifacts left by a previous generation
    Clean {
        #[command(flatten)]
        bundle: BundleArgs,
    },
    /// Print the wrapper download URL for a release
    Url {
        /// WinSW release version
        #[arg(long, default_value = crate::domain::wrapper::DEFAULT_WRAPPER_VERSION)]
        wrapper_version: String,
    },
}

#[derive(Args)]
struct BundleArgs {
    /// Path to the bundle config (default: <project-dir>/winsw-bundle.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory relative paths resolve against
    #[arg(short, long)]
    project_dir: Option<PathBuf>,
    /// Built application jar
    #[arg(long)]
    jar: Option<String>,
    /// Directory receiving the wrapper, descriptor, and scripts
    #[arg(long)]
    output_dir: Option<String>,
    /// Directory receiving the jar copy
    #[arg(long)]
    jar_output_dir: Option<String>,
}

impl BundleArgs {
    fn into_options(self, service_id: Option<String>, log_path: Option<String>) -> BundleOptions {
        BundleOptions {
            config_path: self.config,
            project_dir: self.project_dir,
            overrides: ConfigOverrides {
                service_id,
                jar: self.jar,
                output_dir: self.output_dir,
                jar_output_dir: self.jar_output_dir,
                log_path,
            },
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = fmt::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { bundle, service_id, log_path, strict, json } => {
            generate::run_generate(bundle.into_options(service_id, log_path), strict, json)
        }
        Commands::Clean { bundle } => clean::run_clean(bundle.into_options(None, None)),
        Commands::Url { wrapper_version } => {
            crate::app::api::wrapper_url(&wrapper_version).map(|url| println!("{}", url))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

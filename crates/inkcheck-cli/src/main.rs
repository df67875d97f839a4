//! inkcheck CLI - visual verification for the studio website
//!
//! Usage:
//!   inkcheck init [path]        Write a default inkcheck.toml
//!   inkcheck verify             Run the booking-flow verification
//!   inkcheck nav                Run the landing-page structure checks

use anyhow::Result;
use clap::{Parser, Subcommand};
use inkcheck_core::CheckConfig;
use inkcheck_runner::{booking_flow, navigation_flow, VerificationRunner};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "inkcheck")]
#[command(author, version, about = "Visual verification for the studio website")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default inkcheck.toml to a directory
    Init {
        /// Target directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Run the booking-flow verification and capture screenshots
    Verify {
        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Bound on the success-message visibility wait, in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Check the landing page structure (artist cards, portfolio
    /// buttons, booking form options)
    Nav {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

/// Flags overriding values from inkcheck.toml
#[derive(clap::Args)]
struct ConfigOverrides {
    /// Directory containing the static site
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Directory screenshots are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Directory to load inkcheck.toml from (defaults to site root)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,
}

impl ConfigOverrides {
    fn load(&self) -> Result<CheckConfig> {
        let config_dir = self
            .config
            .clone()
            .or_else(|| self.site_root.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = CheckConfig::load_or_default(&config_dir)?;

        if let Some(ref site_root) = self.site_root {
            config.site_root = site_root.clone();
        }
        if let Some(ref output_dir) = self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.headed {
            config.browser.headless = false;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => cmd_init(path),
        Commands::Verify {
            overrides,
            timeout_secs,
        } => cmd_verify(overrides, timeout_secs).await,
        Commands::Nav { overrides } => cmd_nav(overrides).await,
    }
}

fn cmd_init(path: PathBuf) -> Result<()> {
    CheckConfig::write_default(&path)?;
    println!("Wrote {}", path.join("inkcheck.toml").display());
    Ok(())
}

async fn cmd_verify(overrides: ConfigOverrides, timeout_secs: Option<u64>) -> Result<()> {
    let mut config = overrides.load()?;
    if let Some(timeout) = timeout_secs {
        config.visibility_timeout_secs = timeout;
    }

    info!("Verifying site at {}", config.site_root.display());

    let scenario = booking_flow(&config)?;
    let runner = VerificationRunner::new(config);
    let report = runner.run(&scenario).await?;

    println!(
        "Verification passed in {}ms, {} screenshots:",
        report.duration_ms(),
        report.artifacts.len()
    );
    for artifact in &report.artifacts {
        println!("  {} ({} bytes)", artifact.path.display(), artifact.size_bytes);
    }

    Ok(())
}

async fn cmd_nav(overrides: ConfigOverrides) -> Result<()> {
    let config = overrides.load()?;

    info!("Checking landing page at {}", config.site_root.display());

    let scenario = navigation_flow(&config)?;
    let runner = VerificationRunner::new(config);
    let report = runner.run(&scenario).await?;

    println!("Structure checks passed in {}ms", report.duration_ms());

    Ok(())
}

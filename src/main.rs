//! # Image Optimizer - Main Entry Point
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Caricamento della configurazione e costruzione del registry
//! - Ottimizzazione di ogni file indicato (le directory vengono esplorate)
//!
//! ## Esempio di utilizzo:
//! ```bash
//! image-optimizer photos/ logo.png --config optimizers.json --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use image_optimizer::{file_manager::FileManager, Config, TracingLogger};

#[derive(Parser)]
#[command(name = "image-optimizer")]
#[command(about = "Optimize images in place with external tools chosen by media type")]
struct Args {
    /// Image files or directories to optimize
    #[arg(required_unless_present = "list_optimizers")]
    paths: Vec<PathBuf>,

    /// JSON config file (defaults to <config dir>/image-optimizer/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the registered optimizers and exit
    #[arg(long)]
    list_optimizers: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging, RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match args.config.as_ref() {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow::anyhow!("Config file does not exist: {}", path.display()));
            }
            Config::from_file(path).await?
        }
        None => match Config::default_path() {
            Some(path) => Config::from_file(&path).await?,
            None => Config::default(),
        },
    };

    let mut optimizer = config.build_optimizer()?;
    optimizer.use_logger(TracingLogger);

    if args.list_optimizers {
        for line in optimizer.describe_optimizers() {
            println!("{}", line);
        }
        return Ok(());
    }

    let files = FileManager::collect_inputs(&args.paths)?;
    let failures = optimizer.optimize_all(&files).await;

    info!("Processed {} file(s), {} failed", files.len(), failures);

    if failures > 0 {
        return Err(anyhow::anyhow!("{} of {} file(s) could not be optimized", failures, files.len()));
    }

    Ok(())
}

//! # Image Optimizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Rileva il media type di un'immagine leggendone il contenuto
//! - Seleziona, nell'ordine di registrazione, i tool esterni capaci di gestirlo
//! - Esegue i tool come sottoprocessi e ne logga l'esito
//!
//! Nessuna compressione avviene in Rust: tutto il lavoro è delegato ai
//! binari esterni (jpegoptim, pngquant, ...).
//!
//! ## Architettura dei moduli:
//! - `optimizer`: Orchestratore (`ImageOptimizer`)
//! - `optimizers`: Descriptor dei tool esterni (trait `Optimizer`)
//! - `media_type`: Rilevamento media type per contenuto
//! - `process`: Esecuzione sottoprocessi (trait `ProcessRunner`)
//! - `logger`: Collaboratore di logging (trait `OptimizerLogger`)
//! - `config`: Configurazione JSON del registry
//! - `file_manager`: Espansione degli input della CLI
//! - `error`: Tipi di errore custom
//!
//! ## Utilizzo:
//! ```rust,no_run
//! use image_optimizer::{ImageOptimizer, TracingLogger};
//!
//! # async fn run() -> Result<(), image_optimizer::OptimizeError> {
//! let mut optimizer = ImageOptimizer::new();
//! optimizer.use_logger(TracingLogger);
//! optimizer.optimize("photo.jpg").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod logger;
pub mod media_type;
pub mod optimizer;
pub mod optimizers;
pub mod process;
pub mod utils;

pub use config::{Config, ToolConfig};
pub use error::OptimizeError;
pub use logger::{DiscardLogger, OptimizerLogger, TracingLogger};
pub use optimizer::ImageOptimizer;
pub use optimizers::{ExternalTool, Jpegoptim, Optimizer, Pngquant};
pub use process::{ExecutionResult, ProcessRunner, SystemProcessRunner};

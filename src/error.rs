//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore custom della libreria.
//!
//! ## Categorie di errori:
//! - `FileAccess`: il file da ottimizzare non esiste, non è leggibile,
//!   oppure il rilevamento del media type è fallito
//! - `Configuration`: un comando non può essere costruito (path vuoto)
//!   oppure un optimizer configurato non è valido
//!
//! I fallimenti dei tool esterni NON sono errori: vengono solo loggati
//! a livello error e l'elaborazione prosegue con l'optimizer successivo.
//!
//! ## Esempio:
//! ```rust,ignore
//! match optimizer.optimize(&path).await {
//!     Err(OptimizeError::FileAccess { path, .. }) => eprintln!("skip {}", path.display()),
//!     other => other?,
//! }
//! ```

use std::path::PathBuf;

/// Custom error types for image optimization
#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OptimizeError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

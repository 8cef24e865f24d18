//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione del registry di optimizer.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` caricata da file JSON
//! - Permette di registrare tool esterni aggiuntivi senza scrivere codice
//! - Valida i tool configurati prima di costruire l'orchestratore
//!
//! ## Parametri di configurazione:
//! - `include_default_optimizers`: registra jpegoptim e pngquant (default: true)
//! - `optimizers`: tool aggiuntivi, eseguiti dopo quelli di default
//!   nell'ordine del file
//!
//! ## Esempio:
//! ```json
//! {
//!   "include_default_optimizers": true,
//!   "optimizers": [
//!     { "name": "optipng", "binary": "optipng", "args": ["-i0", "-o2", "-quiet"], "media_types": ["image/png"] },
//!     { "binary": "gifsicle", "args": ["-b", "-O3"], "media_types": ["image/gif"] }
//!   ]
//! }
//! ```

use crate::optimizer::ImageOptimizer;
use crate::optimizers::ExternalTool;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration of the optimizer registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Register the built-in jpegoptim and pngquant descriptors first
    pub include_default_optimizers: bool,
    /// Extra tools, appended in file order
    pub optimizers: Vec<ToolConfig>,
}

/// One externally configured tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Display name (defaults to the binary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Executable, looked up on PATH unless absolute
    pub binary: String,
    /// Fixed flags placed before the image path
    #[serde(default)]
    pub args: Vec<String>,
    /// Accepted media types (`image/png`, or `image/*`)
    pub media_types: Vec<String>,
}

impl ToolConfig {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.binary)
    }

    fn to_optimizer(&self) -> ExternalTool {
        ExternalTool::new(
            self.display_name(),
            self.binary.clone(),
            self.args.iter().cloned(),
            self.media_types.iter().cloned(),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_default_optimizers: true,
            optimizers: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configured tools
    pub fn validate(&self) -> Result<()> {
        for (index, tool) in self.optimizers.iter().enumerate() {
            if tool.binary.trim().is_empty() {
                return Err(anyhow::anyhow!("Optimizer #{} has an empty binary", index + 1));
            }

            if tool.media_types.is_empty() {
                return Err(anyhow::anyhow!(
                    "Optimizer '{}' must declare at least one media type",
                    tool.display_name()
                ));
            }

            if let Some(bad) = tool.media_types.iter().find(|t| !is_media_type(t)) {
                return Err(anyhow::anyhow!(
                    "Optimizer '{}' declares an invalid media type: '{}'",
                    tool.display_name(),
                    bad
                ));
            }
        }

        Ok(())
    }

    /// Builds an orchestrator wired with the configured registry
    pub fn build_optimizer(&self) -> Result<ImageOptimizer> {
        self.validate()?;

        let mut optimizer = if self.include_default_optimizers {
            ImageOptimizer::new()
        } else {
            ImageOptimizer::empty()
        };

        for tool in &self.optimizers {
            debug!("Registering configured optimizer {}", tool.display_name());
            optimizer.add_optimizer(tool.to_optimizer());
        }

        Ok(optimizer)
    }

    /// Default config location: `<config_dir>/image-optimizer/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("image-optimizer").join("config.json"))
    }

    /// Load configuration from file (defaults if the file does not exist)
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

fn is_media_type(value: &str) -> bool {
    match value.split_once('/') {
        Some((kind, subtype)) => !kind.is_empty() && !subtype.is_empty() && !value.contains(char::is_whitespace),
        None => false,
    }
}

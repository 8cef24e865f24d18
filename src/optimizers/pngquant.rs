//! `pngquant` descriptor: lossy PNG quantization, overwriting the input.

use super::{CommandTemplate, MediaTypes, Optimizer};
use crate::args;

/// Runs `pngquant --force --ext=.png <path>` on `image/png`.
///
/// `--ext=.png` together with `--force` makes pngquant write its result
/// over the original file.
#[derive(Debug, Clone)]
pub struct Pngquant {
    template: CommandTemplate,
    media_types: MediaTypes,
}

impl Pngquant {
    pub const BINARY: &'static str = "pngquant";

    pub fn new() -> Self {
        Self {
            template: CommandTemplate::new(Self::BINARY, args!["--force", "--ext=.png"]),
            media_types: MediaTypes::new(["image/png"]),
        }
    }
}

impl Default for Pngquant {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer for Pngquant {
    fn name(&self) -> &str {
        Self::BINARY
    }

    fn media_types(&self) -> &[String] {
        self.media_types.as_slice()
    }

    fn can_handle(&self, media_type: &str) -> bool {
        self.media_types.contains(media_type)
    }

    fn template(&self) -> &CommandTemplate {
        &self.template
    }
}

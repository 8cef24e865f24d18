//! `jpegoptim` descriptor: lossless JPEG optimization in place.

use super::{CommandTemplate, MediaTypes, Optimizer};
use crate::args;

/// Runs `jpegoptim --strip-all --all-progressive <path>` on `image/jpeg`.
///
/// Strips every metadata marker and rewrites the file as progressive JPEG.
/// The flags are fixed.
#[derive(Debug, Clone)]
pub struct Jpegoptim {
    template: CommandTemplate,
    media_types: MediaTypes,
}

impl Jpegoptim {
    pub const BINARY: &'static str = "jpegoptim";

    pub fn new() -> Self {
        Self {
            template: CommandTemplate::new(Self::BINARY, args!["--strip-all", "--all-progressive"]),
            media_types: MediaTypes::new(["image/jpeg"]),
        }
    }
}

impl Default for Jpegoptim {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer for Jpegoptim {
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

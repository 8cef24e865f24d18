//! Data-driven descriptor for any external tool.

use super::{CommandTemplate, MediaTypes, Optimizer};

/// Descriptor built from plain data: a name, a binary, fixed flags and the
/// media types it accepts. Used for tools configured in the config file.
///
/// ```rust
/// use image_optimizer::optimizers::{ExternalTool, Optimizer};
///
/// let gifsicle = ExternalTool::new("gifsicle", "gifsicle", ["-b", "-O3"], ["image/gif"]);
/// assert!(gifsicle.can_handle("image/gif"));
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTool {
    name: String,
    template: CommandTemplate,
    media_types: MediaTypes,
}

impl ExternalTool {
    pub fn new<A, M>(
        name: impl Into<String>,
        binary: impl Into<String>,
        args: impl IntoIterator<Item = A>,
        media_types: impl IntoIterator<Item = M>,
    ) -> Self
    where
        A: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            template: CommandTemplate::new(binary, args.into_iter().map(Into::into).collect()),
            media_types: MediaTypes::new(media_types),
        }
    }
}

impl Optimizer for ExternalTool {
    fn name(&self) -> &str {
        &self.name
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_external_tool_command() {
        let svgo = ExternalTool::new(
            "svgo",
            "svgo",
            ["--disable=cleanupIDs"],
            ["image/svg", "image/svg+xml"],
        );

        assert_eq!(svgo.name(), "svgo");
        assert!(svgo.can_handle("image/svg+xml"));
        assert!(!svgo.can_handle("image/png"));
        assert_eq!(svgo.media_types().to_vec(), vec!["image/svg", "image/svg+xml"]);

        let argv = svgo.bind(Path::new("icon.svg")).build_command().unwrap();
        assert_eq!(argv, vec!["svgo", "--disable=cleanupIDs", "icon.svg"]);
    }

    #[test]
    fn test_external_tool_without_flags() {
        let tool = ExternalTool::new("cleaner", "/opt/bin/clean", Vec::<String>::new(), ["image/*"]);
        let argv = tool.bind(Path::new("x.webp")).build_command().unwrap();
        assert_eq!(argv, vec!["/opt/bin/clean", "x.webp"]);
    }
}

//! # Optimizer Descriptors
//!
//! An optimizer descriptor wraps one external binary: it declares which
//! media types it accepts and owns a fixed command template. The image path
//! is never stored on the descriptor, it is bound per invocation:
//!
//! ```rust
//! use image_optimizer::optimizers::{Jpegoptim, Optimizer};
//! use std::path::Path;
//!
//! let jpegoptim = Jpegoptim::new();
//! assert!(jpegoptim.can_handle("image/jpeg"));
//!
//! let argv = jpegoptim.bind(Path::new("photo.jpg")).build_command()?;
//! assert_eq!(argv, ["jpegoptim", "--strip-all", "--all-progressive", "photo.jpg"]);
//! # Ok::<(), image_optimizer::OptimizeError>(())
//! ```
//!
//! ## Built-in descriptors
//! - [`Jpegoptim`]: lossless JPEG optimization, `image/jpeg`
//! - [`Pngquant`]: PNG quantization, `image/png`
//!
//! [`ExternalTool`] covers any other binary without writing code.

pub mod external;
pub mod jpegoptim;
pub mod pngquant;

pub use external::ExternalTool;
pub use jpegoptim::Jpegoptim;
pub use pngquant::Pngquant;

use crate::error::OptimizeError;
use std::ffi::OsString;
use std::path::Path;

/// One external optimization tool.
///
/// Implementations must be immutable after construction: `can_handle` is a
/// pure predicate and `bind` returns a value, so a single instance can be
/// shared by concurrent `optimize` calls.
pub trait Optimizer: Send + Sync {
    /// Short human-readable name used in listings.
    fn name(&self) -> &str;

    /// Declared media types, in declaration order.
    fn media_types(&self) -> &[String];

    /// Whether this tool accepts files of `media_type`.
    fn can_handle(&self, media_type: &str) -> bool;

    /// Executable plus fixed flags.
    fn template(&self) -> &CommandTemplate;

    /// Binds the template to a concrete image path.
    fn bind<'a>(&'a self, image_path: &'a Path) -> BoundCommand<'a> {
        self.template().bind(image_path)
    }
}

/// Executable name followed by its fixed argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    binary: String,
    args: Vec<String>,
}

impl CommandTemplate {
    pub fn new(binary: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            args,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn bind<'a>(&'a self, image_path: &'a Path) -> BoundCommand<'a> {
        BoundCommand {
            template: self,
            image_path,
        }
    }
}

/// A command template bound to one image path.
#[derive(Debug, Clone, Copy)]
pub struct BoundCommand<'a> {
    template: &'a CommandTemplate,
    image_path: &'a Path,
}

impl BoundCommand<'_> {
    /// Builds the argv: binary, fixed flags, then the image path as the
    /// last token. The path is passed through as an `OsString`, so names
    /// that are not valid UTF-8 reach the tool unchanged.
    ///
    /// # Errors
    /// [`OptimizeError::Configuration`] when the bound path is empty.
    pub fn build_command(&self) -> Result<Vec<OsString>, OptimizeError> {
        if self.image_path.as_os_str().is_empty() {
            return Err(OptimizeError::Configuration(format!(
                "no image path bound for {}",
                self.template.binary
            )));
        }

        let mut argv = Vec::with_capacity(self.template.args.len() + 2);
        argv.push(OsString::from(&self.template.binary));
        argv.extend(self.template.args.iter().map(OsString::from));
        argv.push(self.image_path.as_os_str().to_owned());
        Ok(argv)
    }
}

/// Ordered set of media types a descriptor accepts.
///
/// Entries match exactly and case-sensitively. An entry ending in `/*`
/// (for example `image/*`) matches every type sharing that prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTypes(Vec<String>);

impl MediaTypes {
    pub fn new<T, I>(types: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = T>,
    {
        let mut set: Vec<String> = Vec::new();
        for media_type in types {
            let media_type = media_type.into();
            if !set.contains(&media_type) {
                set.push(media_type);
            }
        }
        Self(set)
    }

    pub fn contains(&self, media_type: &str) -> bool {
        self.0.iter().any(|declared| match declared.strip_suffix('*') {
            Some(prefix) if prefix.ends_with('/') => media_type.starts_with(prefix),
            _ => declared == media_type,
        })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_build_command_appends_path_last() {
        let template = CommandTemplate::new("optipng", args!["-o2"]);
        let argv = template.bind(Path::new("/img/a b.png")).build_command().unwrap();
        assert_eq!(argv, vec!["optipng", "-o2", "/img/a b.png"]);
    }

    #[test]
    fn test_build_command_without_path_is_configuration_error() {
        let template = CommandTemplate::new("optipng", args!["-o2"]);
        let err = template.bind(Path::new("")).build_command().unwrap_err();
        assert!(matches!(err, OptimizeError::Configuration(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_build_command_keeps_non_utf8_path_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let template = CommandTemplate::new("optipng", Vec::new());
        let path = Path::new(OsStr::from_bytes(b"caf\xe9.png"));
        let argv = template.bind(path).build_command().unwrap();

        assert_eq!(argv.len(), 2);
        assert_eq!(argv[1].as_bytes(), b"caf\xe9.png");
    }

    #[test]
    fn test_binding_does_not_leak_between_paths() {
        let template = CommandTemplate::new("gifsicle", args!["-b", "-O3"]);
        let first = template.bind(Path::new("one.gif"));
        let second = template.bind(Path::new("two.gif"));

        assert_eq!(first.build_command().unwrap().last().unwrap(), "one.gif");
        assert_eq!(second.build_command().unwrap().last().unwrap(), "two.gif");
    }

    #[test]
    fn test_media_types_exact_and_case_sensitive() {
        let types = MediaTypes::new(["image/png"]);
        assert!(types.contains("image/png"));
        assert!(!types.contains("image/PNG"));
        assert!(!types.contains("image/png+x"));
        assert!(!types.contains("image/"));
    }

    #[test]
    fn test_media_types_wildcard() {
        let types = MediaTypes::new(["image/*"]);
        assert!(types.contains("image/gif"));
        assert!(types.contains("image/svg+xml"));
        assert!(!types.contains("application/octet-stream"));

        // a bare `*` is not a wildcard
        assert!(!MediaTypes::new(["*"]).contains("image/gif"));
    }

    #[test]
    fn test_media_types_deduplicates_preserving_order() {
        let types = MediaTypes::new(["image/png", "image/apng", "image/png"]);
        assert_eq!(types.as_slice(), ["image/png", "image/apng"]);
    }
}

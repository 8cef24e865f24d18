//! # Utility Functions Module
//!
//! Small helpers shared by the optimizer descriptors.

use std::ffi::OsStr;

/// Converts any iterable of string-like items to `Vec<String>`.
///
/// Used to spell out fixed argument lists without a `.to_string()` on
/// every element:
///
/// ```rust
/// use image_optimizer::utils::to_string_vec;
///
/// let args = to_string_vec(["--strip-all", "--all-progressive"]);
/// assert_eq!(args, vec!["--strip-all".to_string(), "--all-progressive".to_string()]);
/// ```
pub fn to_string_vec<T, I>(items: I) -> Vec<String>
where
    T: ToString,
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(|item| item.to_string()).collect()
}

/// Renders an argv for log lines. Tokens are joined with a single space
/// and never quoted, so the output is for humans only. Bytes that are not
/// valid UTF-8 are shown lossily.
pub fn display_command<S: AsRef<OsStr>>(argv: &[S]) -> String {
    argv.iter()
        .map(|token| token.as_ref().to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Macro form of [`to_string_vec`].
///
/// ```rust
/// let args = image_optimizer::args!["--force", "--ext=.png"];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    [$($item:expr),* $(,)?] => {
        $crate::utils::to_string_vec([$($item),*])
    };
}

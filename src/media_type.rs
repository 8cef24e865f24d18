//! # Media Type Detection
//!
//! Determines the media type of a file by looking at its first bytes,
//! never at its extension. Raster formats go through the `image` crate's
//! magic-byte table; SVG is recognised from its markup.
//!
//! | Content                 | Reported type              |
//! |-------------------------|----------------------------|
//! | JPEG / PNG / GIF / WebP | `image/jpeg`, `image/png`, ... |
//! | SVG document            | `image/svg+xml`            |
//! | empty file              | `application/x-empty`      |
//! | anything else           | `application/octet-stream` |
//!
//! Only I/O problems are errors: an unknown format is a valid answer that
//! simply matches no optimizer.

use crate::error::OptimizeError;
use image::ImageFormat;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Number of leading bytes inspected.
const SNIFF_LEN: u64 = 512;

pub const OCTET_STREAM: &str = "application/octet-stream";
pub const EMPTY: &str = "application/x-empty";
pub const SVG: &str = "image/svg+xml";

/// Detects the media type of the file at `path` by content inspection.
///
/// # Errors
/// Returns [`OptimizeError::FileAccess`] when the file cannot be opened or
/// read (missing file, permissions, a directory, ...).
pub async fn detect(path: &Path) -> Result<String, OptimizeError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| OptimizeError::file_access(path, e))?;

    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN)
        .read_to_end(&mut header)
        .await
        .map_err(|e| OptimizeError::file_access(path, e))?;

    let media_type = from_bytes(&header);
    debug!("Detected media type {} for {}", media_type, path.display());
    Ok(media_type.to_string())
}

/// Maps the leading bytes of a file to a media type string.
pub fn from_bytes(header: &[u8]) -> &'static str {
    if header.is_empty() {
        return EMPTY;
    }

    match image::guess_format(header) {
        Ok(format) => mime_for_format(format),
        Err(_) if looks_like_svg(header) => SVG,
        Err(_) => OCTET_STREAM,
    }
}

fn mime_for_format(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Ico => "image/x-icon",
        ImageFormat::Avif => "image/avif",
        ImageFormat::Tga => "image/x-tga",
        ImageFormat::Pnm => "image/x-portable-anymap",
        ImageFormat::Hdr => "image/vnd.radiance",
        ImageFormat::OpenExr => "image/x-exr",
        ImageFormat::Qoi => "image/x-qoi",
        _ => OCTET_STREAM,
    }
}

fn looks_like_svg(header: &[u8]) -> bool {
    let text = String::from_utf8_lossy(header);
    let text = text.trim_start_matches('\u{feff}').trim_start().to_ascii_lowercase();

    text.starts_with("<svg")
        || ((text.starts_with("<?xml") || text.starts_with("<!doctype svg")) && text.contains("<svg"))
}

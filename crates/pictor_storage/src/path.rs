//! Object path generation for uploaded artifacts.

use uuid::Uuid;

/// File extension for a MIME type, `.png` when unmapped.
///
/// # Examples
///
/// ```
/// use pictor_storage::extension_for;
///
/// assert_eq!(extension_for("image/webp"), ".webp");
/// assert_eq!(extension_for("application/octet-stream"), ".png");
/// ```
pub fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" | "image/jpg" => ".jpg",
        "image/png" => ".png",
        "image/webp" => ".webp",
        "image/gif" => ".gif",
        _ => ".png",
    }
}

/// Generate a fresh object path: `{folder}/{random-hex-id}{extension}`.
///
/// The id is a v4 UUID in simple hex form, so two calls never collide in
/// practice even with identical inputs.
pub fn object_path(folder: &str, mime: &str) -> String {
    format!(
        "{}/{}{}",
        folder.trim_end_matches('/'),
        Uuid::new_v4().simple(),
        extension_for(mime)
    )
}

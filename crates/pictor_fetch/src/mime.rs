//! MIME type normalization for downloaded assets.

/// MIME type assumed when a response carries no Content-Type header.
pub const DEFAULT_MIME: &str = "image/jpeg";

/// Normalize a raw Content-Type header value.
///
/// Strips any parameter suffix (text after a `;`) and surrounding
/// whitespace, defaulting to [`DEFAULT_MIME`] when the header is absent or
/// empty.
///
/// # Examples
///
/// ```
/// use pictor_fetch::normalize_mime;
///
/// assert_eq!(normalize_mime(Some("image/png; charset=binary")), "image/png");
/// assert_eq!(normalize_mime(None), "image/jpeg");
/// ```
pub fn normalize_mime(raw: Option<&str>) -> String {
    let Some(value) = raw else {
        return DEFAULT_MIME.to_string();
    };

    let base = value.split(';').next().unwrap_or(value).trim();
    if base.is_empty() {
        DEFAULT_MIME.to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parameter_suffix() {
        assert_eq!(
            normalize_mime(Some("image/webp;charset=utf-8")),
            "image/webp"
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize_mime(Some(" image/gif ; q=1")), "image/gif");
    }

    #[test]
    fn defaults_when_missing_or_empty() {
        assert_eq!(normalize_mime(None), DEFAULT_MIME);
        assert_eq!(normalize_mime(Some("")), DEFAULT_MIME);
        assert_eq!(normalize_mime(Some("   ;")), DEFAULT_MIME);
    }

    #[test]
    fn passes_plain_types_through() {
        assert_eq!(normalize_mime(Some("image/png")), "image/png");
    }
}

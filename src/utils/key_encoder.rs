//! Object key normalisation and percent-encoding for media URLs.

/// Strips leading slashes and surrounding whitespace from an object key.
pub fn normalize_key(key: &str) -> &str {
    key.trim().trim_start_matches('/')
}

/// Percent-encodes an object key for use in a URL path.
///
/// Each `/`-separated segment is encoded on its own so the separators survive.
/// RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) are kept as-is.
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("/videos/a.mp4"), "videos/a.mp4");
        assert_eq!(normalize_key("  //a.png "), "a.png");
        assert_eq!(normalize_key("/"), "");
    }

    #[test]
    fn test_encode_keeps_separators_and_unreserved() {
        assert_eq!(encode_key("videos/clip-01_v2.mp4"), "videos/clip-01_v2.mp4");
        assert_eq!(encode_key("a~b/c.d"), "a~b/c.d");
    }

    #[test]
    fn test_encode_escapes_reserved_and_unicode() {
        assert_eq!(encode_key("my file.png"), "my%20file.png");
        assert_eq!(encode_key("a+b&c"), "a%2Bb%26c");
        assert_eq!(encode_key("café.jpg"), "caf%C3%A9.jpg");
    }
}

/// Derive an output filename from a remote locator.
///
/// Takes the final path segment of the URL, ignoring query string and
/// fragment. Falls back to `"download"` when the URL ends in a slash or
/// has no usable segment, so every retrieval yields a name the archive
/// can use.
pub fn derive_filename(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
    let segment = without_query.rsplit('/').next().unwrap_or("");

    if segment.is_empty() {
        "download".to_string()
    } else {
        segment.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path() {
        assert_eq!(
            derive_filename("https://files.example.com/docs/scan.pdf"),
            "scan.pdf"
        );
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            derive_filename("https://x.example/a/photo.jpg?sig=abc#top"),
            "photo.jpg"
        );
    }

    #[test]
    fn trailing_slash_falls_back() {
        assert_eq!(derive_filename("https://x.example/a/"), "download");
        assert_eq!(derive_filename(""), "download");
    }

    #[test]
    fn bare_name_passes_through() {
        assert_eq!(derive_filename("receipt.png"), "receipt.png");
    }
}

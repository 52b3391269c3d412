//! Google Drive share-link rewriting.
//!
//! WhatsApp fetches document links itself, so a Drive "view" page has to be
//! turned into the direct download endpoint before it is sent.

const DRIVE_HOST: &str = "drive.google.com";
const SHARE_MARKER: &str = "/file/d/";

/// Converts `https://drive.google.com/file/d/<id>/view?...` into
/// `https://drive.google.com/uc?export=download&id=<id>`.
///
/// Anything that is not a recognizable share link is returned unchanged.
pub fn to_direct_download(link: &str) -> String {
    if !link.contains(DRIVE_HOST) {
        return link.to_string();
    }

    let Some((_, rest)) = link.split_once(SHARE_MARKER) else {
        return link.to_string();
    };

    let file_id = rest
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or_default();

    if file_id.is_empty() {
        return link.to_string();
    }

    format!("https://{}/uc?export=download&id={}", DRIVE_HOST, file_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link_is_rewritten() {
        assert_eq!(
            to_direct_download("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
            "https://drive.google.com/uc?export=download&id=ABC123"
        );
    }

    #[test]
    fn test_share_link_without_trailing_segment() {
        assert_eq!(
            to_direct_download("https://drive.google.com/file/d/XYZ?usp=share_link"),
            "https://drive.google.com/uc?export=download&id=XYZ"
        );
    }

    #[test]
    fn test_other_links_are_untouched() {
        assert_eq!(to_direct_download("https://example.com/x"), "https://example.com/x");
        assert_eq!(
            to_direct_download("https://drive.google.com/drive/folders/abc"),
            "https://drive.google.com/drive/folders/abc"
        );
    }

    #[test]
    fn test_malformed_share_link_falls_back() {
        assert_eq!(
            to_direct_download("https://drive.google.com/file/d/"),
            "https://drive.google.com/file/d/"
        );
        assert_eq!(to_direct_download(""), "");
    }
}

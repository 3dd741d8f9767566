//! Text formatting utilities for the start page.

/// Formats how many bookmarks the grid shows.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_bookmark_count(3, 3), "3 websites");
/// assert_eq!(format_bookmark_count(1, 4), "Showing 1 of 4 websites");
/// ```
pub fn format_bookmark_count(shown: usize, total: usize) -> String {
    let noun = |n: usize| if n == 1 { "website" } else { "websites" };
    if shown == total {
        format!("{} {}", total, noun(total))
    } else {
        format!("Showing {} of {} {}", shown, total, noun(total))
    }
}

/// Formats a byte count as B, KB or MB.
pub fn format_size(bytes: usize) -> String {
    let size = bytes as f64;
    if size >= 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else if size >= 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Describes where the current background comes from.
pub fn describe_background(background: &str, is_custom: bool) -> String {
    if rstartpage::data_uri::is_data_uri(background) {
        // base64 inflates by 4/3
        let payload = background.split_once(',').map(|(_, p)| p.len()).unwrap_or(0);
        format!("Uploaded image ({})", format_size(payload / 4 * 3))
    } else if is_custom {
        format!("Custom URL: {}", background)
    } else {
        "Default background".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_count() {
        assert_eq!(format_bookmark_count(3, 3), "3 websites");
        assert_eq!(format_bookmark_count(1, 1), "1 website");
        assert_eq!(format_bookmark_count(1, 4), "Showing 1 of 4 websites");
        assert_eq!(format_bookmark_count(0, 0), "0 websites");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_describe_background() {
        assert_eq!(describe_background("https://x/bg.jpg", false), "Default background");
        assert_eq!(describe_background("https://x/bg.jpg", true), "Custom URL: https://x/bg.jpg");
        assert_eq!(describe_background("data:image/png;base64,AAAA", true), "Uploaded image (3 B)");
    }
}

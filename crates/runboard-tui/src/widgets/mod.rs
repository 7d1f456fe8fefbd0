//! Dashboard widgets

pub mod confirm_dialog;
pub mod filter_bar;
pub mod header;
pub mod modal_overlay;
pub mod run_table;
pub mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use filter_bar::FilterBar;
pub use header::MainHeader;
pub use run_table::RunTable;
pub use status_bar::StatusBar;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to `max_width` display columns, ending with `…` when cut
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("shap", 10), "shap");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_with_ellipsis("statistical parity", 8), "statist…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_with_ellipsis("模型文件", 5), "模型…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }
}

//! Markdown rendering for post bodies and the editor's live preview.
//!
//! Raw HTML in author input passes through untouched. That matches the
//! platform's contract (authors are trusted); callers embedding output
//! where untrusted authors exist must sanitize separately.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to an HTML fragment (GFM tables, strikethrough,
/// and task lists enabled).
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Estimated reading time in minutes at ~200 words per minute,
/// never less than one.
pub fn reading_time_minutes(source: &str) -> u32 {
    let words = source.split_whitespace().count() as u32;
    (words.div_ceil(200)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_renders_gfm_table() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render_markdown("before <span class=\"x\">inline</span> after");
        assert!(html.contains("<span class=\"x\">inline</span>"));
    }

    #[test]
    fn test_reading_time_floor() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("one two three"), 1);
    }

    #[test]
    fn test_reading_time_scales() {
        let long = "word ".repeat(450);
        assert_eq!(reading_time_minutes(&long), 3);
    }
}

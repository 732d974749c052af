//! Markdown rendering component
//!
//! Renders static documentation content (knowledge base, debug notes) as
//! sanitized-enough HTML for the console's own trusted content.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Helper function to render Markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders a block of trusted markdown content
#[component]
pub fn MarkdownView(content: String) -> Element {
    let html_content = render_markdown(&content);
    rsx! {
        div {
            class: "c-markdown",
            dangerous_inner_html: "{html_content}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = render_markdown("# Title\n\nsome *emphasis*");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_renders_task_lists() {
        let html = render_markdown("- [x] done\n- [ ] open");
        assert!(html.contains("checkbox"));
    }
}

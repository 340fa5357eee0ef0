//! Markdown rendering for AI responses

use pulldown_cmark::{html, Event, Options, Parser};

/// Convert markdown to HTML safe to inject into the response pane.
///
/// AI output is untrusted, so raw HTML events (block and inline) are
/// demoted to literal text before serialization; `push_html` then
/// escapes them like any other text node.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("Hello"), "<p>Hello</p>\n");
    }

    #[test]
    fn bold_renders_strong() {
        assert!(render("**Hi**").contains("<strong>Hi</strong>"));
    }

    #[test]
    fn lists_render_items() {
        let out = render("- Item 1\n- Item 2");
        assert!(out.contains("<li>Item 1</li>"));
        assert!(out.contains("<li>Item 2</li>"));
    }

    #[test]
    fn fenced_code_renders_code_block() {
        let out = render("```javascript\nconsole.log(\"ok\");\n```");
        assert!(out.contains("<pre><code"));
        assert!(out.contains("console.log"));
    }

    #[test]
    fn raw_html_is_neutralized() {
        let out = render("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn inline_html_is_neutralized() {
        let out = render("hello <img src=x onerror=alert(1)> world");
        assert!(!out.contains("<img"));
    }
}

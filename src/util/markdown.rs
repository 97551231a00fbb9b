//! Markdown rendering for post bodies.
//!
//! Posts store markdown; the post view and the editor preview both render
//! it through this single path so they can never disagree.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to an HTML fragment.
pub fn render_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}

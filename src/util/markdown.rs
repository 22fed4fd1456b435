//! Markdown rendering for assistant turns.
//!
//! The generation service formats recipes as Markdown (headers, bullets,
//! blockquotes); assistant turns render the converted HTML. User turns stay
//! plain text.

use pulldown_cmark::{Options, Parser, html};

/// Convert Markdown text to an HTML fragment.
#[must_use]
pub fn to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;

//! fOS HTML Parser
//!
//! HTML5 parser built on html5ever, producing `fos_dom` documents.
//! Whitespace-only text is preserved so leaf traversal sees the same
//! nodes a browser DOM would.

mod parser;

pub use fos_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a [`Document`]
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build tree: {0}")]
    Tree(#[from] fos_dom::DomError),
}

use tracing::instrument;

use crate::dom::Document;
use crate::error::ParseError;
use crate::tokens::tokenizer::Tokenizer;
use crate::tree::builder::TreeBuilder;

/// Construction-time options for a [`Parser`].
///
/// Currently a single knob: whether structural errors during tree
/// construction raise ([`strict_mode`](ParserOptions::strict_mode) = true)
/// or are silently swallowed (the default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    strict_mode: bool,
}

/// Builds a [`Parser`] with non-default [`ParserOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserBuilder {
    options: ParserOptions,
}

impl ParserBuilder {
    /// When `true`, the tree constructor raises a [`ParseError`] on the
    /// first structural error (unmatched end tag, duplicate `head`,
    /// unrecognized end tag in head) instead of discarding it.
    pub fn strict_mode(mut self, strict_mode: bool) -> Self {
        self.options.strict_mode = strict_mode;
        self
    }

    pub fn build(self) -> Parser {
        Parser {
            options: self.options,
        }
    }
}

/// Parses HTML-like markup into a [`Document`].
///
/// Reusable: each call to [`Parser::parse`] resets all internal state and
/// allocates a fresh document. Not safe to call concurrently from multiple
/// threads against the same instance; a completed `Document` is immutable
/// and safe to read from anywhere once `parse` has returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// A parser with default options (lenient mode).
    pub fn new() -> Self {
        Parser::default()
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    /// Tokenizes and tree-constructs `input` in one pass.
    ///
    /// In lenient mode (the default) this never fails: malformed input still
    /// yields a complete document, possibly shorter than expected. In strict
    /// mode the first structural error aborts the parse.
    #[instrument(skip(self, input), fields(input_len = input.len(), strict_mode = self.options.strict_mode))]
    pub fn parse(&self, input: &str) -> Result<Document, ParseError> {
        let tokens = Tokenizer::new(input).tokenize();
        tracing::debug!(token_count = tokens.len(), "tokenization complete");
        TreeBuilder::new(self.options.strict_mode).build(tokens)
    }
}

use thiserror::Error;

/// A structural error raised by the tree constructor.
///
/// Tokenization recoveries never surface here — the tokenizer always
/// recovers silently. These are category-2 errors in the error-handling
/// design: routed through [`crate::tree::TreeBuilder`]'s single reporter,
/// which raises them in `strict_mode` and discards them otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unmatched end tag: {0}")]
    UnmatchedEndTag(String),

    #[error("duplicate head element")]
    DuplicateHead,

    #[error("unrecognized end tag in head: {0}")]
    UnrecognizedEndTagInHead(String),
}

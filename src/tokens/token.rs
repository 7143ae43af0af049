use std::collections::HashMap;

/// The kind of a [`Token`] produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    StartTag,
    EndTag,
    Character,
    Comment,
    Doctype,
    XmlDeclaration,
    EndOfInput,
}

/// A single token produced by the tokenizer.
///
/// # Fields
/// * `kind` - the kind of token (start tag, end tag, character run, ...).
/// * `data` - the tag name (start/end tag), the character run, or the opaque
///   payload of a comment/doctype/XML declaration. Unused for `EndOfInput`.
/// * `attributes` - name to value mapping, populated only for `StartTag`.
///   Later duplicate attribute names overwrite earlier ones.
/// * `self_closing` - true if a `StartTag` was written as `<tag />`.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
    pub attributes: HashMap<String, String>,
    pub self_closing: bool,
}

impl Token {
    /// Creates an empty token of the given kind, ready to be filled in by the
    /// tokenizer state handlers.
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            data: String::new(),
            attributes: HashMap::new(),
            self_closing: false,
        }
    }

    /// Creates a `Character` token carrying a single character.
    pub fn character(ch: char) -> Self {
        let mut token = Token::new(TokenKind::Character);
        token.data.push(ch);
        token
    }

    /// Creates a `Character` token carrying a whole string (used by the
    /// raw-text scan-ahead in [`crate::tokens::states::raw_text`]).
    pub fn character_run(data: String) -> Self {
        Token {
            kind: TokenKind::Character,
            data,
            attributes: HashMap::new(),
            self_closing: false,
        }
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput)
    }
}

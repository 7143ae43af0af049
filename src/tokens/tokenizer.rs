use tracing::trace;

use crate::tokens::state::TokenizerState;
use crate::tokens::states::{
    attributes::{
        handle_after_attribute_name_state, handle_after_attribute_value_state,
        handle_attribute_name_state, handle_attribute_value_double_quoted_state,
        handle_attribute_value_single_quoted_state, handle_attribute_value_unquoted_state,
        handle_before_attribute_name_state, handle_before_attribute_value_state,
    },
    data::handle_data_state,
    declaration::{handle_doctype_declaration_state, handle_xml_declaration_state},
    raw_text::handle_raw_text_state,
    tag::{
        handle_end_tag_open_state, handle_self_closing_start_tag_state, handle_tag_name_state,
        handle_tag_open_state,
    },
};
use crate::tokens::token::Token;

/// Mutable state threaded through every `handle_*_state` function.
///
/// # Fields
/// * `input` - the full input, indexed by Unicode scalar value.
/// * `pos` - the read cursor into `input`.
/// * `state` - the current tokenizer state.
/// * `current_token` - the start/end tag, doctype, or XML declaration under
///   construction, if any.
/// * `current_attribute_name` / `current_attribute_value` - scratch space for
///   the attribute currently being parsed. Cleared on every commit: letting
///   one linger would leak it into the next attribute.
/// * `appropriate_end_tag` - set on entry to `RawText`, e.g. `"</script"`.
pub struct Tokenizer {
    pub(crate) input: Vec<char>,
    pub(crate) pos: usize,
    pub(crate) state: TokenizerState,
    pub(crate) current_token: Option<Token>,
    pub(crate) current_attribute_name: String,
    pub(crate) current_attribute_value: String,
    pub(crate) appropriate_end_tag: String,
    tokens: Vec<Token>,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Tokenizer {
            input: input.chars().collect(),
            pos: 0,
            state: TokenizerState::Data,
            current_token: None,
            current_attribute_name: String::new(),
            current_attribute_value: String::new(),
            appropriate_end_tag: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Re-enters the main loop with the read cursor moved back by one, so the
    /// character just consumed is read again under the new state.
    pub(crate) fn reconsume(&mut self) {
        self.pos -= 1;
    }

    pub(crate) fn emit(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Drives the state machine to exhaustion and returns the complete,
    /// ordered token sequence, including a trailing `EndOfInput`.
    ///
    /// Single-shot: intended to be called once per [`Tokenizer`] instance.
    pub fn tokenize(mut self) -> Vec<Token> {
        while self.pos < self.input.len() {
            let ch = self.input[self.pos];
            self.pos += 1;

            match self.state {
                TokenizerState::Data => handle_data_state(&mut self, ch),
                TokenizerState::TagOpen => handle_tag_open_state(&mut self, ch),
                TokenizerState::EndTagOpen => handle_end_tag_open_state(&mut self, ch),
                TokenizerState::TagName => handle_tag_name_state(&mut self, ch),
                TokenizerState::SelfClosingStartTag => {
                    handle_self_closing_start_tag_state(&mut self, ch)
                }
                TokenizerState::BeforeAttributeName => {
                    handle_before_attribute_name_state(&mut self, ch)
                }
                TokenizerState::AttributeName => handle_attribute_name_state(&mut self, ch),
                TokenizerState::AfterAttributeName => {
                    handle_after_attribute_name_state(&mut self, ch)
                }
                TokenizerState::BeforeAttributeValue => {
                    handle_before_attribute_value_state(&mut self, ch)
                }
                TokenizerState::AttributeValueDoubleQuoted => {
                    handle_attribute_value_double_quoted_state(&mut self, ch)
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    handle_attribute_value_single_quoted_state(&mut self, ch)
                }
                TokenizerState::AttributeValueUnquoted => {
                    handle_attribute_value_unquoted_state(&mut self, ch)
                }
                TokenizerState::AfterAttributeValueQuoted
                | TokenizerState::AfterAttributeValueUnquoted => {
                    handle_after_attribute_value_state(&mut self, ch)
                }
                TokenizerState::XmlDeclaration => handle_xml_declaration_state(&mut self, ch),
                TokenizerState::DoctypeDeclaration => {
                    handle_doctype_declaration_state(&mut self, ch)
                }
                TokenizerState::RawText => handle_raw_text_state(&mut self),
            }
        }

        trace!(tokens = self.tokens.len(), "tokenization complete");
        self.tokens.push(Token::end_of_input());
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::token::TokenKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(input).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_is_just_end_of_input() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn plain_text_is_one_character_token_per_char() {
        let tokens = Tokenizer::new("ab").tokenize();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].data, "a");
        assert_eq!(tokens[1].data, "b");
        assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn start_and_end_tag_with_no_attributes() {
        let tokens = Tokenizer::new("<p></p>").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::StartTag);
        assert_eq!(tokens[0].data, "p");
        assert_eq!(tokens[1].kind, TokenKind::EndTag);
        assert_eq!(tokens[1].data, "p");
    }

    #[test]
    fn quoted_and_unquoted_attributes() {
        let tokens = Tokenizer::new("<a href=\"x\" target='y' disabled>").tokenize();
        let tag = &tokens[0];
        assert_eq!(tag.kind, TokenKind::StartTag);
        assert_eq!(tag.attributes.get("href"), Some(&"x".to_string()));
        assert_eq!(tag.attributes.get("target"), Some(&"y".to_string()));
        assert_eq!(tag.attributes.get("disabled"), Some(&String::new()));
    }

    #[test]
    fn self_closing_tag_is_flagged() {
        let tokens = Tokenizer::new("<br/>").tokenize();
        assert!(tokens[0].self_closing);
    }

    #[test]
    fn script_content_becomes_one_raw_text_character_token() {
        let tokens = Tokenizer::new("<script>a < b</script>").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::StartTag);
        assert_eq!(tokens[1].kind, TokenKind::Character);
        assert_eq!(tokens[1].data, "a < b");
        assert_eq!(tokens[2].kind, TokenKind::EndTag);
    }

    #[test]
    fn duplicate_attribute_name_keeps_last_value() {
        let tokens = Tokenizer::new("<p id=\"first\" id=\"second\">").tokenize();
        assert_eq!(tokens[0].attributes.get("id"), Some(&"second".to_string()));
    }

    #[test]
    fn malformed_tag_open_recovers_as_text() {
        let tokens = Tokenizer::new("< 1").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Character);
        assert_eq!(tokens[0].data, "<");
    }
}

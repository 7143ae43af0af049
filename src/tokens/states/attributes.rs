use crate::tokens::state::TokenizerState;
use crate::tokens::tokenizer::Tokenizer;

/// Commits `current_attribute_name`/`current_attribute_value` into the
/// current token's attribute map, then clears both. A later duplicate name
/// overwrites the earlier value, matching the map's insert semantics.
///
/// Called on every path that leaves attribute parsing; skipping it on any
/// one of them would leak the attribute into whatever comes next.
fn commit_attribute(tokenizer: &mut Tokenizer) {
    if !tokenizer.current_attribute_name.is_empty() {
        if let Some(token) = tokenizer.current_token.as_mut() {
            let name = std::mem::take(&mut tokenizer.current_attribute_name);
            let value = std::mem::take(&mut tokenizer.current_attribute_value);
            token.attributes.insert(name, value);
        }
    }
    tokenizer.current_attribute_name.clear();
    tokenizer.current_attribute_value.clear();
}

/// Handles the state between attributes, before a name has started.
pub fn handle_before_attribute_name_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch.is_whitespace() {
        return;
    }
    if ch == '/' || ch == '>' {
        tokenizer.state = TokenizerState::AfterAttributeName;
        tokenizer.reconsume();
        return;
    }
    tokenizer.current_attribute_name.clear();
    tokenizer.current_attribute_value.clear();
    tokenizer.state = TokenizerState::AttributeName;
    tokenizer.reconsume();
}

/// Handles the attribute name itself.
pub fn handle_attribute_name_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch.is_whitespace() || ch == '/' || ch == '>' {
        tokenizer.state = TokenizerState::AfterAttributeName;
        tokenizer.reconsume();
    } else if ch == '=' {
        tokenizer.state = TokenizerState::BeforeAttributeValue;
    } else {
        tokenizer.current_attribute_name.push(ch);
    }
}

/// Handles the state right after an attribute name, before deciding whether
/// it has a value.
pub fn handle_after_attribute_name_state(tokenizer: &mut Tokenizer, ch: char) {
    match ch {
        ch if ch.is_whitespace() => {}
        '/' => tokenizer.state = TokenizerState::SelfClosingStartTag,
        '=' => tokenizer.state = TokenizerState::BeforeAttributeValue,
        '>' => {
            commit_attribute(tokenizer);
            if let Some(token) = tokenizer.current_token.take() {
                tokenizer.emit(token);
            }
            tokenizer.state = TokenizerState::Data;
        }
        _ => {
            commit_attribute(tokenizer);
            tokenizer.state = TokenizerState::AttributeName;
            tokenizer.reconsume();
        }
    }
}

/// Handles the state after `=`, before the value's opening quote (if any).
pub fn handle_before_attribute_value_state(tokenizer: &mut Tokenizer, ch: char) {
    match ch {
        ch if ch.is_whitespace() => {}
        '"' => tokenizer.state = TokenizerState::AttributeValueDoubleQuoted,
        '\'' => tokenizer.state = TokenizerState::AttributeValueSingleQuoted,
        '>' => {
            commit_attribute(tokenizer);
            if let Some(token) = tokenizer.current_token.take() {
                tokenizer.emit(token);
            }
            tokenizer.state = TokenizerState::Data;
        }
        _ => {
            tokenizer.state = TokenizerState::AttributeValueUnquoted;
            tokenizer.reconsume();
        }
    }
}

/// Handles a double-quoted attribute value.
pub fn handle_attribute_value_double_quoted_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch == '"' {
        commit_attribute(tokenizer);
        tokenizer.state = TokenizerState::AfterAttributeValueQuoted;
    } else {
        tokenizer.current_attribute_value.push(ch);
    }
}

/// Handles a single-quoted attribute value; symmetric with the double-quoted
/// state.
pub fn handle_attribute_value_single_quoted_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch == '\'' {
        commit_attribute(tokenizer);
        tokenizer.state = TokenizerState::AfterAttributeValueQuoted;
    } else {
        tokenizer.current_attribute_value.push(ch);
    }
}

/// Handles an unquoted attribute value. Everything but whitespace and `>` is
/// taken literally, including characters that would be illegal here in a
/// stricter grammar.
pub fn handle_attribute_value_unquoted_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch.is_whitespace() {
        commit_attribute(tokenizer);
        tokenizer.state = TokenizerState::AfterAttributeValueUnquoted;
    } else if ch == '>' {
        commit_attribute(tokenizer);
        if let Some(token) = tokenizer.current_token.take() {
            tokenizer.emit(token);
        }
        tokenizer.state = TokenizerState::Data;
    } else {
        tokenizer.current_attribute_value.push(ch);
    }
}

/// Handles the state after a quoted or unquoted attribute value. The two
/// source states (`AfterAttributeValueQuoted` / `AfterAttributeValueUnquoted`)
/// have identical transitions, so the tokenizer's main dispatch routes both
/// here.
pub fn handle_after_attribute_value_state(tokenizer: &mut Tokenizer, ch: char) {
    match ch {
        ch if ch.is_whitespace() => tokenizer.state = TokenizerState::BeforeAttributeName,
        '/' => tokenizer.state = TokenizerState::SelfClosingStartTag,
        '>' => {
            if let Some(token) = tokenizer.current_token.take() {
                tokenizer.emit(token);
            }
            tokenizer.state = TokenizerState::Data;
        }
        _ => {
            tokenizer.state = TokenizerState::BeforeAttributeName;
            tokenizer.reconsume();
        }
    }
}

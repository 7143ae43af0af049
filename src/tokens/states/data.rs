use crate::tokens::state::TokenizerState;
use crate::tokens::token::Token;
use crate::tokens::tokenizer::Tokenizer;

/// Handles the default `Data` state.
///
/// Every character other than `<` is emitted immediately as its own
/// single-character `Character` token; adjacent runs of text therefore show
/// up as adjacent tokens and are left for the tree constructor (or a
/// consumer) to concatenate.
pub fn handle_data_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch == '<' {
        tokenizer.state = TokenizerState::TagOpen;
    } else {
        tokenizer.emit(Token::character(ch));
    }
}

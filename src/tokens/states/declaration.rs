use crate::tokens::state::TokenizerState;
use crate::tokens::token::{Token, TokenKind};
use crate::tokens::tokenizer::Tokenizer;

/// Handles an XML declaration (`<?...?>`), begun at `<?`.
///
/// The payload is opaque and never inspected; everything up to and including
/// `>` is consumed and discarded, and a token carrying whatever was seen so
/// far is emitted so the tree constructor can recognize and ignore it.
pub fn handle_xml_declaration_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch == '>' {
        let token = tokenizer
            .current_token
            .take()
            .unwrap_or_else(|| Token::new(TokenKind::XmlDeclaration));
        tokenizer.emit(token);
        tokenizer.state = TokenizerState::Data;
    } else {
        let token = tokenizer
            .current_token
            .get_or_insert_with(|| Token::new(TokenKind::XmlDeclaration));
        token.data.push(ch);
    }
}

/// Handles a DOCTYPE declaration (`<!...>`), begun at `<!`.
///
/// Same opaque-payload treatment as [`handle_xml_declaration_state`]; the
/// tree constructor never looks past the token's kind.
pub fn handle_doctype_declaration_state(tokenizer: &mut Tokenizer, ch: char) {
    if ch == '>' {
        let token = tokenizer
            .current_token
            .take()
            .unwrap_or_else(|| Token::new(TokenKind::Doctype));
        tokenizer.emit(token);
        tokenizer.state = TokenizerState::Data;
    } else {
        let token = tokenizer
            .current_token
            .get_or_insert_with(|| Token::new(TokenKind::Doctype));
        token.data.push(ch);
    }
}

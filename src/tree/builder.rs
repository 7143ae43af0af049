use std::rc::Rc;

use tracing::warn;

use crate::dom::{Document, Node, NodeRef};
use crate::error::ParseError;
use crate::tokens::token::{Token, TokenKind};
use crate::tree::insertion_mode::InsertionMode;

/// Consumes an ordered token sequence and grows a [`Document`].
///
/// Holds the two pieces of mutable state the insertion modes share: the
/// stack of open elements (bottom is always the document node) and the
/// insertion-mode stack (never empty until [`TreeBuilder::build`] returns).
pub struct TreeBuilder {
    document: NodeRef,
    open_elements: Vec<NodeRef>,
    insertion_modes: Vec<InsertionMode>,
    strict_mode: bool,
}

impl TreeBuilder {
    pub fn new(strict_mode: bool) -> Self {
        let document = Node::document();
        TreeBuilder {
            open_elements: vec![Rc::clone(&document)],
            document,
            insertion_modes: vec![InsertionMode::Initial],
            strict_mode,
        }
    }

    /// Drives every token through the insertion-mode dispatch and returns the
    /// finished document.
    ///
    /// Stops at the first `EndOfInput` token (or at the end of `tokens`,
    /// whichever comes first) without emitting a node for it; any elements
    /// still open at that point are left in place, per the final-flush rule.
    pub fn build(mut self, tokens: Vec<Token>) -> Result<Document, ParseError> {
        for token in tokens {
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            self.process_token(token)?;
        }
        Ok(Document::new(self.document))
    }

    /// Runs one token through the current insertion mode, re-dispatching
    /// under the new mode as long as the handler reports the token was not
    /// consumed (synthesizing an implicit container always falls into this
    /// case).
    fn process_token(&mut self, token: Token) -> Result<(), ParseError> {
        loop {
            let consumed = match self.current_mode() {
                InsertionMode::Initial => self.handle_initial(&token)?,
                InsertionMode::BeforeHtml => self.handle_before_html(&token)?,
                InsertionMode::BeforeHead => self.handle_before_head(&token)?,
                InsertionMode::InHead => self.handle_in_head(&token)?,
                InsertionMode::AfterHead => self.handle_after_head(&token)?,
                InsertionMode::InBody => self.handle_in_body(&token)?,
                InsertionMode::Text => self.handle_text(&token)?,
                InsertionMode::RawText => self.handle_raw_text(&token)?,
            };
            if consumed {
                return Ok(());
            }
        }
    }

    fn current_mode(&self) -> InsertionMode {
        *self
            .insertion_modes
            .last()
            .expect("insertion_modes is non-empty until build() returns")
    }

    fn replace_mode(&mut self, mode: InsertionMode) {
        *self
            .insertion_modes
            .last_mut()
            .expect("insertion_modes is non-empty until build() returns") = mode;
    }

    fn push_mode(&mut self, mode: InsertionMode) {
        self.insertion_modes.push(mode);
    }

    fn pop_mode(&mut self) {
        self.insertion_modes.pop();
    }

    fn current_node(&self) -> NodeRef {
        Rc::clone(
            self.open_elements
                .last()
                .expect("open_elements[0] is always the Document node while parsing"),
        )
    }

    fn report_error(&self, err: ParseError) -> Result<(), ParseError> {
        if self.strict_mode {
            Err(err)
        } else {
            warn!(error = %err, "ignoring structural error in lenient mode");
            Ok(())
        }
    }

    // -- shared operations (spec §4.2) --------------------------------

    fn insert_element(&mut self, tok: &Token) -> NodeRef {
        let tag = tok.data.to_ascii_lowercase();
        let node = Node::element(tag, tok.attributes.clone());
        self.current_node().borrow_mut().push_child(Rc::clone(&node));
        if !tok.self_closing {
            self.open_elements.push(Rc::clone(&node));
        }
        node
    }

    /// `link`/`meta`/`base`: inserted like any element, then popped
    /// immediately since they never have children.
    fn insert_void_element(&mut self, tok: &Token) {
        self.insert_element(tok);
        if !tok.self_closing {
            self.open_elements.pop();
        }
    }

    fn insert_character(&mut self, tok: &Token) {
        let node = Node::text(tok.data.clone());
        self.current_node().borrow_mut().push_child(node);
    }

    fn close_element(&mut self, tok: &Token) -> Result<(), ParseError> {
        let target = tok.data.to_ascii_lowercase();
        let found = self.open_elements.iter().rposition(|node| match &*node.borrow() {
            Node::Element { tag, .. } => *tag == target,
            _ => false,
        });
        match found {
            Some(index) => {
                self.open_elements.truncate(index);
                Ok(())
            }
            None => self.report_error(ParseError::UnmatchedEndTag(tok.data.clone())),
        }
    }

    // -- insertion modes (spec §4.2) -----------------------------------

    fn handle_initial(&mut self, token: &Token) -> Result<bool, ParseError> {
        match token.kind {
            TokenKind::XmlDeclaration => Ok(true),
            TokenKind::Doctype => {
                self.replace_mode(InsertionMode::BeforeHtml);
                Ok(true)
            }
            _ => {
                self.replace_mode(InsertionMode::BeforeHtml);
                Ok(false)
            }
        }
    }

    fn handle_before_html(&mut self, token: &Token) -> Result<bool, ParseError> {
        if is_whitespace_character(token) {
            return Ok(true);
        }
        if token.kind == TokenKind::StartTag && token.data.eq_ignore_ascii_case("html") {
            self.insert_element(token);
            self.replace_mode(InsertionMode::BeforeHead);
            return Ok(true);
        }
        self.insert_element(&synthetic_start_tag("html"));
        self.replace_mode(InsertionMode::BeforeHead);
        Ok(false)
    }

    fn handle_before_head(&mut self, token: &Token) -> Result<bool, ParseError> {
        if is_whitespace_character(token) {
            return Ok(true);
        }
        if token.kind == TokenKind::StartTag && token.data.eq_ignore_ascii_case("head") {
            self.insert_element(token);
            self.replace_mode(InsertionMode::InHead);
            return Ok(true);
        }
        self.insert_element(&synthetic_start_tag("head"));
        self.replace_mode(InsertionMode::InHead);
        Ok(false)
    }

    fn handle_in_head(&mut self, token: &Token) -> Result<bool, ParseError> {
        if is_whitespace_character(token) {
            return Ok(true);
        }
        match token.kind {
            TokenKind::StartTag => match token.data.to_ascii_lowercase().as_str() {
                "title" => {
                    self.insert_element(token);
                    self.push_mode(InsertionMode::Text);
                    Ok(true)
                }
                "style" | "script" => {
                    self.insert_element(token);
                    self.push_mode(InsertionMode::RawText);
                    Ok(true)
                }
                "link" | "meta" | "base" => {
                    self.insert_void_element(token);
                    Ok(true)
                }
                "head" => {
                    self.report_error(ParseError::DuplicateHead)?;
                    Ok(true)
                }
                _ => {
                    self.open_elements.pop();
                    self.replace_mode(InsertionMode::AfterHead);
                    Ok(false)
                }
            },
            TokenKind::EndTag => match token.data.to_ascii_lowercase().as_str() {
                "head" => {
                    self.open_elements.pop();
                    self.replace_mode(InsertionMode::AfterHead);
                    Ok(true)
                }
                "body" | "html" | "br" => {
                    self.open_elements.pop();
                    self.replace_mode(InsertionMode::AfterHead);
                    Ok(false)
                }
                other => {
                    self.report_error(ParseError::UnrecognizedEndTagInHead(other.to_string()))?;
                    Ok(true)
                }
            },
            TokenKind::Comment => Ok(true),
            _ => {
                self.open_elements.pop();
                self.replace_mode(InsertionMode::AfterHead);
                Ok(false)
            }
        }
    }

    fn handle_after_head(&mut self, token: &Token) -> Result<bool, ParseError> {
        if is_whitespace_character(token) {
            return Ok(true);
        }
        if token.kind == TokenKind::StartTag && token.data.eq_ignore_ascii_case("body") {
            self.insert_element(token);
            self.replace_mode(InsertionMode::InBody);
            return Ok(true);
        }
        self.insert_element(&synthetic_start_tag("body"));
        self.replace_mode(InsertionMode::InBody);
        Ok(false)
    }

    fn handle_in_body(&mut self, token: &Token) -> Result<bool, ParseError> {
        match token.kind {
            TokenKind::Character => self.insert_character(token),
            TokenKind::StartTag => {
                self.insert_element(token);
            }
            TokenKind::EndTag => self.close_element(token)?,
            _ => {}
        }
        Ok(true)
    }

    /// Pushed by `<title>`.
    fn handle_text(&mut self, token: &Token) -> Result<bool, ParseError> {
        if token.kind == TokenKind::EndTag && token.data.eq_ignore_ascii_case("title") {
            self.open_elements.pop();
            self.pop_mode();
        } else {
            self.insert_character(token);
        }
        Ok(true)
    }

    /// Pushed by `<script>`/`<style>`.
    fn handle_raw_text(&mut self, token: &Token) -> Result<bool, ParseError> {
        if token.kind == TokenKind::EndTag {
            let end_tag = token.data.to_ascii_lowercase();
            let closes_current = matches!(
                &*self.current_node().borrow(),
                Node::Element { tag, .. } if *tag == end_tag
            );
            if closes_current {
                self.open_elements.pop();
                self.pop_mode();
                return Ok(true);
            }
        }
        self.insert_character(token);
        Ok(true)
    }
}

/// Whitespace detection for `BeforeHtml`/`BeforeHead`/`InHead`/`AfterHead`.
///
/// Tests only the first character, which is equivalent to testing the whole
/// token today since [`crate::tokens::states::data`] emits one character per
/// `Character` token. If Character tokens are ever coalesced this no longer
/// holds — see the open question this is grounded on.
fn is_whitespace_character(token: &Token) -> bool {
    token.kind == TokenKind::Character
        && token.data.chars().next().is_some_and(|c| c.is_whitespace())
}

fn synthetic_start_tag(name: &str) -> Token {
    let mut token = Token::new(TokenKind::StartTag);
    token.data.push_str(name);
    token
}

//! A lenient HTML-like markup parser that builds an in-memory document tree.
//!
//! Targets consumers who need to inspect markup — query by tag name, read
//! text content, read attributes — rather than render it. Parsing a
//! malformed or partial document (missing `<html>`, missing `<head>`, a bare
//! fragment) always succeeds in the default lenient mode: the implicit
//! containers are synthesized so the result's root is always a
//! [`Document`](dom::Document) containing an `html` element.
//!
//! Not implemented by design: character-reference (entity) decoding,
//! scripting, encoding sniffing, `<template>`, foreign-content (SVG/MathML)
//! integration, the adoption-agency algorithm, and source round-tripping.
//!
//! ```
//! use html_parser::Parser;
//!
//! let document = Parser::new().parse("<html><body><p>Hello</p></body></html>").unwrap();
//! let paragraphs = document.get_elements_by_tag_name("p");
//! assert_eq!(paragraphs.len(), 1);
//! assert_eq!(paragraphs[0].borrow().get_text_content(), "Hello");
//! ```

pub mod dom;
pub mod error;
pub mod parser;
pub mod tokens;
pub mod tree;

pub use dom::{Document, Node, NodeKind, NodeRef};
pub use error::ParseError;
pub use parser::{Parser, ParserBuilder, ParserOptions};

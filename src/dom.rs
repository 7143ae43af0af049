//! The document tree produced by a parse: [`Document`], [`Node`], and the
//! read-only query surface over them.
//!
//! Nodes are owned downward only (`Rc<RefCell<_>>` per child list); no parent
//! links are stored, so there is nothing to invalidate when a subtree moves.
//! Anyone needing an ancestor should re-traverse from the root.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a single node in the tree.
///
/// Cloning a `NodeRef` clones the `Rc`, not the node; all clones observe the
/// same underlying data.
pub type NodeRef = Rc<RefCell<Node>>;

/// The kind of a [`Node`], for callers doing node-kind discrimination without
/// matching on the full enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
}

/// A node in the document tree.
#[derive(Debug)]
pub enum Node {
    /// The unique tree root. Never has a tag, attributes, or text.
    Document { children: Vec<NodeRef> },
    /// A tag name (stored lowercase) with its attributes and children.
    Element {
        tag: String,
        attributes: HashMap<String, String>,
        children: Vec<NodeRef>,
    },
    /// A leaf carrying a run of character data.
    Text { data: String },
}

impl Node {
    pub(crate) fn document() -> NodeRef {
        Rc::new(RefCell::new(Node::Document {
            children: Vec::new(),
        }))
    }

    pub(crate) fn element(tag: String, attributes: HashMap<String, String>) -> NodeRef {
        Rc::new(RefCell::new(Node::Element {
            tag,
            attributes,
            children: Vec::new(),
        }))
    }

    pub(crate) fn text(data: String) -> NodeRef {
        Rc::new(RefCell::new(Node::Text { data }))
    }

    pub(crate) fn push_child(&mut self, child: NodeRef) {
        match self {
            Node::Document { children } | Node::Element { children, .. } => children.push(child),
            Node::Text { .. } => {
                debug_assert!(false, "a Text node never gains children");
            }
        }
    }

    /// Discriminates this node's variant without matching the full enum.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document { .. } => NodeKind::Document,
            Node::Element { .. } => NodeKind::Element,
            Node::Text { .. } => NodeKind::Text,
        }
    }

    /// This node's children, in document order. Always empty for `Text`.
    pub fn children(&self) -> &[NodeRef] {
        match self {
            Node::Document { children } | Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// The element's tag name, or an empty string for non-elements.
    pub fn get_tag(&self) -> &str {
        match self {
            Node::Element { tag, .. } => tag,
            _ => "",
        }
    }

    /// The named attribute's value, or an empty string if absent or if this
    /// node is not an element.
    pub fn get_attribute(&self, name: &str) -> String {
        match self {
            Node::Element { attributes, .. } => attributes.get(name).cloned().unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// The concatenation, in document order, of every `Text` payload in the
    /// subtree rooted at this node (this node included).
    pub fn get_text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Node::Text { data } = self {
            out.push_str(data);
        }
        for child in self.children() {
            child.borrow().collect_text(out);
        }
    }
}

/// The tree produced by a completed parse.
///
/// Read-only by convention: nothing in this crate mutates a `Document` once
/// [`crate::Parser::parse`] returns it.
#[derive(Debug)]
pub struct Document {
    pub(crate) root: NodeRef,
}

impl Document {
    pub(crate) fn new(root: NodeRef) -> Self {
        Document { root }
    }

    /// The document node itself, the root of the tree.
    pub fn root(&self) -> NodeRef {
        Rc::clone(&self.root)
    }

    /// All `Element` nodes in the tree whose tag equals `name`, in pre-order
    /// (document) order.
    ///
    /// `name` is matched case-sensitively against the stored lowercase tag;
    /// callers pass a lowercase name.
    pub fn get_elements_by_tag_name(&self, name: &str) -> Vec<NodeRef> {
        let mut out = Vec::new();
        collect_matching(&self.root, name, &mut out);
        out
    }
}

fn collect_matching(node: &NodeRef, name: &str, out: &mut Vec<NodeRef>) {
    let children: Vec<NodeRef> = {
        let borrowed = node.borrow();
        if let Node::Element { tag, .. } = &*borrowed {
            if tag == name {
                out.push(Rc::clone(node));
            }
        }
        borrowed.children().to_vec()
    };
    for child in &children {
        collect_matching(child, name, out);
    }
}

// crates/nimbus-rs-wire/src/document.rs

//! The hierarchical, tag-addressed tree that every wire payload maps onto.
//!
//! One [`Document`] holds one request or response payload. Readers resolve
//! fields through slash-separated paths ([`Element::find`]); repeated sibling
//! tags represent repeating groups (leases, disks, PCI devices, ...).

/// One named node of a wire document: a tag, optional text content, and an
/// ordered sequence of named children. Sibling tags may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Creates a childless element with empty text.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Returns the first direct child with the given tag.
    /// Matching is case-sensitive.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Mutable variant of [`Element::child`].
    pub fn child_mut(&mut self, tag: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.tag == tag)
    }

    /// Iterates over all direct children with the given tag, in document
    /// order. Used to enumerate repeating groups.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Resolves a slash-separated path relative to this element, descending
    /// into the *first* matching child at each level.
    ///
    /// Paths are case-sensitive and carry no wildcard or predicate syntax.
    /// Returns `None` as soon as any level fails to match.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let mut node = self;
        for tag in path.split('/') {
            node = node.child(tag)?;
        }
        Some(node)
    }
}

/// An ordered tree representing one wire payload.
///
/// The root tag is established at construction (from the parsed payload, or
/// from [`Document::new`] on the builder side) and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Creates an empty outbound document rooted at `root_tag`.
    ///
    /// This is the sole construction entry point on the builder side;
    /// builders always start empty, there is no parse-then-mutate path.
    pub fn new(root_tag: impl Into<String>) -> Self {
        Document {
            root: Element::new(root_tag),
        }
    }

    /// Wraps a fully-built root element. Used by the parser.
    pub(crate) fn from_root(root: Element) -> Self {
        Document { root }
    }

    /// The root element, for read-only traversal.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub(crate) fn into_root(self) -> Element {
        self.root
    }

    /// The top-level tag, e.g. a resource-type name such as `VM` or `HOST`.
    pub fn root_tag(&self) -> &str {
        &self.root.tag
    }
}

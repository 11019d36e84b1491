// crates/nimbus-rs-wire/src/builder.rs

//! Outbound document construction.
//!
//! Builders always start from [`Document::new`] with an empty root and are
//! populated through [`Document::set`] and [`Document::merge`]. The caller
//! owns the document exclusively until it is handed off (merged or
//! rendered); nothing here is safe for concurrent mutation.

use crate::document::{Document, Element};
use crate::error::WireError;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

impl Document {
    /// Idempotent upsert of a direct child leaf of the root.
    ///
    /// If a direct child named `tag` already exists its text is overwritten
    /// (first-seen occurrence), otherwise a new leaf is appended. Lookup is
    /// by direct-child tag only, case-sensitive; multi-level paths are a
    /// reader concept.
    pub fn set(&mut self, tag: &str, text: impl Into<String>) {
        let root = self.root_mut();
        match root.child_mut(tag) {
            Some(child) => child.text = text.into(),
            None => {
                let mut leaf = Element::new(tag);
                leaf.text = text.into();
                root.children.push(leaf);
            }
        }
    }

    /// Appends `child`'s root node, with its entire subtree, as an
    /// additional child of this document's root.
    ///
    /// No tag-collision detection: merging N disk documents is how a
    /// repeating group is built, and merging two conflicting
    /// single-occurrence kinds is the caller's mistake to avoid. The child
    /// is consumed; there is no shared mutation after composition.
    pub fn merge(&mut self, child: Document) {
        self.root_mut().children.push(child.into_root());
    }

    /// Serializes the document to the textual form a transport transmits.
    ///
    /// # Errors
    /// [`WireError::EmptyDocument`] if the document has no root tag, which
    /// is unreachable through [`Document::new`].
    pub fn render(&self) -> Result<String, WireError> {
        if self.root_tag().is_empty() {
            return Err(WireError::EmptyDocument);
        }

        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self.root())?;
        let bytes = writer.into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) -> Result<(), WireError> {
    if el.text.is_empty() && el.children.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(el.tag.as_str())))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(el.tag.as_str())))?;
    if !el.text.is_empty() {
        // BytesText::new escapes reserved characters on write.
        writer.write_event(Event::Text(BytesText::new(&el.text)))?;
    }
    for child in &el.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(el.tag.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::error::WireError;

    #[test]
    fn test_set_appends_then_overwrites() {
        let mut doc = Document::new("CLUSTER");
        doc.set("NAME", "alpha");
        doc.set("NAME", "beta");

        assert_eq!(doc.root().children_named("NAME").count(), 1);
        assert_eq!(doc.root().find("NAME").unwrap().text, "beta");
    }

    #[test]
    fn test_merge_preserves_call_order() {
        let mut vm = Document::new("VM");
        for n in 0..3 {
            let mut disk = Document::new("DISK");
            disk.set("DISK_ID", n.to_string());
            vm.merge(disk);
        }

        let ids: Vec<&str> = vm
            .root()
            .children_named("DISK")
            .map(|d| d.find("DISK_ID").unwrap().text.as_str())
            .collect();
        assert_eq!(ids, ["0", "1", "2"]);
    }

    #[test]
    fn test_render_leaf_and_subtree() {
        let mut vm = Document::new("VM");
        vm.set("NAME", "web-01");
        let mut disk = Document::new("DISK");
        disk.set("SIZE", "4096");
        vm.merge(disk);

        let xml = vm.render().unwrap();
        assert_eq!(
            xml,
            "<VM><NAME>web-01</NAME><DISK><SIZE>4096</SIZE></DISK></VM>"
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let mut doc = Document::new("VM");
        doc.set("NAME", "a <&> b");
        let xml = doc.render().unwrap();
        assert!(xml.contains("a &lt;&amp;&gt; b"), "got {}", xml);
    }

    #[test]
    fn test_render_empty_root_is_self_closing() {
        let doc = Document::new("TEMPLATE");
        assert_eq!(doc.render().unwrap(), "<TEMPLATE/>");
    }

    #[test]
    fn test_render_degenerate_document() {
        let doc = Document::new("");
        assert!(matches!(doc.render(), Err(WireError::EmptyDocument)));
    }
}

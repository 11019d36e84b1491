// crates/nimbus-rs-wire/src/parser.rs

use crate::document::{Document, Element};
use crate::error::WireError;
use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};
use quick_xml::name::QName;

/// Parses one wire payload into a [`Document`].
///
/// The wire vocabulary is element-only: tags and text content carry all the
/// data, so attributes are ignored. String values arriving wrapped in CDATA
/// are unwrapped, entity references are resolved, and surrounding
/// whitespace is trimmed once an element closes.
///
/// # Errors
/// Returns [`WireError::XmlParsing`] for malformed XML,
/// [`WireError::UnknownEntity`] for an entity reference outside the five
/// predefined ones, and [`WireError::EmptyDocument`] when the input
/// contains no element at all.
pub fn parse_document(xml: &str) -> Result<Document, WireError> {
    let mut reader = Reader::from_str(xml);

    // Open elements, innermost last. A finished element is attached to its
    // parent (or becomes the root) when its end tag arrives.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(Element::new(tag_name(&e.name())));
            }
            Event::Empty(e) => {
                attach(Element::new(tag_name(&e.name())), &mut stack, &mut root);
            }
            Event::End(_) => {
                // The reader enforces tag balance, so the stack is non-empty.
                if let Some(el) = stack.pop() {
                    attach(el, &mut stack, &mut root);
                }
            }
            Event::Text(t) => {
                // xml_content decodes the text but leaves references to the
                // GeneralRef events below.
                let text = t.xml_content().map_err(quick_xml::Error::from)?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text);
                }
            }
            Event::GeneralRef(r) => {
                // The reader reports each `&...;` reference as its own
                // event, splitting the surrounding text in two; the
                // resolved character belongs between the halves.
                let c = resolve_reference(r)?;
                if let Some(open) = stack.last_mut() {
                    open.text.push(c);
                }
            }
            Event::CData(c) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::Decl(_) | Event::Comment(_) | Event::DocType(_) => {}
            Event::PI(_) => {
                log::debug!("skipping processing instruction in wire payload");
            }
            Event::Eof => {
                // quick-xml reports Eof for truncated input; surface the
                // innermost tag still open.
                if let Some(open) = stack.last() {
                    return Err(WireError::UnclosedTag {
                        tag: open.tag.clone(),
                    });
                }
                break;
            }
        }
    }

    root.map(Document::from_root).ok_or(WireError::EmptyDocument)
}

fn tag_name(name: &QName) -> String {
    String::from_utf8_lossy(name.as_ref()).into_owned()
}

/// Resolves a character reference (`&#65;`, `&#x41;`) or one of the five
/// predefined entities. Anything else is not part of the wire format.
fn resolve_reference(r: BytesRef) -> Result<char, WireError> {
    if let Some(c) = r.resolve_char_ref().map_err(quick_xml::Error::from)? {
        return Ok(c);
    }
    let name = r.into_inner();
    match &*name {
        b"lt" => Ok('<'),
        b"gt" => Ok('>'),
        b"amp" => Ok('&'),
        b"apos" => Ok('\''),
        b"quot" => Ok('"'),
        other => Err(WireError::UnknownEntity {
            name: String::from_utf8_lossy(other).into_owned(),
        }),
    }
}

fn attach(mut el: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    // Indentation around child elements accumulates as parent text; drop it
    // here rather than per text fragment, so text split by entity
    // references keeps its interior spacing.
    let trimmed = el.text.trim();
    if trimmed.len() != el.text.len() {
        el.text = trimmed.to_owned();
    }

    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None => {
            if root.is_some() {
                log::warn!("ignoring extra top-level element <{}>", el.tag);
            } else {
                *root = Some(el);
            }
        }
    }
}

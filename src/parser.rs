//! XML loading for SVG drawings
//!
//! The loader does not interpret SVG semantics. It flattens the document into
//! a list of [`Element`]s in document order, each carrying its local tag name
//! and decoded attribute values, and leaves geometry to the converter.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::BufRead;

/// Default buffer capacity for XML parsing (4KB)
const XML_BUFFER_CAPACITY: usize = 4096;

/// An element of the drawing with its attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name with any namespace prefix removed
    pub tag: String,
    /// Attribute values keyed by attribute name, with character and entity
    /// references resolved
    pub attributes: HashMap<String, String>,
}

impl Element {
    /// Create an element without attributes
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add an attribute, replacing any previous value
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Every element of a drawing, in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    /// Flattened element list; the root element comes first
    pub elements: Vec<Element>,
}

/// Extract the local name from a potentially prefixed XML name
///
/// - `"svg:rect"` returns `"rect"`
/// - `"path"` returns `"path"`
pub(crate) fn get_local_name(name_str: &str) -> &str {
    match name_str.rfind(':') {
        Some(pos) => &name_str[pos + 1..],
        None => name_str,
    }
}

fn parse_element(e: &BytesStart, decoder: Decoder) -> Result<Element> {
    let name = e.name();
    let name_str = std::str::from_utf8(name.as_ref())
        .map_err(|e| Error::MalformedDocument(e.to_string()))?;

    let mut element = Element::new(get_local_name(name_str));
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::MalformedDocument(e.to_string()))?;
        let value = attr.decode_and_unescape_value(decoder).map_err(|e| {
            Error::MalformedDocument(format!("attribute '{}' could not be decoded: {}", key, e))
        })?;
        element.attributes.insert(key.to_string(), value.into_owned());
    }
    Ok(element)
}

fn read_drawing<R: BufRead>(mut reader: Reader<R>) -> Result<Drawing> {
    reader.config_mut().trim_text(true);

    let mut drawing = Drawing::default();
    let mut buf = Vec::with_capacity(XML_BUFFER_CAPACITY);
    let mut depth: usize = 0;
    let mut root_closed = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if root_closed => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                return Err(Error::MalformedDocument(format!(
                    "element '<{}>' follows the root element",
                    name
                )));
            }
            Event::Start(ref e) => {
                drawing.elements.push(parse_element(e, reader.decoder())?);
                depth += 1;
            }
            Event::Empty(ref e) => {
                drawing.elements.push(parse_element(e, reader.decoder())?);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::End(_) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::MalformedDocument("closing tag without an open element".to_string())
                })?;
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if drawing.elements.is_empty() {
        return Err(Error::MalformedDocument(
            "document has no root element".to_string(),
        ));
    }
    if depth != 0 {
        return Err(Error::MalformedDocument(format!(
            "{} element(s) left unclosed at end of document",
            depth
        )));
    }

    Ok(drawing)
}

/// Parse a drawing from XML text
///
/// # Example
///
/// ```
/// use svg2mesh::parser::parse_drawing;
///
/// let drawing = parse_drawing(r#"<svg><rect width="10" height="5"/></svg>"#).unwrap();
/// assert_eq!(drawing.elements[1].tag, "rect");
/// assert_eq!(drawing.elements[1].attribute("width"), Some("10"));
/// ```
pub fn parse_drawing(xml: &str) -> Result<Drawing> {
    read_drawing(Reader::from_str(xml))
}

/// Parse a drawing from a buffered reader
pub fn parse_drawing_reader<R: BufRead>(reader: R) -> Result<Drawing> {
    read_drawing(Reader::from_reader(reader))
}

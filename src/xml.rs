//! A minimal XML element tree and its document form.
//!
//! Only what the tree file format needs is modelled: element names,
//! attributes and nested elements. Text, comments and processing
//! instructions are skipped when reading and never written.

use std::io::{BufRead, Write};

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::CodecError;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct XmlElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Write `root` as a UTF-8 document with an XML declaration.
pub fn write_document<W: Write>(writer: W, root: &XmlElement) -> Result<(), CodecError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<(), CodecError> {
    let start = BytesStart::new(element.tag.as_str()).with_attributes(
        element
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

/// Parse a document and return its root element.
pub fn read_document<R: BufRead>(input: R) -> Result<XmlElement, CodecError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => open.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml has already matched this end tag against its start.
                if let Some(element) = open.pop() {
                    attach(&mut open, &mut root, element)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(element) = open.pop() {
        return Err(CodecError::UnclosedElement { tag: element.tag });
    }

    root.ok_or(CodecError::EmptyDocument)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, CodecError> {
    let mut element = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), CodecError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }

    if root.is_some() {
        return Err(CodecError::MultipleRoots);
    }
    *root = Some(element);
    Ok(())
}

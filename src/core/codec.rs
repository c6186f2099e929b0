use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::CodecError;
use crate::models::Node;
use crate::xml::{self, XmlElement};

pub const DIRECTORY_TAG: &str = "directory";
pub const FILE_TAG: &str = "file";
pub const NAME_ATTRIBUTE: &str = "name";

/// Convert a tree into an element tree.
///
/// The root element is always tagged `directory`, whatever the root node is,
/// so files saved from a file root stay readable by older readers.
pub fn encode(node: &Node) -> XmlElement {
    let mut root = XmlElement::new(DIRECTORY_TAG).with_attribute(NAME_ATTRIBUTE, node.name());
    root.children = node.children().iter().map(encode_node).collect();
    root
}

fn encode_node(node: &Node) -> XmlElement {
    let tag = if node.is_dir() { DIRECTORY_TAG } else { FILE_TAG };
    let mut element = XmlElement::new(tag).with_attribute(NAME_ATTRIBUTE, node.name());
    element.children = node.children().iter().map(encode_node).collect();
    element
}

/// Convert an element tree back into a tree.
///
/// Only `directory` elements become directories. Any other tag is read as a
/// file and must not have child elements: such an element fails with
/// `UnexpectedChildren`, the one error besides `MissingAttribute`.
pub fn decode(element: &XmlElement) -> Result<Node, CodecError> {
    let name = element
        .attribute(NAME_ATTRIBUTE)
        .ok_or_else(|| CodecError::MissingAttribute {
            tag: element.tag.clone(),
        })?;

    if element.tag != DIRECTORY_TAG {
        if !element.children.is_empty() {
            return Err(CodecError::UnexpectedChildren {
                name: name.to_owned(),
            });
        }
        return Ok(Node::file(name));
    }

    let children = element
        .children
        .iter()
        .map(decode)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Node::directory(name, children))
}

/// Encode `node` and write it to `path` as an XML document.
pub fn save(path: &Path, node: &Node) -> Result<(), CodecError> {
    let mut writer = BufWriter::new(File::create(path)?);
    xml::write_document(&mut writer, &encode(node))?;
    writer.flush()?;
    info!(path = %path.display(), "saved tree");
    Ok(())
}

/// Read the XML document at `path` and decode it.
pub fn load(path: &Path) -> Result<Node, CodecError> {
    let reader = BufReader::new(File::open(path)?);
    let node = decode(&xml::read_document(reader)?)?;
    info!(path = %path.display(), "loaded tree");
    Ok(node)
}

use std::io::{self, Write};

use crate::models::Node;

const INDENT: &[u8] = b"  ";

/// Write one line per node, depth-first, two spaces of indent per level.
/// Directories are prefixed with `/`.
pub fn write_tree<W: Write>(writer: &mut W, node: &Node) -> io::Result<()> {
    write_tree_inner(writer, node, 0)
}

fn write_tree_inner<W: Write>(writer: &mut W, node: &Node, level: usize) -> io::Result<()> {
    for _ in 0..level {
        writer.write_all(INDENT)?;
    }

    if node.is_dir() {
        writer.write_all(b"/")?;
    }
    writer.write_all(node.name().as_bytes())?;
    writer.write_all(b"\n")?;

    for child in node.children() {
        write_tree_inner(writer, child, level + 1)?;
    }

    Ok(())
}

/// A filesystem entry and, for directories, the entries below it.
///
/// Files can never carry children, so the leaf invariant holds by
/// construction for every tree, whether built from disk or decoded from XML.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    File { name: String },
    Directory { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File { name: name.into() }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name } | Node::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Children in stored order; always empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Directory { children, .. } => children,
        }
    }
}

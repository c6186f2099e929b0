use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Why a path cannot be used as the root of a listing.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("directory does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while converting between trees and XML documents.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("<{tag}> element is missing the `name` attribute")]
    MissingAttribute { tag: String },

    #[error("file `{name}` cannot contain child elements")]
    UnexpectedChildren { name: String },

    #[error("document has no root element")]
    EmptyDocument,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("<{tag}> element is never closed")]
    UnclosedElement { tag: String },

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Attribute(#[from] AttrError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

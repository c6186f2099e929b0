pub mod build;
pub mod codec;
pub mod render;

pub use build::{BuildOptions, build, build_tree};
pub use codec::{decode, encode};
pub use render::write_tree;

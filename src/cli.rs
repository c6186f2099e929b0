use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::BuildOptions;
use crate::core::build::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree and save or load it as XML", long_about = None)]
pub struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Maximum depth to display
    #[arg(short = 'l', long = "level", value_name = "INT", default_value_t = DEFAULT_MAX_DEPTH)]
    pub level: usize,

    /// Show hidden files (names starting with '.')
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Save the tree to an XML file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Load and print a tree from an XML file instead of listing a directory
    #[arg(long, value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            max_depth: self.level,
            show_hidden: self.all,
        }
    }
}

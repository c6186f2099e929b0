use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use dirtree::cli::Cli;
use dirtree::core::{build_tree, codec, write_tree};
use dirtree::fs::RealFileSystem;
use dirtree::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    // Loading replaces the listing entirely; directory and --save are ignored.
    if let Some(load_path) = &cli.load {
        let root = codec::load(load_path)
            .with_context(|| format!("cannot load tree from {}", load_path.display()))?;
        writeln!(stdout, "Tree loaded from XML:")?;
        write_tree(&mut stdout, &root)?;
        return Ok(());
    }

    let root_path = dirtree::resolve_root(&cli.directory)?;
    // A depth-0 build always yields the root since the bound is unsigned.
    let root = build_tree(&RealFileSystem, &root_path, &cli.build_options())?
        .context("root lies past the depth bound")?;

    writeln!(stdout, "Directory tree for {}:", root_path.display())?;
    write_tree(&mut stdout, &root)?;

    if let Some(save_path) = &cli.save {
        codec::save(save_path, &root)
            .with_context(|| format!("cannot save tree to {}", save_path.display()))?;
        writeln!(stdout, "Tree saved to {}", save_path.display())?;
    }

    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Tokenize and parse Jack source (.jack) into a labeled parse-tree
/// document.
///
/// A single file produces one sibling `<stem>Copy.xml`; a directory of
/// .jack files produces one such document per input file.
#[derive(Parser)]
#[command(name = "jack-syntax-analyzer", version, about)]
struct Cli {
    /// Path to a .jack file or a directory of .jack files
    input: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli.input) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(input: &PathBuf) -> Result<()> {
    if input.is_dir() {
        for entry in fs::read_dir(input)
            .with_context(|| format!("failed to read directory {}", input.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "jack") {
                analyze_file(&path)?;
            }
        }
        Ok(())
    } else {
        analyze_file(input)
    }
}

fn analyze_file(input: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    log::info!("analyzing {}", input.display());

    let document = match n2t_jackanalyzer::analyze(&source) {
        Ok(document) => document,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}", err);
            }
            anyhow::bail!("analysis failed with {} error(s)", errors.len());
        }
    };

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("{} has no file stem", input.display()))?;
    let output_path = input.with_file_name(format!("{stem}Copy.xml"));
    fs::write(&output_path, document)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    log::info!("wrote {}", output_path.display());
    Ok(())
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Translate a Hack assembly (.asm) file into 16-bit machine code (.hack).
#[derive(Parser)]
#[command(name = "hack-assembler", version, about)]
struct Cli {
    /// Path to the input .asm file
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
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    log::info!("assembling {}", input.display());

    let words = match n2t_assembler::assemble(&source) {
        Ok(words) => words,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}", err);
            }
            anyhow::bail!("assembly failed with {} error(s)", errors.len());
        }
    };

    let output_path = input.with_extension("hack");
    let mut contents = words.join("\n");
    contents.push('\n');
    fs::write(&output_path, contents)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    log::info!("wrote {} words to {}", words.len(), output_path.display());
    Ok(())
}

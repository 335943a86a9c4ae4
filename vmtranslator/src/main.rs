use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Translate Hack VM bytecode (.vm) into Hack assembly (.asm).
///
/// A single file is translated with no bootstrap prelude; a directory
/// of .vm files is translated as one program, bootstrap prelude first,
/// files visited in lexicographic filename order.
#[derive(Parser)]
#[command(name = "hack-vm-translator", version, about)]
struct Cli {
    /// Path to a .vm file or a directory of .vm files
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
        run_directory(input)
    } else {
        run_single_file(input)
    }
}

fn run_single_file(input: &PathBuf) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let stem = file_stem(input)?;

    log::info!("translating {}", input.display());

    let asm = match n2t_vmtranslator::translate_file(&source, &stem) {
        Ok(asm) => asm,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}", err);
            }
            anyhow::bail!("translation failed with {} error(s)", errors.len());
        }
    };

    let output_path = input.with_extension("asm");
    fs::write(&output_path, asm)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    log::info!("wrote {}", output_path.display());
    Ok(())
}

fn run_directory(input: &PathBuf) -> Result<()> {
    let mut vm_files: Vec<PathBuf> = fs::read_dir(input)
        .with_context(|| format!("failed to read directory {}", input.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "vm"))
        .collect();
    vm_files.sort();

    log::info!(
        "translating {} file(s) in {}",
        vm_files.len(),
        input.display()
    );

    let mut files = Vec::with_capacity(vm_files.len());
    for path in &vm_files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        files.push((file_stem(path)?, source));
    }

    let asm = match n2t_vmtranslator::translate_program(&files) {
        Ok(asm) => asm,
        Err(errors) => {
            for err in &errors {
                eprintln!("{}", err);
            }
            anyhow::bail!("translation failed with {} error(s)", errors.len());
        }
    };

    let dir_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let output_path = PathBuf::from(format!("{dir_name}.asm"));
    fs::write(&output_path, asm)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    log::info!("wrote {}", output_path.display());
    Ok(())
}

fn file_stem(path: &PathBuf) -> Result<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("{} has no file stem", path.display()))
}

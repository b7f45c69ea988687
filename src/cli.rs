//! Command-line surface: thin glue around [`ExtractorManager`].

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::extractors::base::types::FileDocument;
use crate::extractors::manager::{BatchOutcome, ExtractOptions, ExtractorManager};

/// Parse Python files and extract classes, functions, variables, and
/// imports as structured JSON.
#[derive(Debug, Parser)]
#[command(name = "pystruct", version)]
pub struct Cli {
    /// Python file to parse, or a directory with --recursive
    pub file: PathBuf,

    /// Write output to a JSON file instead of the console
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty print the output JSON when writing to a file
    #[arg(short, long)]
    pub pretty: bool,

    /// Walk a directory recursively and parse all .py files
    #[arg(short, long)]
    pub recursive: bool,

    /// Embed base64-encoded source for each file and declaration
    #[arg(short, long)]
    pub code: bool,
}

/// Run one invocation. The exit code reflects partial batch failure
/// without aborting the successful documents.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let manager = ExtractorManager::new(ExtractOptions {
        include_code: cli.code,
    });

    let (documents, had_failures) = if cli.recursive {
        let BatchOutcome {
            documents,
            failures,
        } = manager.extract_directory(&cli.file)?;
        for failure in &failures {
            eprintln!("error: {}", failure.error);
        }
        (documents, !failures.is_empty())
    } else {
        (vec![manager.extract_file(&cli.file)?], false)
    };

    write_output(&cli, &documents)?;

    Ok(if had_failures {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn write_output(cli: &Cli, documents: &[FileDocument]) -> Result<()> {
    if let Some(output) = &cli.output {
        let json = if cli.pretty {
            serde_json::to_string_pretty(documents)?
        } else {
            serde_json::to_string(documents)?
        };
        fs::write(output, json)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!("Wrote output to {}", output.display());
    } else {
        // Console output is always pretty for readability.
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, documents)?;
        writeln!(handle)?;
    }
    Ok(())
}

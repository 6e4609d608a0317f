// Command-line entry point for tsguard.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tsguard::application::{DebugOptions, GenerateUsecase, SourceFile};
use tsguard::infrastructure::{FsGuardSink, KeywordResolver};

/// Generates runtime type guards for all interfaces in the given TypeScript
/// files. Each guard is a function named `is<Name>` with the first letter of
/// the interface name capitalized.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input TypeScript source file (can specify multiple)
    #[arg(short, long = "file")]
    file: Vec<PathBuf>,

    /// Pattern for output file names; `<FILE>` is replaced by the input
    /// file's name without extension
    #[arg(short, long, default_value = "<FILE>-guard.ts")]
    output: String,

    /// Debug options (can specify multiple); `ast` prints each source
    /// file's parsed tree, `model` prints the extracted interfaces as JSON
    #[arg(short, long)]
    debug: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    if cli.file.is_empty() {
        bail!("at least one file must be specified via the -f FILE flag");
    }

    let missing: Vec<String> = cli
        .file
        .iter()
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();
    if !missing.is_empty() {
        bail!("input file(s) not found: {}", missing.join(", "));
    }

    let sources = cli
        .file
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(SourceFile {
                path: path.clone(),
                text,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let usecase = GenerateUsecase {
        resolver: &KeywordResolver,
        sink: &FsGuardSink,
    };
    let outcomes = usecase.run(&sources, &cli.output, DebugOptions::from_flags(&cli.debug));

    let mut all_ok = true;
    for outcome in outcomes {
        match outcome.result {
            Ok(output) => println!(
                "Generated {} from {}",
                output.display(),
                outcome.input.display()
            ),
            Err(err) => {
                all_ok = false;
                eprintln!("{}: {err}", outcome.input.display());
            }
        }
    }
    Ok(all_ok)
}

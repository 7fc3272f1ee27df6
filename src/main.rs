//! repl-blocks - render documentation REPL blocks to HTML

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use repl_blocks::{Block, Registry, WEBSITE_ASSETS};

#[derive(Parser)]
#[command(name = "repl-blocks")]
#[command(version, about = "Render documentation REPL blocks to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    repl-blocks session.txt                  Render a repl block to stdout
    repl-blocks -k replWithTypes session.txt Render with type annotations
    repl-blocks --manifest                   Show the website asset manifest")]
struct Cli {
    /// Input file with the raw block body (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Block kind to render ("repl" or "replWithTypes")
    #[arg(short, long, default_value = "repl")]
    kind: String,

    /// Write the fragment to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Print the website asset manifest as JSON
    #[arg(short, long)]
    manifest: bool,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.manifest {
        show_manifest()
    } else {
        render(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_manifest() -> Result<(), String> {
    let json = serde_json::to_string(&WEBSITE_ASSETS).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn render(cli: &Cli) -> Result<(), String> {
    let body = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| e.to_string())?;
            buf
        }
    };

    let registry = Registry::new();
    let block = Block::new(body);
    let fragment = registry
        .process(&cli.kind, &block)
        .map_err(|e| format!("{e} (expected one of: {})", registry.kinds().join(", ")))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &fragment).map_err(|e| format!("{path}: {e}"))?;
            if !cli.quiet {
                println!("wrote {path}");
            }
        }
        None => println!("{fragment}"),
    }

    Ok(())
}

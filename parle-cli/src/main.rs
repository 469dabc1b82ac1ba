//! Parle CLI
//!
//! Commands:
//! - convert: convert a spoken quantity and print the phrase
//! - slots: list unit names for a speech grammar
//! - intents: generate training sentences

mod cli;
mod reactions;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use parle::{Converter, FRENCH};
use parle_grammar::{write_slots, IntentGenerator, SENTENCES};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Convert { quantity, source, to, channel, json } => {
            let converter = Converter::french().with_channel(channel.into());
            match converter.convert(quantity, &source, to.as_deref()) {
                Ok(conversion) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&conversion)?);
                    } else {
                        println!("{}", conversion.phrase);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    warn!(code = err.code(), error = %err, "conversion failed");
                    let message = reactions::reaction(&err);
                    if json {
                        let report = json!({
                            "error": err,
                            "code": err.code(),
                            "message": message,
                        });
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!("{}", message);
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Slots { output } => {
            let count = with_output(output.as_deref(), |out| Ok(write_slots(&FRENCH, out)?))?;
            info!(count, "slot values written");
            Ok(ExitCode::SUCCESS)
        }
        Command::Intents { output } => {
            let generator = IntentGenerator::new()?;
            let count = with_output(output.as_deref(), |out| Ok(generator.write(SENTENCES, out)?))?;
            info!(count, "intent sentences written");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run `write` against the named file, or stdout
fn with_output<T>(path: Option<&Path>, write: impl FnOnce(&mut dyn Write) -> Result<T>) -> Result<T> {
    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let value = write(&mut out)?;
            out.flush()?;
            Ok(value)
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let value = write(&mut out)?;
            out.flush()?;
            Ok(value)
        }
    }
}

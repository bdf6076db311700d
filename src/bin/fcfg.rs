//! fcfg conversion command-line tool.
//!
//! Two subcommands, matching the two conversion directions:
//!
//! ```text
//! fcfg fcfg2json <INFILE> <OUTFILE>   # .fcfg -> JSON
//! fcfg json2fcfg <INFILE> <OUTFILE>   # JSON -> .fcfg
//! ```
//!
//! `-` stands for stdin/stdout. Any parse or encode failure prints the
//! error and exits non-zero without writing output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fcfg::FcfgOptions;

#[derive(Parser)]
#[command(name = "fcfg")]
#[command(version, about = "fcfg conversion utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an .fcfg file to JSON
    Fcfg2json {
        /// Input .fcfg file, or - for stdin
        infile: PathBuf,
        /// Output JSON file, or - for stdout
        outfile: PathBuf,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Convert a JSON file to .fcfg
    Json2fcfg {
        /// Input JSON file, or - for stdin
        infile: PathBuf,
        /// Output .fcfg file, or - for stdout
        outfile: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fcfg2json {
            infile,
            outfile,
            compact,
        } => {
            let input = read_input(&infile)?;
            let options = FcfgOptions::new().with_pretty_json(!compact);
            let json = fcfg::fcfg_to_json(&input, &options)
                .with_context(|| format!("failed to convert {}", infile.display()))?;
            write_output(&outfile, &json)?;
        }
        Commands::Json2fcfg { infile, outfile } => {
            let input = read_input(&infile)?;
            let text = fcfg::json_to_fcfg(&input, &FcfgOptions::default())
                .with_context(|| format!("failed to convert {}", infile.display()))?;
            write_output(&outfile, &text)?;
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    if path.as_os_str() == "-" {
        io::stdout()
            .write_all(content.as_bytes())
            .context("failed to write stdout")?;
    } else {
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

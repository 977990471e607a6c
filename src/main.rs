//! sweepmark CLI - convert Markdown to HTML in one pass

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use sweepmark::{convert_with_diagnostics, Options, TagVocabulary};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input file (`-` or nothing reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding any subset of the output tags
    #[arg(long)]
    tags: Option<PathBuf>,

    /// Turn `<https://…>` and `<user@host>` into links
    #[arg(long, action = ArgAction::SetTrue)]
    autolinks: bool,

    /// Fail when any construct was printed literally
    #[arg(long = "deny-warnings", action = ArgAction::SetTrue)]
    deny_warnings: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = read_input(cli.input.as_deref())?;
    let tags = match &cli.tags {
        Some(path) => load_tags(path)?,
        None => TagVocabulary::default(),
    };
    let options = Options {
        tags,
        autolinks: cli.autolinks,
    };

    let conversion = convert_with_diagnostics(&input, &options);
    for diagnostic in &conversion.diagnostics {
        log::warn!("{diagnostic}");
    }

    match &cli.output {
        Some(path) => fs::write(path, &conversion.html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout()
            .write_all(conversion.html.as_bytes())
            .context("writing stdout")?,
    }

    if cli.deny_warnings && !conversion.diagnostics.is_empty() {
        bail!(
            "{} construct(s) were printed literally",
            conversion.diagnostics.len()
        );
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn load_tags(path: &Path) -> Result<TagVocabulary> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing tags from {}", path.display()))
}

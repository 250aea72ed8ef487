//! Command-line front end: `t2h notes.tex > notes.html`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use t2h::{convert_file, Config, Error};

#[derive(Parser)]
#[command(name = "t2h", version, about = "Converts latex to html")]
struct Cli {
    /// LaTeX file to process
    texfile: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprint!("{}", diagnostic(&cli.texfile, &err));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::default(),
    };

    let html = convert_file(&cli.texfile, &config)
        .with_context(|| format!("cannot convert '{}'", cli.texfile.display()))?;

    match cli.output {
        Some(ref path) => std::fs::write(path, html)
            .with_context(|| format!("cannot write '{}'", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .context("cannot write to stdout")?,
    }

    Ok(())
}

/// Format a failure for stderr; parse errors point at the offending line.
fn diagnostic(texfile: &Path, err: &anyhow::Error) -> String {
    if let Some(Error::Parse(parse)) = err.downcast_ref::<Error>() {
        let mut out = format!(
            "error: {}\n  --> {}:{} (line index {})\n   | {}\n",
            parse.kind,
            texfile.display(),
            parse.line + 1,
            parse.line,
            parse.context
        );
        if let Some(ref env) = parse.environment {
            out.push_str(&format!("   = inside environment '{}'\n", env));
        }
        return out;
    }

    format!("error: {:#}\n", err)
}

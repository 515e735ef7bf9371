use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use toolhub_markdown_config::Config;
use toolhub_markdown_engine::{LanguageLabels, Renderer, to_html, to_plain_text};

mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain text with markup removed
    Text,
    /// The rendered document as JSON
    Json,
    /// An HTML fragment
    Html,
    /// Interactive terminal viewer
    View,
}

#[derive(Debug, Parser)]
#[command(
    name = "toolhub-markdown",
    version,
    about = "Render the markdown subset used in AI model replies"
)]
struct Cli {
    /// File to render; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Output format [default: config `default_format`, then text]
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Config file to use instead of ~/.config/toolhub-markdown/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    let format = resolve_format(cli.format, config.as_ref())?;
    let input = read_input(cli.input.as_deref())?;

    let labels = match &config {
        Some(config) => LanguageLabels::with_overrides(config.label_overrides()),
        None => LanguageLabels::builtin(),
    };
    let doc = Renderer::new(labels).render(&input);
    log::debug!("writing {} blocks as {format:?}", doc.blocks.len());

    match format {
        Format::Text => print!("{}", to_plain_text(&doc)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
        Format::Html => print!("{}", to_html(&doc)),
        Format::View => view::run(&doc)?,
    }

    Ok(())
}

fn resolve_format(flag: Option<Format>, config: Option<&Config>) -> Result<Format> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.and_then(|c| c.default_format.as_deref()) {
        Some(name) => Format::from_str(name, true).map_err(|_| {
            anyhow!("Invalid default_format '{name}' in config (expected text, json, html or view)")
        }),
        None => Ok(Format::Text),
    }
}

/// Reads the whole input. Invalid UTF-8 is replaced rather than rejected.
fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => fs::read(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?,
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

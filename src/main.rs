use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use md2textile::{CodeBlockStyle, Config, Converter};

#[derive(Parser)]
#[command(name = "md2textile")]
#[command(version)]
#[command(about = "Convert Markdown text to Textile markup")]
struct Cli {
    /// Input Markdown file (defaults to stdin)
    input: Option<PathBuf>,

    /// Output Textile file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markup for fenced code blocks, overriding the config file
    #[arg(long, value_enum)]
    code_blocks: Option<CodeBlocksArg>,

    /// Log each conversion step
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CodeBlocksArg {
    Textile,
    Html,
}

impl From<CodeBlocksArg> for CodeBlockStyle {
    fn from(arg: CodeBlocksArg) -> Self {
        match arg {
            CodeBlocksArg::Textile => CodeBlockStyle::Textile,
            CodeBlocksArg::Html => CodeBlockStyle::Html,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };
    if let Some(style) = cli.code_blocks {
        config.code_blocks.style = style.into();
    }
    log::debug!("code blocks rendered as {:?}", config.code_blocks.style);

    let markdown = read_input(cli.input.as_ref())?;
    let markdown = markdown.trim();
    if markdown.is_empty() {
        bail!("no Markdown text to convert");
    }

    let textile = Converter::new(config).convert(markdown);

    match &cli.output {
        Some(path) => {
            fs::write(path, &textile)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{textile}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

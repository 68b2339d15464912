//! tts-stubgen: generate Lua annotation stubs from a YAML API description.
//!
//! Reads the `functions` list of one category (default `Object`) from
//! `api.yaml` and writes `Object.lua`, a LuaLS definition file with one
//! annotated `function Object.name(...) end` stub per entry.
//!
//! - **default**: `tts-stubgen` (no arguments)
//! - **pipe mode**: `tts-stubgen -i - -o - < api.yaml > Object.lua`

mod error;
mod loader;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tts-stubgen",
    version,
    about = "Generate Lua annotation stubs for Tabletop Simulator from a YAML API description"
)]
struct Cli {
    /// API description (YAML). Use - to read stdin.
    #[arg(short = 'i', long, default_value = "api.yaml")]
    input: PathBuf,

    /// Output stub file [default: <category>.lua]. Use - to write to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Top-level category to render
    #[arg(short = 'c', long, default_value = "Object")]
    category: String,

    /// Prefix for documentation links
    #[arg(long, default_value = render::lua::DEFAULT_BASE_URL)]
    base_url: String,

    /// Omit the ---@meta / ---@class preamble
    #[arg(long)]
    no_meta: bool,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let content = read_input(&cli.input)?;
    let description = loader::parse(&content, &cli.category)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let options = render::RenderOptions {
        category: &cli.category,
        base_url: &cli.base_url,
        meta_header: !cli.no_meta,
    };
    // Rendered fully in memory; nothing touches the output path before this succeeds.
    let artifact = render::generate(&description, &options)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.lua", cli.category)));
    write_output(&output, &artifact)?;

    let count = description
        .category(&cli.category)
        .map_or(0, |spec| spec.functions.len());
    info!(category = %cli.category, functions = count, output = %output.display(), "stubs written");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}

fn is_stdio(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &std::path::Path) -> Result<String> {
    if is_stdio(path) {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    debug!(path = %path.display(), "reading API description");
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: &std::path::Path, artifact: &str) -> Result<()> {
    if is_stdio(path) {
        print!("{artifact}");
        return Ok(());
    }
    fs::write(path, artifact).with_context(|| format!("failed to write {}", path.display()))
}

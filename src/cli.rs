//! Command-line interface for inspecting source dumps

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::source::{
    file_url, is_extension_directory_path, is_extension_url, is_minified, is_pretty_url,
    is_third_party, line_count, mode_for, plain_url, query_string, raw_source_url, source_path,
    truncated_filename, AsyncValue, LineTextCache, Location, Source, SourceCatalog, SourceContent,
    SourceId, SourceUrl, SymbolHints,
};
use crate::telemetry::Telemetry;

/// Top-level CLI for the sourcelens source inspector.
#[derive(Debug, Parser)]
#[command(name = "sourcelens")]
#[command(about = "Display names and classification for replay-debugger sources", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ~/.sourcelens/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the editor-tab listing for a JSON dump of sources.
    Tabs {
        /// Path to a JSON array of sources.
        sources: PathBuf,

        /// Emit the rows as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Classify the syntax-highlighting mode of a local file.
    Classify {
        /// File to classify.
        file: PathBuf,

        /// Content type the server would report, if any.
        #[arg(long)]
        content_type: Option<String>,

        /// Parsed symbols contained JSX.
        #[arg(long)]
        jsx: bool,

        /// Parsed symbols contained type annotations.
        #[arg(long)]
        types: bool,
    },

    /// Print the derived URL parts and predicates for a source URL.
    Inspect {
        /// Source URL to inspect.
        url: String,
    },

    /// Print the text at a line (and column) of a local file.
    Line {
        /// File to read.
        file: PathBuf,

        /// 1-based line number.
        line: u32,

        /// 0-based column to start from.
        #[arg(long, default_value_t = 0)]
        column: u32,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let config = match &cli.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::load().context("loading config")?,
        };
        tracing::debug!(?config, "loaded config");

        match cli.command {
            CliCommand::Tabs { sources, json } => run_tabs(&sources, json, &config),
            CliCommand::Classify {
                file,
                content_type,
                jsx,
                types,
            } => run_classify(&file, content_type, jsx, types),
            CliCommand::Inspect { url } => {
                run_inspect(&url);
                Ok(())
            }
            CliCommand::Line { file, line, column } => run_line(&file, line, column),
        }
    }
}

fn run_tabs(path: &Path, json: bool, config: &Config) -> Result<()> {
    let mut telemetry = Telemetry::new(&config.telemetry);
    telemetry.track_timing("load-sources");
    let catalog = SourceCatalog::from_json_file(path)
        .with_context(|| format!("loading sources from {}", path.display()))?;
    telemetry.track_timing("load-sources");
    tracing::info!(count = catalog.len(), "loaded sources");

    let entries = catalog.tab_entries();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (source, entry) in catalog.iter().zip(&entries) {
        let search = query_string(source).unwrap_or_default();
        let name = truncated_filename(source, &search, config.display.filename_length);
        match entry.display_path.as_deref() {
            Some(dir) if !dir.is_empty() => println!("{name}  {dir}  [{}]", entry.icon),
            _ => println!("{name}  [{}]", entry.icon),
        }
    }
    Ok(())
}

fn run_classify(file: &Path, content_type: Option<String>, jsx: bool, types: bool) -> Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    // Model the local file the way the debugger would see it served.
    let absolute = fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());
    let source = Source::new(
        file.display().to_string(),
        format!("file://{}", absolute.display()),
    );
    let content = SourceContent::Text { text, content_type };
    let hints = SymbolHints {
        has_jsx: jsx,
        has_types: types,
    };

    if is_minified(&source, &content) {
        tracing::warn!(file = %file.display(), "contents look minified");
    }

    let mode = mode_for(&source, &content, Some(hints));
    println!("{}", mode.codemirror());
    Ok(())
}

fn run_inspect(url: &str) {
    let parts = SourceUrl::parse(url);
    let source = Source::new("inspect", url);

    println!("group:          {}", parts.group);
    println!("path:           {}", parts.path);
    println!("filename:       {}", parts.filename);
    println!("search:         {}", parts.search);
    println!("source path:    {}", source_path(url));
    println!("plain url:      {}", plain_url(url));
    println!("raw url:        {}", raw_source_url(url));
    println!("display url:    {}", file_url(&source, true));
    println!("pretty printed: {}", is_pretty_url(url));
    println!("third party:    {}", is_third_party(&source));
    println!("extension url:  {}", is_extension_url(url));
    println!("extension root: {}", is_extension_directory_path(url));
}

fn run_line(file: &Path, line: u32, column: u32) -> Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    let id = SourceId::new(file.display().to_string());
    let loaded = SourceContent::text(text);
    tracing::debug!(lines = line_count(&loaded), "loaded file");
    let content = AsyncValue::Fulfilled(loaded);

    let mut cache = LineTextCache::new();
    let snippet = cache.text_at_position(&id, Some(&content), Location { line, column });
    println!("{snippet}");
    Ok(())
}

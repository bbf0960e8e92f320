//! CLI Tooling
//!
//! Command-line front end over the library: `ls`, `grep`, `grep-rl`, `head`,
//! `tail` and `wc`. Text output is streamed as the underlying iterators
//! produce it; JSON output is collected into one document.

use crate::config::{ConfigLoader, SiftConfig};
use crate::error::FsError;
use crate::filter::{Filter, FilterSpec};
use crate::scan::{self, GrepOptions};
use crate::strict;
use crate::tree::{ListOptions, WalkerConfig};
use crate::types::{Line, Recursive};
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sift - lazy directory listing and line scanning
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "List, grep, head, tail and count lines without reading more than needed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered above the user config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Traversal flags shared by `ls` and `grep-rl`.
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Descend at most N directory levels below the root
    #[arg(long, conflicts_with = "no_recurse")]
    pub depth: Option<usize>,

    /// Only look at the root's direct children
    #[arg(long)]
    pub no_recurse: bool,

    /// Keep paths containing this substring (repeatable; any may match)
    #[arg(long = "match", value_name = "SUBSTRING")]
    pub matches: Vec<String>,

    /// Keep paths matching this regular expression
    #[arg(long)]
    pub regex: Option<String>,

    /// Also list directories found at the depth limit
    #[arg(long)]
    pub show_dirs: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List files under a directory
    Ls {
        dir: PathBuf,
        #[command(flatten)]
        walk: WalkArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print lines of a file matching a pattern
    Grep {
        pattern: String,
        file: PathBuf,
        /// Treat the pattern as a literal substring
        #[arg(long, short = 'F')]
        fixed: bool,
        /// Print lines that do not match
        #[arg(long, short = 'v')]
        invert: bool,
        /// Stop after N matching lines
        #[arg(long, short = 'm')]
        max_count: Option<usize>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List files under a directory whose content matches a pattern
    GrepRl {
        pattern: String,
        dir: PathBuf,
        /// Treat the pattern as a literal substring
        #[arg(long, short = 'F')]
        fixed: bool,
        #[command(flatten)]
        walk: WalkArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the first lines of a file
    Head {
        file: PathBuf,
        #[arg(short = 'n', long = "lines", default_value = "10")]
        lines: usize,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the last lines of a file
    Tail {
        file: PathBuf,
        #[arg(short = 'n', long = "lines", default_value = "10")]
        lines: usize,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Count the lines of a file
    Wc {
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Ls { .. } => "ls",
        Commands::Grep { .. } => "grep",
        Commands::GrepRl { .. } => "grep-rl",
        Commands::Head { .. } => "head",
        Commands::Tail { .. } => "tail",
        Commands::Wc { .. } => "wc",
    }
}

/// CLI context holding the loaded configuration.
pub struct CliContext {
    config: SiftConfig,
}

impl CliContext {
    /// Load configuration and apply the logging flags from `cli`.
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        if let Some(level) = &cli.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(Self { config })
    }

    pub fn with_config(config: SiftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    /// Execute a command and return its full output.
    pub fn execute(&self, command: &Commands) -> Result<String> {
        let mut out = Vec::new();
        self.execute_to(command, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Execute a command, writing output as it is produced.
    pub fn execute_to(&self, command: &Commands, out: &mut dyn Write) -> Result<()> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Ls { dir, walk, format } => {
                let config = self.walker_config(walk)?;
                let paths = strict::list(dir, &config)?;
                write_paths(out, dir, paths, format)
            }
            Commands::Grep {
                pattern,
                file,
                fixed,
                invert,
                max_count,
                format,
            } => {
                let filter = content_filter(pattern, *fixed)?;
                let options = GrepOptions {
                    invert: *invert,
                    max_count: *max_count,
                };
                let lines = scan::grep_with(&filter, file, options)?;
                write_lines(out, file, lines, format)
            }
            Commands::GrepRl {
                pattern,
                dir,
                fixed,
                walk,
                format,
            } => {
                let filter = content_filter(pattern, *fixed)?;
                let config = self.walker_config(walk)?;
                let paths = strict::grep_rl(&filter, dir, &config)?;
                write_paths(out, dir, paths, format)
            }
            Commands::Head {
                file,
                lines,
                format,
            } => write_lines(out, file, strict::head(file, *lines)?, format),
            Commands::Tail {
                file,
                lines,
                format,
            } => write_lines(out, file, strict::tail(file, *lines)?, format),
            Commands::Wc { file, format } => {
                check_format(format)?;
                let count = scan::line_count(file)?;
                if format == "json" {
                    let doc = json!({ "file": file.to_string_lossy(), "lines": count });
                    writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
                } else {
                    writeln!(out, "{} {}", count, file.display())?;
                }
                Ok(())
            }
        }
    }

    /// Configured listing options with command-line flags applied on top.
    fn walker_config(&self, walk: &WalkArgs) -> Result<WalkerConfig> {
        Ok(merge_walk_args(self.config.list.clone(), walk)?.into_walker_config()?)
    }
}

fn merge_walk_args(mut options: ListOptions, walk: &WalkArgs) -> Result<ListOptions, FsError> {
    if walk.no_recurse {
        options.recursive = Recursive::Flag(false);
    } else if let Some(depth) = walk.depth {
        options.recursive = Recursive::Depth(depth);
    }
    if walk.show_dirs {
        options.show_dirs = true;
    }
    let from_flags = match (&walk.regex, walk.matches.as_slice()) {
        (Some(_), [_, ..]) => {
            return Err(FsError::InvalidFilter(
                "--regex and --match cannot be combined".to_string(),
            ))
        }
        (Some(regex), []) => Some(FilterSpec::Pattern(regex.clone())),
        (None, [single]) => Some(FilterSpec::Substring(single.clone())),
        (None, []) => None,
        (None, many) => Some(FilterSpec::AnyOf(many.to_vec())),
    };
    if from_flags.is_some() {
        options.filter = from_flags;
    }
    Ok(options)
}

fn content_filter(pattern: &str, fixed: bool) -> Result<Filter, FsError> {
    if fixed {
        Ok(Filter::substring(pattern))
    } else {
        Filter::pattern(pattern)
    }
}

fn check_format(format: &str) -> Result<()> {
    if format != "text" && format != "json" {
        bail!("Invalid format: {} (must be 'text' or 'json')", format);
    }
    Ok(())
}

fn write_paths<I>(out: &mut dyn Write, root: &Path, paths: I, format: &str) -> Result<()>
where
    I: Iterator<Item = Result<PathBuf, FsError>>,
{
    check_format(format)?;
    if format == "json" {
        let paths = paths
            .map(|p| p.map(|p| p.to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        let doc = json!({ "root": root.to_string_lossy(), "paths": paths });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }
    for path in paths {
        writeln!(out, "{}", path?.display())?;
    }
    Ok(())
}

fn write_lines<I>(out: &mut dyn Write, file: &Path, lines: I, format: &str) -> Result<()>
where
    I: Iterator<Item = Result<Line, FsError>>,
{
    check_format(format)?;
    if format == "json" {
        let lines = lines.collect::<Result<Vec<_>, _>>()?;
        let doc = json!({ "file": file.to_string_lossy(), "lines": lines });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }
    for line in lines {
        out.write_all(line?.as_bytes())?;
    }
    Ok(())
}

// SPDX-License-Identifier: MIT
//
// n-select: resolve Vim text objects from the command line.
//
// Loads a file into an n-text Buffer, resolves a text object (or a
// whole-word search) at a location, and prints what it covers:
//
//   n-select select src/lib.rs 'i(' 12:8
//   n-select find notes.txt foo 0 --backward
//
// A location is a byte offset (`42`) or a 1-indexed `line:col` (`12:8`).
// The answer is one line: byte range, line:col bounds, escaped text.
//
//   120..134 12:5-12:19 "a, b, c"
//
// Exit status is 1 when no object exists at the location.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use n_text::{Buffer, Position};
use n_textobj::search::{word_find_next, word_find_prev};
use n_textobj::{ObjectKind, Range};
use thiserror::Error;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "n-select", version)]
#[command(about = "Resolve Vim text objects (iw, a(, ip, af, in, ...) in a file")]
struct Cli {
    /// Trace object resolution on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Select a text object: iw aw iW aW il al is ip ie ae if af in, or i/a
    /// followed by a delimiter such as ( ] { > " ' `
    Select {
        file: PathBuf,
        object: ObjectKind,
        at: Location,
    },
    /// Find the next occurrence of WORD that stands as a whole word
    Find {
        file: PathBuf,
        word: String,
        at: Location,

        /// Search towards the start of the file
        #[arg(short, long)]
        backward: bool,
    },
}

impl Command {
    fn file(&self) -> &Path {
        match self {
            Self::Select { file, .. } | Self::Find { file, .. } => file,
        }
    }
}

// ─── Locations ──────────────────────────────────────────────────────────────

/// Where to resolve the object: a byte offset or a line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Offset(usize),
    /// 0-indexed internally, written 1-indexed.
    LineCol(Position),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum LocationError {
    #[error("`{0}` is neither a byte offset nor line:col")]
    Malformed(String),

    #[error("line and column start at 1")]
    Zero,

    #[error("{location} is outside the file ({size} bytes)")]
    OutOfBounds { location: Location, size: usize },
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LocationError::Malformed(s.to_owned());
        let Some((line, col)) = s.split_once(':') else {
            return s.parse().map(Self::Offset).map_err(|_| malformed());
        };
        let line: usize = line.parse().map_err(|_| malformed())?;
        let col: usize = col.parse().map_err(|_| malformed())?;
        Position::from_one_based(line, col)
            .map(Self::LineCol)
            .ok_or(LocationError::Zero)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => write!(f, "offset {offset}"),
            Self::LineCol(pos) => write!(f, "{pos}"),
        }
    }
}

impl Location {
    /// The byte offset this location denotes in `buffer`.
    fn resolve(self, buffer: &Buffer) -> Result<usize, LocationError> {
        let offset = match self {
            Self::Offset(offset) => (offset <= buffer.len_bytes()).then_some(offset),
            Self::LineCol(pos) => buffer.offset_of(pos),
        };
        offset.ok_or(LocationError::OutOfBounds {
            location: self,
            size: buffer.len_bytes(),
        })
    }
}

// ─── Selection ──────────────────────────────────────────────────────────────

/// Resolve `command` against `buffer`. `Range::EMPTY` when nothing is there.
fn select(buffer: &Buffer, command: &Command) -> Result<Range, LocationError> {
    let range = match command {
        Command::Select { object, at, .. } => object.select(buffer, at.resolve(buffer)?),
        Command::Find {
            word,
            at,
            backward,
            ..
        } => {
            let pos = at.resolve(buffer)?;
            if *backward {
                word_find_prev(buffer, pos, word)
            } else {
                word_find_next(buffer, pos, word)
            }
        }
    };
    Ok(range)
}

/// One line describing `range`: byte range, line:col bounds and text.
fn describe(buffer: &Buffer, range: Range) -> Option<String> {
    let span = range.as_span()?;
    let from = buffer.position_of(range.start)?;
    let to = buffer.position_of(range.end)?;
    let text = buffer.slice_to_string(span)?;
    Some(format!("{range} {from}-{to} {text:?}"))
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("n_textobj=trace,n_text=trace,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let path = cli.command.file();
    let buffer = Buffer::from_file(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let range = select(&buffer, &cli.command)?;

    if let Some(line) = describe(&buffer, range) {
        println!("{line}");
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::info!(path = %path.display(), "nothing selected");
        eprintln!("n-select: no match");
        Ok(ExitCode::FAILURE)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

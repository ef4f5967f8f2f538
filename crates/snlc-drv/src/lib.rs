//! snlc-drv - command-line driver for the SNL compiler pipeline.
//!
//! Wires the three library crates together behind a small CLI: read a
//! source (a file path, or `-` for stdin), run whichever phase the
//! requested view needs, and print the result. Mirrors the teacher's own
//! split of a `Config` populated by argument parsing and a `Session` that
//! owns the actual run, but trimmed to the phases this language has —
//! there is no codegen, linking, or incremental-compilation machinery
//! here, since lexing, parsing, and semantic analysis are the whole
//! pipeline.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};

/// Which textual view a run prints (§6 of the driver's contract: tokens,
/// AST, or the symbol table plus the full analysis listing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// The `(KIND, LEXEME)` token stream.
    Tokens,
    /// The depth-first preorder AST dump.
    Ast,
    /// The symbol table, scope-snapshot listing, and error summary.
    Analysis,
}

/// Command-line surface, parsed by `clap`'s derive macros.
#[derive(Debug, ClapParser)]
#[command(
    name = "snlc",
    version,
    about = "SNL compiler front-end: lexer, parser, and semantic analyzer"
)]
pub struct Config {
    /// Source file to process, or `-` to read from stdin.
    pub input: String,

    /// Which view to print.
    #[arg(long, value_enum, default_value = "analysis")]
    pub view: View,

    /// Write the rendered output to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output_path: Option<PathBuf>,

    /// Emit debug/trace spans around each pipeline phase to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything that can go wrong running a session: reading the source, or
/// any of the three pipeline phases. Library errors from `snlc-par`
/// propagate through unchanged; only the I/O boundary is this crate's own.
#[derive(Debug)]
pub enum DriverError {
    Io { path: PathBuf, source: io::Error },
    Pipeline(snlc_par::ParseFailure),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            DriverError::Pipeline(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io { source, .. } => Some(source),
            DriverError::Pipeline(e) => Some(e),
        }
    }
}

impl From<snlc_par::ParseFailure> for DriverError {
    fn from(e: snlc_par::ParseFailure) -> Self {
        DriverError::Pipeline(e)
    }
}

impl From<snlc_util::LexError> for DriverError {
    fn from(e: snlc_util::LexError) -> Self {
        DriverError::Pipeline(snlc_par::ParseFailure::from(e))
    }
}

/// The rendered text for a run, plus whether it completed without any
/// reported failure (used to pick the process exit code).
pub struct RunOutput {
    pub text: String,
    pub ok: bool,
}

/// Owns one end-to-end run of the pipeline over a `Config`. A fresh
/// `Session` is built per invocation; nothing about it persists or is
/// shared across runs, matching the core crates' own no-global-state rule.
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the configured input, runs the requested view, and writes it
    /// to the configured output (a file, or stdout by default via the
    /// caller). Returns the rendered text and whether the run was clean.
    #[tracing::instrument(level = "debug", skip(self), fields(input = %self.config.input, view = ?self.config.view))]
    pub fn run(&self) -> Result<RunOutput, DriverError> {
        let source = self.read_source()?;
        tracing::debug!(bytes = source.len(), "source read");

        let (text, ok) = match self.config.view {
            View::Tokens => {
                let lexed = snlc_lex::lex(&source)?;
                (snlc_lex::render_tokens(&lexed.tokens, &source), true)
            }
            View::Ast => {
                let (program, _interner) = snlc_par::parse(&source)?;
                (snlc_par::render_ast(&program), true)
            }
            View::Analysis => {
                let report = snlc_sem::analyze(&source)?;
                let ok = report.errors_text == "completed without errors";
                let mut text = String::new();
                text.push_str(&report.symbol_table_text);
                text.push('\n');
                text.push_str(&report.listing_lines.join("\n"));
                text.push('\n');
                text.push_str(&report.errors_text);
                text.push('\n');
                (text, ok)
            }
        };

        if let Some(output_path) = &self.config.output_path {
            fs::write(output_path, &text).map_err(|source| DriverError::Io {
                path: output_path.clone(),
                source,
            })?;
        }

        Ok(RunOutput { text, ok })
    }

    fn read_source(&self) -> Result<String, DriverError> {
        if self.config.input == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| DriverError::Io {
                    path: PathBuf::from("-"),
                    source,
                })?;
            Ok(buf)
        } else {
            let path = PathBuf::from(&self.config.input);
            fs::read_to_string(&path).map_err(|source| DriverError::Io { path, source })
        }
    }
}

/// Installs a `tracing-subscriber` env-filter, honoring `RUST_LOG` if set
/// and otherwise defaulting to `debug` when `verbose` is requested, `warn`
/// otherwise. Library crates depend only on `tracing`'s facade macros and
/// never see whether a subscriber is installed.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

//! glossa: Extract language-classifier tokens from source files.
//!
//! Usage:
//!   glossa [options] <file>...
//!
//! Files are tokenized in parallel and printed in argument order. A file
//! that cannot be read is reported and skipped; the exit code is then 1.

use clap::Parser as ClapParser;
use glossa_core::config::load_config_file;
use glossa_core::{Config, LoadError, OutputFormat, SourceFile, DEFAULT_CONFIG_FILE};
use glossa_tokenizer::extract_tokens;
use indexmap::IndexMap;
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};
use tracing::{error, info};

#[derive(ClapParser, Debug)]
#[command(name = "glossa", version, about = "glossa - Language-agnostic source tokenizer")]
struct Cli {
    /// Source files to tokenize.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Output format: lines, counts or json.
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Log how long tokenizing each file took.
    #[arg(short = 't', long)]
    time: bool,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Path to a config file (defaults to ./glossa.json when present).
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

/// Tokens extracted from one file.
#[derive(Debug, Serialize)]
struct FileTokens {
    file: String,
    tokens: Vec<String>,
    #[serde(skip)]
    elapsed: Duration,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_tracing(config.time());

    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| tokenize_file(path, config.max_file_size))
        .collect();

    let mut failed = 0usize;
    let mut files = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(file) => {
                if config.time() {
                    info!(
                        file = %file.file,
                        tokens = file.tokens.len(),
                        elapsed = ?file.elapsed,
                        "extract_tokens"
                    );
                }
                files.push(file);
            }
            Err(err) => {
                error!("{}", describe(&err));
                failed += 1;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_output(&mut out, config.format(), &files).into_diagnostic()?;
    out.flush().into_diagnostic()?;

    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Combine the config file (explicit, or `./glossa.json` if it exists)
/// with command-line flags. Flags win.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let file_config = match &cli.config {
        Some(path) => load_config_file(path).into_diagnostic()?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            load_config_file(DEFAULT_CONFIG_FILE).into_diagnostic()?
        }
        None => Config::default(),
    };

    let overrides = Config {
        format: cli.format,
        max_file_size: cli.max_file_size,
        time: cli.time.then_some(true),
    };
    Ok(file_config.merge(overrides))
}

/// Install a stderr subscriber. `RUST_LOG` wins over the default level.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn tokenize_file(path: &Path, max_size: Option<u64>) -> Result<FileTokens, LoadError> {
    let source = SourceFile::load(path, max_size)?;
    let start = Instant::now();
    let tokens = extract_tokens(source.text());
    Ok(FileTokens {
        file: path.display().to_string(),
        tokens,
        elapsed: start.elapsed(),
    })
}

/// The error followed by its cause, on one line.
fn describe(err: &LoadError) -> String {
    match std::error::Error::source(err) {
        Some(cause) => format!("{err}: {cause}"),
        None => err.to_string(),
    }
}

/// Distinct tokens with their counts, in first-seen order.
fn count_tokens(tokens: &[String]) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn write_output(out: &mut impl Write, format: OutputFormat, files: &[FileTokens]) -> io::Result<()> {
    // With several inputs, text formats get a `==> file <==` header each.
    let headers = files.len() > 1;

    match format {
        OutputFormat::Lines => {
            for file in files {
                if headers {
                    writeln!(out, "==> {} <==", file.file)?;
                }
                for token in &file.tokens {
                    writeln!(out, "{token}")?;
                }
            }
        }
        OutputFormat::Counts => {
            for file in files {
                if headers {
                    writeln!(out, "==> {} <==", file.file)?;
                }
                for (token, count) in count_tokens(&file.tokens) {
                    writeln!(out, "{count}\t{token}")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, files)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, source: &str) -> FileTokens {
        FileTokens {
            file: name.to_string(),
            tokens: extract_tokens(source),
            elapsed: Duration::ZERO,
        }
    }

    fn render(format: OutputFormat, files: &[FileTokens]) -> String {
        let mut out = Vec::new();
        write_output(&mut out, format, files).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_count_tokens_keeps_first_seen_order() {
        let tokens = extract_tokens("b ( a ( b ) b");
        let counts: Vec<_> = count_tokens(&tokens).into_iter().collect();
        assert_eq!(counts, vec![("b", 3), ("(", 2), ("a", 1), (")", 1)]);
    }

    #[test]
    fn test_lines_output() {
        let out = render(OutputFormat::Lines, &[file("a.c", "f(x);")]);
        assert_eq!(out, "f\n(\nx\n)\n;\n");
    }

    #[test]
    fn test_headers_with_several_files() {
        let out = render(
            OutputFormat::Counts,
            &[file("a.sh", "echo echo"), file("b.sh", "ls")],
        );
        assert_eq!(out, "==> a.sh <==\n2\techo\n==> b.sh <==\n1\tls\n");
    }

    #[test]
    fn test_json_output() {
        let out = render(OutputFormat::Json, &[file("x.py", "print(1)")]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "file": "x.py", "tokens": ["print", "(", ")"] }])
        );
    }

    #[test]
    fn test_describe_includes_cause() {
        let err = SourceFile::load("/no/such/file.rb", None).unwrap_err();
        let text = describe(&err);
        assert!(text.starts_with("failed to read `/no/such/file.rb`: "));
    }

    #[test]
    fn test_cli_parses_format() {
        let cli = Cli::try_parse_from(["glossa", "-f", "counts", "--time", "a.c"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Counts));
        assert!(cli.time);
        assert_eq!(cli.files, vec![PathBuf::from("a.c")]);
        assert!(Cli::try_parse_from(["glossa", "-f", "xml", "a.c"]).is_err());
        assert!(Cli::try_parse_from(["glossa"]).is_err());
    }
}

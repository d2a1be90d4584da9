//! Conversion pipeline: derive the input and output paths from a filename
//! stem and run a single forward pass over the config header.
//!
//! The pass reads lines with their terminators intact and writes each
//! rewritten macro-definition line verbatim, so LF, CRLF, and a final
//! unterminated line all round-trip exactly.

use std::fs::File;
use std::io::{BufRead as _, BufReader, BufWriter, Write as _};
use std::path::PathBuf;

use crate::defines::{self, LineKind};

/// Suffix appended to the stem to locate the config header.
pub const HEADER_EXT: &str = ".h";

/// Suffix appended to the stem to name the generated flag list.
pub const OUTPUT_EXT: &str = ".txt";

/// Configuration for one conversion run.
///
/// The stem is taken verbatim from the command line; both file paths are
/// derived by appending a fixed suffix, with no extension stripping.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Filename stem without extension.
    pub stem: String,
}

impl ConvertConfig {
    /// Creates a config for the given stem.
    pub fn new(stem: impl Into<String>) -> Self {
        Self { stem: stem.into() }
    }

    /// Path of the config header read by the conversion.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{HEADER_EXT}", self.stem))
    }

    /// Path of the flag list written by the conversion.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{OUTPUT_EXT}", self.stem))
    }
}

/// Counts reported by a completed conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Input lines scanned.
    pub lines_read: usize,
    /// `-D` flag lines emitted.
    pub flags_written: usize,
}

/// Errors from a conversion run. All are fatal; there is no partial-success
/// mode and no rollback of partially written output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The config header is absent or unreadable.
    #[error("failed to open config header {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The flag list could not be created or truncated.
    #[error("failed to create flag list {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read failed mid-scan.
    #[error("failed to read config header {}", path.display())]
    ReadLine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A write or the final flush failed.
    #[error("failed to write flag list {}", path.display())]
    WriteFlag {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Converts `<stem>.h` into `<stem>.txt`.
///
/// Each input line containing `#define ` is rewritten with
/// [`defines::to_build_flag`] and emitted in input order; all other lines
/// are dropped. The output file is created (or truncated) only after the
/// input opens successfully, so a missing header leaves no output behind.
/// Both handles live in this scope and are released on every exit path.
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary, ConvertError> {
    let input_path = config.input_path();
    let output_path = config.output_path();

    let input = File::open(&input_path).map_err(|source| ConvertError::OpenInput {
        path: input_path.clone(),
        source,
    })?;
    let mut reader = BufReader::new(input);

    let output = File::create(&output_path).map_err(|source| ConvertError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(output);

    let mut summary = ConvertSummary::default();
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|source| ConvertError::ReadLine {
                path: input_path.clone(),
                source,
            })?;
        if read == 0 {
            break;
        }
        summary.lines_read += 1;

        match defines::classify(&line) {
            LineKind::MacroDefine => {
                let flag = defines::to_build_flag(&line);
                writer
                    .write_all(flag.as_bytes())
                    .map_err(|source| ConvertError::WriteFlag {
                        path: output_path.clone(),
                        source,
                    })?;
                summary.flags_written += 1;
            }
            // Comment lines are inert: classified, then dropped without the
            // neutralized form ever reaching the output.
            LineKind::Comment | LineKind::Other => {}
        }
    }

    writer.flush().map_err(|source| ConvertError::WriteFlag {
        path: output_path.clone(),
        source,
    })?;

    Ok(summary)
}

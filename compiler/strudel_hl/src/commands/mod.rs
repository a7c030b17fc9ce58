//! Command handlers for the `strudel-hl` CLI.
//!
//! Parsing turns raw arguments into a [`HighlightCommand`]; execution reads
//! the source and formats the output as a string. Printing and exit codes
//! are left to the binary, so everything here is testable in-process.

use std::io::Read;
use std::path::PathBuf;

use strudel_highlight::{highlight_mininotation, highlight_strudel_with_meta, scan};

use crate::error::{CliError, Result};

mod listing;

pub use listing::{list_strings, list_tokens};

/// Where the source text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceArg {
    /// `-`: read standard input to the end.
    Stdin,
    File(PathBuf),
    /// Text given directly on the command line (`mini`).
    Inline(String),
}

impl SourceArg {
    /// `-` means stdin, anything else is a file path.
    pub fn from_path_arg(arg: &str) -> Self {
        if arg == "-" {
            SourceArg::Stdin
        } else {
            SourceArg::File(PathBuf::from(arg))
        }
    }
}

/// What to print.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered markup.
    Html,
    /// `HighlightResult` as JSON.
    Meta { pretty: bool },
    /// One line per token.
    Tokens,
    /// One line per string literal.
    Strings,
    /// Markup for a bare mini-notation string at offset `base`.
    Mini { base: u32 },
}

/// A fully parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightCommand {
    pub source: SourceArg,
    pub format: OutputFormat,
}

impl HighlightCommand {
    /// Parse a subcommand name and the arguments after it.
    ///
    /// Returns `Ok(None)` for names that are not highlight commands, so the
    /// caller can handle `help` and friends.
    pub fn parse(command: &str, args: &[String]) -> Result<Option<Self>> {
        let format = match command {
            "html" => OutputFormat::Html,
            "meta" => OutputFormat::Meta { pretty: false },
            "tokens" => OutputFormat::Tokens,
            "strings" => OutputFormat::Strings,
            "mini" => OutputFormat::Mini { base: 0 },
            _ => return Ok(None),
        };
        let is_mini = matches!(format, OutputFormat::Mini { .. });

        let mut format = format;
        let mut positional = None;
        for arg in args {
            if let Some(value) = arg.strip_prefix("--base=") {
                let OutputFormat::Mini { base } = &mut format else {
                    return Err(usage(command, "--base is only valid for `mini`"));
                };
                *base = value.parse().map_err(|_| {
                    CliError::Usage(format!("invalid --base value '{value}'"))
                })?;
            } else if arg == "--pretty" {
                let OutputFormat::Meta { pretty } = &mut format else {
                    return Err(usage(command, "--pretty is only valid for `meta`"));
                };
                *pretty = true;
            } else if arg.starts_with("--") {
                return Err(usage(command, &format!("unknown option '{arg}'")));
            } else if positional.is_none() {
                positional = Some(arg.as_str());
            } else {
                return Err(usage(command, &format!("unexpected argument '{arg}'")));
            }
        }

        let Some(positional) = positional else {
            let what = if is_mini { "text" } else { "input" };
            return Err(usage(command, &format!("missing {what}")));
        };
        let source = if is_mini {
            SourceArg::Inline(positional.to_string())
        } else {
            SourceArg::from_path_arg(positional)
        };
        Ok(Some(HighlightCommand { source, format }))
    }

    /// Read the source and produce the text to print.
    pub fn execute(&self) -> Result<String> {
        let source = read_source(&self.source)?;
        tracing::debug!(format = ?self.format, len = source.len(), "executing");
        format_output(self.format, &source)
    }
}

/// Produce output for already-loaded source text.
pub fn format_output(format: OutputFormat, source: &str) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => highlight_strudel_with_meta(source).html,
        OutputFormat::Meta { pretty } => {
            let result = highlight_strudel_with_meta(source);
            if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            }
        }
        OutputFormat::Tokens => list_tokens(source, &scan(source)),
        OutputFormat::Strings => list_strings(source, &scan(source).strings),
        OutputFormat::Mini { base } => highlight_mininotation(source, base),
    })
}

/// Load the text named by `source`.
pub fn read_source(source: &SourceArg) -> Result<String> {
    match source {
        SourceArg::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
        SourceArg::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        SourceArg::Inline(text) => Ok(text.clone()),
    }
}

fn usage(command: &str, problem: &str) -> CliError {
    let synopsis = match command {
        "meta" => "strudel-hl meta <file|-> [--pretty]",
        "mini" => "strudel-hl mini <text> [--base=N]",
        "tokens" => "strudel-hl tokens <file|->",
        "strings" => "strudel-hl strings <file|->",
        _ => "strudel-hl html <file|->",
    };
    CliError::Usage(format!("{problem}\nUsage: {synopsis}"))
}

//! Core DFQ parser implementation
//!
//! This module reads DFQ content line by line, classifies every line and hands it
//! to the keyed or binary line parser. The model is normalized once all lines are
//! consumed.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, warn};

use super::binary_line::{is_binary_line, parse_binary_line};
use super::context::ParserContext;
use super::kkey_line::{is_kkey_line, parse_kkey_line, should_ignore_kkey_line};
use super::stats::ParseResult;
use crate::app::services::object_model::AqdefObjectModel;
use crate::config::ParserOptions;
use crate::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser of DFQ documents into an [`AqdefObjectModel`]
///
/// - Keyed records are routed by the level of their K-key
/// - Binary lines are mapped onto value K-keys by characteristic type
/// - Unknown K-keys and unconvertible values are dropped with a warning
/// - Structural problems abort the parse with the offending line number
#[derive(Debug, Clone, Default)]
pub struct DfqParser {
    options: ParserOptions,
}

impl DfqParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Silence unknown K-key and conversion warnings for all keys
    pub fn set_suppress_invalid_kkey_logging(&mut self, suppress: bool) {
        self.options.suppress_invalid_kkey_logging = suppress;
    }

    /// Silence unknown K-key and conversion warnings for the given keys only
    pub fn set_suppress_invalid_kkey_logging_for<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.suppress_invalid_kkey_logging_for =
            keys.into_iter().map(Into::into).collect::<BTreeSet<_>>();
    }

    /// Parse DFQ text
    pub fn parse_str(&self, content: &str) -> Result<AqdefObjectModel> {
        Ok(self.parse_with_stats(content)?.model)
    }

    /// Parse DFQ text and report statistics
    pub fn parse_with_stats(&self, content: &str) -> Result<ParseResult> {
        self.parse_lines(content.lines().map(|line| Ok(line.to_string())))
    }

    /// Parse DFQ from a UTF-8 reader
    ///
    /// The reader is consumed and dropped on every exit path.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<AqdefObjectModel> {
        Ok(self.parse_reader_with_stats(reader)?.model)
    }

    /// Parse DFQ from a UTF-8 reader and report statistics
    pub fn parse_reader_with_stats<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        self.parse_lines(reader.lines())
    }

    /// Decode bytes with the given encoding label and parse them
    ///
    /// A byte order mark is stripped; when present it also overrides the label.
    pub fn parse_bytes(&self, bytes: &[u8], encoding_label: &str) -> Result<AqdefObjectModel> {
        Ok(self.parse_bytes_with_stats(bytes, encoding_label)?.model)
    }

    /// Decode bytes with the given encoding label, parse them and report statistics
    pub fn parse_bytes_with_stats(&self, bytes: &[u8], encoding_label: &str) -> Result<ParseResult> {
        let encoding = Encoding::for_label(encoding_label.as_bytes()).ok_or_else(|| {
            Error::encoding(format!("Unknown encoding label: {}", encoding_label))
        })?;

        let (content, used_encoding, had_errors) = encoding.decode(bytes);
        if had_errors {
            warn!(
                "Input is not valid {}, malformed sequences were replaced",
                used_encoding.name()
            );
        }
        debug!("Decoded {} bytes as {}", bytes.len(), used_encoding.name());

        self.parse_with_stats(&content)
    }

    /// Read, decode and parse a DFQ file
    pub fn parse_file(&self, path: &Path, encoding_label: &str) -> Result<ParseResult> {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read DFQ file {}", path.display()), e))?;
        self.parse_bytes_with_stats(&bytes, encoding_label)
    }

    /// Open and parse a UTF-8 DFQ file without reading it into memory first
    pub fn parse_utf8_file(&self, path: &Path) -> Result<ParseResult> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open DFQ file {}", path.display()), e))?;
        self.parse_reader_with_stats(BufReader::new(file))
    }

    fn parse_lines<I>(&self, lines: I) -> Result<ParseResult>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let mut model = AqdefObjectModel::new();
        let mut context = ParserContext::new(&self.options);

        for (position, line) in lines.enumerate() {
            let line_number = position + 1;
            context.begin_line(line_number);

            let line = line.map_err(|e| {
                Error::parse(
                    line_number,
                    Error::io(format!("Failed to read line {}", line_number), e),
                )
            })?;
            let line = if line_number == 1 {
                line.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                line.as_str()
            };

            self.parse_line(line, &mut model, &mut context)
                .map_err(|e| Error::parse(line_number, e))?;
        }

        model.normalize()?;

        let stats = context.into_stats();
        debug!(
            "Parsed {} lines ({} K-key, {} binary, {} discarded), dropped {} fields",
            stats.lines_read,
            stats.kkey_lines,
            stats.binary_lines,
            stats.discarded_lines,
            stats.dropped_fields()
        );

        Ok(ParseResult { model, stats })
    }

    fn parse_line(
        &self,
        line: &str,
        model: &mut AqdefObjectModel,
        context: &mut ParserContext<'_>,
    ) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if is_kkey_line(line) {
            if should_ignore_kkey_line(line) {
                context.stats_mut().ignored_lines += 1;
                return Ok(());
            }
            context.stats_mut().kkey_lines += 1;
            parse_kkey_line(line, model, context)
        } else if is_binary_line(line) {
            context.stats_mut().binary_lines += 1;
            parse_binary_line(line, model, context)
        } else {
            context.warn_discarded_line();
            Ok(())
        }
    }
}

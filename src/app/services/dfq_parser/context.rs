//! Per-parse state shared by the line parsers

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::stats::ParseStats;
use crate::app::models::{CharacteristicIndex, KKey, KKeyValue, PartIndex, ValueIndex};
use crate::config::ParserOptions;

/// Assigns value rows to measured-value fields
///
/// A value row of a characteristic ends as soon as one of its K-keys repeats: the
/// repeated key opens the next row. Rows are numbered from 1 per characteristic.
#[derive(Debug, Default)]
pub struct ValueIndexCounter {
    rows: HashMap<CharacteristicIndex, ValueRow>,
}

#[derive(Debug)]
struct ValueRow {
    index: u32,
    keys: HashSet<KKey>,
}

impl Default for ValueRow {
    fn default() -> Self {
        Self {
            index: 1,
            keys: HashSet::new(),
        }
    }
}

impl ValueIndexCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value index for the next occurrence of `key` on `characteristic`
    pub fn next_index(&mut self, characteristic: CharacteristicIndex, key: &KKey) -> ValueIndex {
        let row = self.rows.entry(characteristic).or_default();

        if row.keys.contains(key) {
            row.keys.clear();
            row.index += 1;
        }
        row.keys.insert(key.clone());

        ValueIndex::of(characteristic, row.index)
    }
}

/// Mutable state of a single parse
#[derive(Debug)]
pub struct ParserContext<'a> {
    options: &'a ParserOptions,
    current_line: usize,
    current_part_index: Option<PartIndex>,
    value_index_counter: ValueIndexCounter,
    stats: ParseStats,
}

impl<'a> ParserContext<'a> {
    pub fn new(options: &'a ParserOptions) -> Self {
        Self {
            options,
            current_line: 0,
            current_part_index: None,
            value_index_counter: ValueIndexCounter::new(),
            stats: ParseStats::new(),
        }
    }

    /// Move to the given 1-based line
    pub fn begin_line(&mut self, line: usize) {
        self.current_line = line;
        self.stats.lines_read = line;
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    /// Prefix of every diagnostic raised while parsing the current line
    pub fn line_log_context(&self) -> String {
        format!("Line {}:", self.current_line)
    }

    /// Part that characteristics and groups without explicit part are stored in
    ///
    /// Defaults to part 1 until a part K-key with a non-zero index has been read.
    pub fn current_part_index(&self) -> PartIndex {
        match self.current_part_index {
            Some(part) if !part.applies_to_all_parts() => part,
            _ => PartIndex(1),
        }
    }

    pub fn set_current_part_index(&mut self, part: PartIndex) {
        self.current_part_index = Some(part);
    }

    pub fn next_value_index(&mut self, characteristic: CharacteristicIndex, key: &KKey) -> ValueIndex {
        self.value_index_counter.next_index(characteristic, key)
    }

    pub fn stats_mut(&mut self) -> &mut ParseStats {
        &mut self.stats
    }

    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    /// Convert the text of a field using the K-key's converter
    ///
    /// Blank text yields `None`. An unknown K-key or a failed conversion is
    /// recorded, logged unless suppressed for the key, and also yields `None`.
    pub fn convert_value(&mut self, key: &KKey, text: &str) -> Option<KKeyValue> {
        if text.trim().is_empty() {
            return None;
        }

        let Some(metadata) = key.metadata() else {
            self.stats.unknown_kkeys += 1;
            if self.options.is_invalid_kkey_logging_enabled(key) {
                let message = format!(
                    "{} Unknown K-key: {}. Value will be discarded.",
                    self.line_log_context(),
                    key
                );
                self.warn(message);
            }
            return None;
        };

        match metadata.parse(text) {
            Ok(value) => value,
            Err(e) => {
                self.stats.conversion_failures += 1;
                if self.options.is_invalid_kkey_logging_enabled(key) {
                    let message = format!(
                        "{} Failed to convert value: {} of K-key: {} using converter: {}. The value will be discarded. Cause: {}",
                        self.line_log_context(),
                        text,
                        key,
                        metadata.converter().name(),
                        e.for_kkey(key.key())
                    );
                    self.warn(message);
                }
                None
            }
        }
    }

    /// Log a K-key whose level cannot be stored in the model
    pub fn warn_unknown_level(&mut self, key: &KKey) {
        if self.options.is_invalid_kkey_logging_enabled(key) {
            let message = format!(
                "{} Unknown level of K-key {}. Key will be ignored!",
                self.line_log_context(),
                key
            );
            self.warn(message);
        }
    }

    /// Log and count a line that is neither a K-key nor a binary record
    pub fn warn_discarded_line(&mut self) {
        self.stats.discarded_lines += 1;
        let message = format!(
            "{} Invalid line format. This line will be discarded.",
            self.line_log_context()
        );
        self.warn(message);
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.stats.warnings.push(message);
    }
}

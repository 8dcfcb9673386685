//! DFQ writer implementation
//!
//! Records are written in a fixed order: the characteristic count, then every part
//! with its characteristics, their values and the part's groups, then hierarchy
//! node definitions and finally node bindings. Within one entry the K-keys are
//! written in K-key order. A part without written values is introduced by a bare
//! `K1001/INDEX` record so that its characteristics are read back into it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::app::models::{Entries, KKey, KKeyValue, PartIndex};
use crate::app::services::object_model::AqdefObjectModel;
use crate::constants::{
    LINE_SEPARATOR, PART_SWITCH_KEY, TOTAL_CHARACTERISTIC_COUNT_KEY, VALUES_SEPARATOR,
};
use crate::{Error, Result};

/// Writer of [`AqdefObjectModel`] instances as DFQ
///
/// Custom (`KX…`) K-keys and catalog records stay in the model and are not written.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfqWriter;

impl DfqWriter {
    pub fn new() -> Self {
        Self
    }

    /// Normalize the model and write it to a string
    pub fn write_to_string(&self, model: &mut AqdefObjectModel) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(model, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| Error::encoding(format!("DFQ output is not valid UTF-8: {}", e)))
    }

    /// Normalize the model and write it to `writer`
    pub fn write_to<W: Write>(&self, model: &mut AqdefObjectModel, writer: W) -> Result<()> {
        model.normalize()?;
        self.write_normalized_to(model, writer)
    }

    /// Normalize the model and write it to a file, replacing any existing content
    pub fn write_file(&self, model: &mut AqdefObjectModel, path: &Path) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create DFQ file {}", path.display()), e))?;
        self.write_to(model, BufWriter::new(file))
    }

    /// Write a model that is already normalized
    ///
    /// Apply-to-all entries of a model that was not normalized would be written as
    /// index 0 records of a part, so callers must normalize first.
    pub fn write_normalized_to<W: Write>(&self, model: &AqdefObjectModel, writer: W) -> Result<()> {
        let mut out = RecordWriter::new(writer);

        out.record(
            TOTAL_CHARACTERISTIC_COUNT_KEY,
            None,
            &model.characteristic_count().to_string(),
        )?;

        // the parser stores records in part 1 until a part record is read
        let mut current_part = PartIndex(1);
        for part in model.parts() {
            let written = out.entries(part, part.index().index())?;
            let is_empty = model.characteristics(part.index()).next().is_none()
                && model.groups(part.index()).next().is_none();
            if written == 0 && (part.index() != current_part || is_empty) {
                out.part_switch(part.index())?;
            }
            current_part = part.index();

            for characteristic in model.characteristics(part.index()) {
                let characteristic_index = characteristic.index().index();
                out.entries(characteristic, characteristic_index)?;

                for value in model.values(characteristic.index()) {
                    // value records carry the characteristic index, rows are implicit
                    out.entries(value, characteristic_index)?;
                }
            }

            for group in model.groups(part.index()) {
                out.entries(group, group.index().index())?;
            }
        }

        let hierarchy = model.hierarchy();
        for entry in hierarchy.node_definitions().chain(hierarchy.node_bindings()) {
            out.record(
                entry.key().key(),
                Some(entry.index().index()),
                &entry.value().to_string(),
            )?;
        }

        out.finish()
    }
}

/// Line oriented output with record counting
struct RecordWriter<W: Write> {
    out: W,
    records: usize,
}

impl<W: Write> RecordWriter<W> {
    fn new(out: W) -> Self {
        Self { out, records: 0 }
    }

    /// Write the DFQ keys of `entries`, returning the number of records written
    fn entries<I>(&mut self, entries: &Entries<I>, index: u32) -> Result<usize> {
        let mut written = 0;
        for (key, value) in entries {
            if !key.should_be_written_to_dfq() {
                continue;
            }
            let text = format_value(key, value)?;
            self.record(key.key(), Some(index), &text)?;
            written += 1;
        }
        Ok(written)
    }

    /// Record without value that only moves the reader to `part`
    fn part_switch(&mut self, part: PartIndex) -> Result<()> {
        let line = format!("{}/{}{}", PART_SWITCH_KEY, part.index(), LINE_SEPARATOR);
        self.write_line(&line)
    }

    fn record(&mut self, key: &str, index: Option<u32>, text: &str) -> Result<()> {
        let line = match index {
            Some(index) => format!("{}/{}{}{}{}", key, index, VALUES_SEPARATOR, text, LINE_SEPARATOR),
            None => format!("{}{}{}{}", key, VALUES_SEPARATOR, text, LINE_SEPARATOR),
        };
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.out
            .write_all(line.as_bytes())
            .map_err(|e| Error::io("Failed to write DFQ record", e))?;
        self.records += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| Error::io("Failed to flush DFQ output", e))?;
        debug!("Wrote {} DFQ records", self.records);
        Ok(())
    }
}

/// DFQ text of a value, trimmed; a converter yielding nothing writes an empty value
fn format_value(key: &KKey, value: &KKeyValue) -> Result<String> {
    let metadata = key
        .metadata()
        .ok_or_else(|| Error::unknown_kkey(key.key()))?;
    let text = metadata.format(value).map_err(|e| e.for_kkey(key.key()))?;
    Ok(text.map(|text| text.trim().to_string()).unwrap_or_default())
}

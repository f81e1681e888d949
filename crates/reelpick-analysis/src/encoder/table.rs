//! The persisted decision table.
//!
//! ## Format
//!
//! ```csv
//! movie,runtime_bin_very-short,runtime_bin_short,...,genre_Action,genre_Comedy,...
//! Heat,0,0,0,1,0,0,1,0,...
//! ```
//!
//! - First column is `movie`: the title, a key into the record store.
//! - Remaining columns are the vocabulary tokens, in vocabulary order.
//! - Every cell after the first is `0` or `1`.
//!
//! Column order is part of the format. A reader rebuilding the trie from
//! this file gets exactly the vocabulary that wrote it.

use std::io::{Read, Write};
use std::path::Path;

use reelpick_core::constants::DECISION_TABLE_PAYLOAD_COLUMN;
use reelpick_core::errors::EncodingError;
use reelpick_core::events::EventDispatcher;
use reelpick_core::RecordStore;

use super::attribute_encoder::{AttributeEncoder, EncodeDiagnostics};
use super::token::AttributeToken;
use super::vocabulary::Vocabulary;

/// One movie row: its title and one cell per vocabulary token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRow {
    pub title: String,
    pub cells: Vec<u8>,
}

/// Every movie's one-hot encoding under a single vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTable {
    vocabulary: Vocabulary,
    rows: Vec<EncodedRow>,
}

impl EncodedTable {
    /// Encode every record in `store`, in store order.
    pub fn from_store(
        store: &RecordStore,
        encoder: &AttributeEncoder,
        events: &EventDispatcher,
    ) -> (Self, EncodeDiagnostics) {
        let (encoded, diagnostics) = encoder.encode_store(store, events);
        let vocabulary = encoder.vocabulary().clone();
        let rows = encoded
            .into_iter()
            .filter_map(|movie| {
                let title = store.get(movie.id)?.title.clone();
                let mut cells = vec![0u8; vocabulary.len()];
                for token in &movie.tokens {
                    if let Some(position) = vocabulary.position(token.as_str()) {
                        cells[position] = 1;
                    }
                }
                Some(EncodedRow { title, cells })
            })
            .collect();
        (Self { vocabulary, rows }, diagnostics)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[EncodedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Active tokens of a row, in vocabulary order.
    pub fn active_tokens(&self, row: &EncodedRow) -> Vec<AttributeToken> {
        row.cells
            .iter()
            .zip(self.vocabulary.iter())
            .filter(|(cell, _)| **cell == 1)
            .map(|(_, token)| token.clone())
            .collect()
    }

    /// Write the table to `path`.
    pub fn write_csv(&self, path: &Path) -> Result<(), EncodingError> {
        let file = std::fs::File::create(path).map_err(|source| EncodingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.write_to(file)?;
        tracing::info!(
            path = %path.display(),
            rows = self.rows.len(),
            vocabulary_size = self.vocabulary.len(),
            "decision table written"
        );
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), EncodingError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(
            std::iter::once(DECISION_TABLE_PAYLOAD_COLUMN)
                .chain(self.vocabulary.iter().map(AttributeToken::as_str)),
        )?;
        for row in &self.rows {
            let mut record = Vec::with_capacity(row.cells.len() + 1);
            record.push(row.title.clone());
            record.extend(row.cells.iter().map(u8::to_string));
            writer.write_record(&record)?;
        }
        writer.flush().map_err(|source| EncodingError::Io {
            path: "<writer>".to_string(),
            source,
        })?;
        Ok(())
    }

    /// Read a table from `path`. With `expected`, the header must match it
    /// column for column.
    pub fn read_csv(path: &Path, expected: Option<&Vocabulary>) -> Result<Self, EncodingError> {
        let file = std::fs::File::open(path).map_err(|source| EncodingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::read_from(file, expected)?;
        tracing::info!(
            path = %path.display(),
            rows = table.rows.len(),
            "decision table read"
        );
        Ok(table)
    }

    pub fn read_from<R: Read>(reader: R, expected: Option<&Vocabulary>) -> Result<Self, EncodingError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        match headers.get(0).map(str::trim) {
            Some(DECISION_TABLE_PAYLOAD_COLUMN) => {}
            found => {
                return Err(EncodingError::VocabularyMismatch {
                    position: 0,
                    expected: DECISION_TABLE_PAYLOAD_COLUMN.to_string(),
                    found: found.unwrap_or("<end>").to_string(),
                })
            }
        }

        let tokens = headers
            .iter()
            .skip(1)
            .map(str::parse::<AttributeToken>)
            .collect::<Result<Vec<_>, _>>()?;
        let vocabulary = Vocabulary::from_tokens(tokens)?;
        if let Some(expected) = expected {
            vocabulary.ensure_matches(expected)?;
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            // +2 for the header row and 1-indexing
            let row_number = row_idx + 2;
            let title = record.get(0).unwrap_or("").trim().to_string();
            if title.is_empty() {
                return Err(EncodingError::MalformedTableRow {
                    row: row_number,
                    message: "empty movie cell".to_string(),
                });
            }
            let cells = record
                .iter()
                .skip(1)
                .map(|cell| match cell.trim() {
                    "0" => Ok(0u8),
                    "1" => Ok(1u8),
                    other => Err(EncodingError::MalformedTableRow {
                        row: row_number,
                        message: format!("cell {other:?} is not 0 or 1"),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(EncodedRow { title, cells });
        }

        Ok(Self { vocabulary, rows })
    }
}

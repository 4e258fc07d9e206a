use std::path::{Path, PathBuf};

use crate::error::{ChatError, Result};

/// One perfume row. Missing cells are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerfumeRecord {
    pub name: String,
    pub brand: String,
    pub notes: String,
}

impl PerfumeRecord {
    pub fn new(name: impl Into<String>, brand: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            notes: notes.into(),
        }
    }
}

/// Source of perfume records, read once at startup.
pub trait DatasetProvider {
    fn load(&self) -> Result<Vec<PerfumeRecord>>;
}

impl DatasetProvider for Vec<PerfumeRecord> {
    fn load(&self) -> Result<Vec<PerfumeRecord>> {
        Ok(self.clone())
    }
}

/// A CSV file with `Name`, `Brand` and `Notes` columns, ISO-8859-1 encoded.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses CSV from any reader. Short rows keep empty cells; rows with
    /// more fields than the header, or that fail to parse, are skipped.
    pub fn read_from<R: std::io::Read>(reader: R) -> Result<Vec<PerfumeRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.byte_headers()?.iter().map(latin1).collect();
        let column = |wanted: &str| headers.iter().position(|h| h.trim() == wanted);
        let (Some(name_col), Some(notes_col)) = (column("Name"), column("Notes")) else {
            return Err(ChatError::configuration(format!(
                "dataset must have 'Name' and 'Notes' columns, found {headers:?}"
            )));
        };
        let brand_col = column("Brand");

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (line, row) in reader.byte_records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    log::warn!("Skipping malformed dataset row #{}: {}", line + 2, err);
                    skipped += 1;
                    continue;
                }
            };
            if row.len() > headers.len() {
                log::warn!(
                    "Skipping dataset row #{}: {} fields, expected {}",
                    line + 2,
                    row.len(),
                    headers.len()
                );
                skipped += 1;
                continue;
            }
            let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map(latin1).unwrap_or_default();
            records.push(PerfumeRecord {
                name: cell(Some(name_col)),
                brand: cell(brand_col),
                notes: cell(Some(notes_col)),
            });
        }

        if skipped > 0 {
            log::warn!("Skipped {} malformed dataset rows", skipped);
        }
        Ok(records)
    }
}

impl DatasetProvider for CsvDataset {
    fn load(&self) -> Result<Vec<PerfumeRecord>> {
        log::info!("Loading perfume dataset from {:?}...", self.path);
        let file = std::fs::File::open(&self.path)?;
        let records = Self::read_from(file)?;
        log::info!("Loaded {} perfumes.", records.len());
        Ok(records)
    }
}

// ISO-8859-1 maps each byte to the code point of the same value.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

//! Dataset Loader
//!
//! Reads the two source CSV files into in-memory tables. Loading happens
//! exactly once at start-up and any failure is fatal; after that the tables
//! are read-only for the process lifetime.
//!
//! The column headers are a fixed parsing contract: the happiness file must
//! carry "Country name", "Code", "year" and the six indicator columns, the
//! code file must carry "Code3" and "Country".

use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{CodeTable, CountryCodeEntry, HappinessRecord, HappinessTable};

/// Both source tables behind one immutable handle
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub happiness: HappinessTable,
    pub codes: CodeTable,
}

impl Dataset {
    /// Load both tables from disk.
    ///
    /// Invoked once at start-up. A missing or malformed file is an error and
    /// the caller is expected to abort rather than serve a partial dataset.
    pub fn load(happiness_path: &Path, codes_path: &Path) -> DatasetResult<Dataset> {
        let happiness = load_happiness_file(happiness_path)?;
        let codes = load_codes_file(codes_path)?;

        tracing::info!(
            happiness_rows = happiness.len(),
            code_entries = codes.len(),
            "Dataset loaded"
        );

        Ok(Dataset { happiness, codes })
    }

    /// Load both tables from in-memory CSV text (used by tests)
    pub fn from_csv_str(happiness_csv: &str, codes_csv: &str) -> DatasetResult<Dataset> {
        Ok(Dataset {
            happiness: read_happiness(happiness_csv.as_bytes(), Path::new("<happiness>"))?,
            codes: read_codes(codes_csv.as_bytes(), Path::new("<codes>"))?,
        })
    }
}

/// Load the happiness table from a CSV file
pub fn load_happiness_file(path: &Path) -> DatasetResult<HappinessTable> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    read_happiness(file, path)
}

/// Load the country-code table from a CSV file
pub fn load_codes_file(path: &Path) -> DatasetResult<CodeTable> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    read_codes(file, path)
}

fn read_happiness<R: std::io::Read>(reader: R, path: &Path) -> DatasetResult<HappinessTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<HappinessRecord>() {
        let record = result.map_err(|e| DatasetError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        rows.push(record);
    }

    Ok(HappinessTable::new(rows))
}

fn read_codes<R: std::io::Read>(reader: R, path: &Path) -> DatasetResult<CodeTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize::<CountryCodeEntry>() {
        let mut entry: CountryCodeEntry = result.map_err(|e| DatasetError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        // Some rows in the source file carry stray quote characters around
        // the 3-letter code
        entry.code = entry.code.replace('"', "");
        entries.push(entry);
    }

    Ok(CodeTable::new(entries))
}

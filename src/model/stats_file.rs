//! Loading the `.stats.<ext>.data.jsonl` file qsv writes next to a data file

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::{QsvCommand, Stats};
use crate::error::{QsvError, QsvResult};
use crate::invoker::Invoker;
use crate::model::{DataFile, StatsRecord};

/// Read a statistics JSONL file, one record per non-blank line
///
/// Returns [`QsvError::FileNotFound`] when `path` does not exist and
/// [`QsvError::MalformedStatsLine`] with a 1-based line number for the first
/// line that is not valid UTF-8 or does not decode. Nothing is returned on
/// failure.
pub fn load_stats(path: &Path) -> QsvResult<Vec<StatsRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => QsvError::FileNotFound(path.to_path_buf()),
        _ => QsvError::io(path, e),
    })?;

    debug!(path = %path.display(), "Loading stats file");
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| QsvError::io(path, e))?;
        let malformed = |message: String| QsvError::MalformedStatsLine {
            path: path.to_path_buf(),
            line: index + 1,
            message,
        };

        let text = std::str::from_utf8(&line).map_err(|e| malformed(e.to_string()))?;
        let trimmed = text.trim();

        if trimmed.is_empty() {
            continue;
        }

        let record = serde_json::from_str::<StatsRecord>(trimmed)
            .map_err(|e| malformed(e.to_string()))?;
        records.push(record);
    }

    info!(path = %path.display(), records = records.len(), "Loaded stats file");
    Ok(records)
}

/// Statistics file belonging to a [`DataFile`]
///
/// Records are empty until [`StatsFile::load`] is called. Every load
/// discards what was loaded before and re-reads the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsFile {
    pub datafile: DataFile,
    #[serde(skip)]
    records: Vec<StatsRecord>,
}

impl StatsFile {
    pub fn new(datafile: DataFile) -> Self {
        Self {
            datafile,
            records: Vec::new(),
        }
    }

    /// Run `qsv stats --stats-jsonl` on `datafile` and load the result
    ///
    /// `stats` supplies every other option; `stats_jsonl` is forced on.
    pub fn generate(datafile: DataFile, stats: &Stats, invoker: &Invoker) -> QsvResult<Self> {
        let input = datafile.filepath().to_string_lossy().into_owned();
        stats
            .clone()
            .stats_jsonl(true)
            .run_with(invoker, &[input.as_str()])?;

        let mut file = Self::new(datafile);
        file.load()?;
        Ok(file)
    }

    /// `{stem}.stats.{extension}.data.jsonl`
    pub fn jsonl_filename(&self) -> String {
        format!(
            "{}.stats.{}.data.jsonl",
            self.datafile.stem(),
            self.datafile.extension()
        )
    }

    /// The statistics file, next to the data file
    pub fn jsonl_filepath(&self) -> PathBuf {
        self.datafile.dirpath().join(self.jsonl_filename())
    }

    pub fn exists(&self) -> bool {
        self.jsonl_filepath().is_file()
    }

    /// (Re)load the records from disk
    ///
    /// On error the previously loaded records are gone as well.
    pub fn load(&mut self) -> QsvResult<&[StatsRecord]> {
        self.records.clear();
        self.records = load_stats(&self.jsonl_filepath())?;
        Ok(&self.records)
    }

    /// Records from the last successful load, in file order
    pub fn records(&self) -> &[StatsRecord] {
        &self.records
    }

    /// Loaded record for the column named `field`
    pub fn record(&self, field: &str) -> Option<&StatsRecord> {
        self.records.iter().find(|record| record.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataProduct;

    #[test]
    fn test_filename_and_path() {
        let datafile = DataFile::new(DataProduct::new("/data"), "Sales.CSV").with_subpath("raw");
        let stats = StatsFile::new(datafile);
        assert_eq!(stats.jsonl_filename(), "Sales.stats.csv.data.jsonl");
        assert_eq!(
            stats.jsonl_filepath(),
            PathBuf::from("/data/raw/Sales.stats.csv.data.jsonl")
        );
        assert!(stats.records().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let datafile = DataFile::new(DataProduct::new("/nonexistent-qsv-sdk"), "a.csv");
        let mut stats = StatsFile::new(datafile);
        assert!(!stats.exists());
        let err = stats.load().unwrap_err();
        assert!(matches!(err, QsvError::FileNotFound(_)));
    }
}

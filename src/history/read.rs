use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::check::CheckResult;
use crate::config::Config;

use super::error::HistoryError;
use super::paths::StorePaths;
use super::reader::{HistoryIndex, HistoryReader};

/// History stored as one JSON file per check run plus an `index.json`.
#[derive(Debug, Clone)]
pub struct FsHistoryReader {
    paths: StorePaths,
    max_scan_records: usize,
}

impl FsHistoryReader {
    pub fn new(dir: impl AsRef<Path>, max_scan_records: usize) -> Self {
        Self {
            paths: StorePaths::new(dir.as_ref()),
            max_scan_records: max_scan_records.max(1),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.history.dir, config.history.max_scan_records)
    }

    pub fn dir(&self) -> &Path {
        &self.paths.root
    }
}

impl HistoryReader for FsHistoryReader {
    fn fetch(&self, record: &str) -> Result<Vec<CheckResult>, HistoryError> {
        let path = self.paths.record_file(record)?;
        match read_json_file(&path)? {
            Some(results) => Ok(results),
            None => Err(HistoryError::NotFound {
                name: record.to_string(),
            }),
        }
    }

    fn list_index(&self) -> Result<HistoryIndex, HistoryError> {
        Ok(read_json_file(&self.paths.index_file)?.unwrap_or_default())
    }

    fn max_scan_records(&self) -> usize {
        self.max_scan_records
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, HistoryError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(HistoryError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    serde_json::from_slice(&raw)
        .map(Some)
        .map_err(|source| HistoryError::Decode {
            path: path.display().to_string(),
            source,
        })
}

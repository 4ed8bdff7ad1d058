use std::path::{Component, Path, PathBuf};

use super::error::HistoryError;

pub(crate) const INDEX_FILE_NAME: &str = "index.json";

#[derive(Debug, Clone)]
pub(crate) struct StorePaths {
    pub(crate) root: PathBuf,
    pub(crate) index_file: PathBuf,
}

impl StorePaths {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            index_file: root.join(INDEX_FILE_NAME),
            root,
        }
    }

    /// Path of a record file; names must stay inside the store directory.
    pub(crate) fn record_file(&self, name: &str) -> Result<PathBuf, HistoryError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if name != INDEX_FILE_NAME => {
                Ok(self.root.join(name))
            }
            _ => Err(HistoryError::InvalidName {
                name: name.to_string(),
            }),
        }
    }
}

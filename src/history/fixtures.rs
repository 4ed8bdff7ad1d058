use std::fs;
use std::path::Path;

use crate::check::CheckResult;

use super::{HistoryIndex, INDEX_FILE_NAME};

/// Writes one record file and registers it in the store index.
pub(crate) fn write_record(dir: &Path, name: &str, timestamp: i64, results: &[CheckResult]) {
    fs::create_dir_all(dir).expect("history dir should be created");

    let record = serde_json::to_vec(results).expect("record should encode");
    fs::write(dir.join(name), record).expect("record should be written");

    let index_path = dir.join(INDEX_FILE_NAME);
    let mut index: HistoryIndex = fs::read(&index_path)
        .ok()
        .and_then(|raw| serde_json::from_slice(&raw).ok())
        .unwrap_or_default();
    index.insert(name.to_string(), timestamp);
    fs::write(
        &index_path,
        serde_json::to_vec(&index).expect("index should encode"),
    )
    .expect("index should be written");
}

use std::collections::HashMap;

use crate::check::CheckResult;

use super::error::HistoryError;

/// Record name → record timestamp (ns).
pub type HistoryIndex = HashMap<String, i64>;

/// Read-only view over stored check records.
pub trait HistoryReader {
    fn fetch(&self, record: &str) -> Result<Vec<CheckResult>, HistoryError>;

    fn list_index(&self) -> Result<HistoryIndex, HistoryError>;

    /// Upper bound on records opened by one `find_last_working_time` call.
    fn max_scan_records(&self) -> usize {
        usize::MAX
    }

    /// Timestamp of the most recent healthy observation of `current.endpoint`
    /// strictly before `current`, or `None` if there is none within the scan bound.
    fn find_last_working_time(&self, current: &CheckResult) -> Result<Option<i64>, HistoryError> {
        let index = self.list_index()?;

        for (name, _) in newest_records(&index, self.max_scan_records()) {
            let results = match self.fetch(&name) {
                Ok(results) => results,
                Err(HistoryError::NotFound { .. }) => {
                    log::debug!("history record listed but missing name={}", name);
                    continue;
                }
                Err(error) => return Err(error),
            };

            let observation = results.iter().find(|result| {
                result.endpoint == current.endpoint && result.timestamp < current.timestamp
            });

            if let Some(observation) = observation
                && observation.healthy
            {
                return Ok(Some(observation.timestamp));
            }
        }

        Ok(None)
    }
}

/// Up to `limit` index entries, newest first. Equal timestamps order by name, descending.
pub fn newest_records(index: &HistoryIndex, limit: usize) -> Vec<(String, i64)> {
    let mut records = index
        .iter()
        .map(|(name, timestamp)| (name.clone(), *timestamp))
        .collect::<Vec<_>>();

    records.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| right.0.cmp(&left.0)));
    records.truncate(limit);
    records
}

use super::model::CheckResult;

/// Outcome of looking up the previous observation of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correlation<'a> {
    Found(&'a CheckResult),
    NotFound,
}

/// First result in `previous` with the same endpoint as `current`.
///
/// If the previous batch holds several entries for one endpoint the earliest
/// one in batch order wins.
pub fn find_previous<'a>(current: &CheckResult, previous: &'a [CheckResult]) -> Correlation<'a> {
    previous
        .iter()
        .find(|candidate| candidate.endpoint == current.endpoint)
        .map_or(Correlation::NotFound, Correlation::Found)
}

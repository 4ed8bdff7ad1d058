mod correlate;
mod model;

pub use correlate::{Correlation, find_previous};
pub use model::{CheckResult, Status};

mod dispatcher;
mod error;

#[allow(unused_imports)]
pub use dispatcher::{BatchPlan, Dispatcher, PlannedAlert, plan_batch};
#[allow(unused_imports)]
pub use error::{ErrorKind, ErrorSet, NotifyError};

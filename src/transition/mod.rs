mod engine;

pub use engine::{Decision, Downtime, decide};

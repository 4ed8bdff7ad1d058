mod error;
mod paths;
mod read;
mod reader;

pub use error::HistoryError;
pub(crate) use paths::INDEX_FILE_NAME;
pub use read::FsHistoryReader;
#[allow(unused_imports)]
pub use reader::{HistoryIndex, HistoryReader, newest_records};

#[cfg(test)]
pub(crate) mod fixtures;

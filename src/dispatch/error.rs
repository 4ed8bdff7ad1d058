use std::fmt;

use thiserror::Error;

use crate::channel::ChannelError;
use crate::history::HistoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LookupFailure,
    DeliveryFailure,
    EncodingFailure,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("downtime lookup failed for {endpoint}: {source}")]
    Lookup {
        endpoint: String,
        source: HistoryError,
    },
    #[error("{channel} notification failed for {endpoint}: {source}")]
    Channel {
        channel: &'static str,
        endpoint: String,
        source: ChannelError,
    },
}

impl NotifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotifyError::Lookup { .. } => ErrorKind::LookupFailure,
            NotifyError::Channel {
                source: ChannelError::Encoding(_),
                ..
            } => ErrorKind::EncodingFailure,
            NotifyError::Channel { .. } => ErrorKind::DeliveryFailure,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            NotifyError::Lookup { endpoint, .. } | NotifyError::Channel { endpoint, .. } => {
                endpoint
            }
        }
    }
}

/// Every failure collected while processing one batch, in processing order.
#[derive(Debug, Default)]
pub struct ErrorSet {
    errors: Vec<NotifyError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: NotifyError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, other: ErrorSet) {
        self.errors.extend(other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotifyError> {
        self.errors.iter()
    }

    pub fn into_result(self) -> Result<(), ErrorSet> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} notification error(s)", self.errors.len())?;
        for (position, error) in self.errors.iter().enumerate() {
            write!(f, "\n  {}. {}", position + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorSet {}

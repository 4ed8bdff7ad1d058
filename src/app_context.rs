use std::sync::Arc;

use tokio::sync::{Mutex, Notify};

use crate::channel::{ActiveChannel, ChannelError, channels_from_config};
use crate::config::Config;
use crate::history::FsHistoryReader;

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub history: Arc<FsHistoryReader>,
    pub channels: Arc<Vec<ActiveChannel>>,
    pub last_processed: Arc<Mutex<Option<String>>>,
    pub index_update_notify: Arc<Notify>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, ChannelError> {
        let channels = channels_from_config(&config)?;
        Ok(Self {
            history: Arc::new(FsHistoryReader::from_config(&config)),
            channels: Arc::new(channels),
            last_processed: Arc::new(Mutex::new(None)),
            index_update_notify: Arc::new(Notify::new()),
            config,
        })
    }
}

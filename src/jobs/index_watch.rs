use std::ffi::OsStr;

use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::app_context::AppContext;
use crate::history::INDEX_FILE_NAME;

fn is_index_update(event: &Event) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );

    relevant_kind
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(OsStr::new(INDEX_FILE_NAME)))
}

pub(super) fn start_index_watch_job(app_context: AppContext) {
    tokio::spawn(async move {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let history_dir = app_context.history.dir().to_path_buf();
        let mut watcher = match RecommendedWatcher::new(
            move |result| {
                let _ = tx.send(result);
            },
            NotifyConfig::default(),
        ) {
            Ok(watcher) => watcher,
            Err(error) => {
                log::warn!("index watch disabled, polling only: watcher init failed: {}", error);
                return;
            }
        };

        if let Err(error) = watcher.watch(&history_dir, RecursiveMode::NonRecursive) {
            log::warn!(
                "index watch disabled, polling only: failed to watch {}: {}",
                history_dir.display(),
                error
            );
            return;
        }

        log::info!("index_watch_started dir={}", history_dir.display());

        while let Some(event_result) = rx.recv().await {
            let event = match event_result {
                Ok(event) => event,
                Err(error) => {
                    log::warn!("index watch event error: {}", error);
                    continue;
                }
            };

            if is_index_update(&event) {
                app_context.index_update_notify.notify_one();
            }
        }
    });
}

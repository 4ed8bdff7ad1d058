use crate::app_context::AppContext;

mod history_poll;
mod index_watch;

pub use history_poll::mark_existing_processed;

pub fn start_background_jobs(app_context: AppContext) {
    history_poll::start_history_poll_job(app_context.clone());
    index_watch::start_index_watch_job(app_context);
}

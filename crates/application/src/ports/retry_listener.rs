/// Notified each time an attempt times out and another one is about to start.
pub trait RetryListener: Send + Sync {
    fn on_retry(&self, retry: u32, retries_left: u32);
}

/// Port for user-visible notifications (toasts in the dashboard shell).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Transient user-facing messages (the toast of the dialog).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        log::debug!("Showing success notification: {message}");
        println!("[ok] {message}");
    }

    fn error(&self, message: &str) {
        log::debug!("Showing error notification: {message}");
        println!("[error] {message}");
    }
}

//! User-facing alerts.

/// Blocking, user-visible notification surface.
pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}

/// Alerter that writes to the log. Used when the embedder supplies none.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlerter;

impl Alerter for LogAlerter {
    fn alert(&self, message: &str) {
        log::warn!("alert: {}", message);
    }
}

use notify_rust::Notification;

use crate::{Res, error::AppError};

/// Shows a short message to the user outside the menu.
pub trait Notifier {
    fn notify(&self, body: &str, title: &str) -> Res<()>;
}

/// Desktop notifications through the platform's notification service.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        DesktopNotifier {
            app_name: app_name.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, body: &str, title: &str) -> Res<()> {
        Notification::new()
            .appname(&self.app_name)
            .summary(title)
            .body(body)
            .show()
            .map(|_| ())
            .map_err(|e| AppError::Notify(e.to_string()))
    }
}

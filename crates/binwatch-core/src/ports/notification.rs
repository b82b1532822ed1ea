use crate::IconAsset;

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Icon shown alongside the message.
    pub icon: IconAsset,
}

impl Notification {
    /// Create a notification.
    pub fn new(title: impl Into<String>, message: impl Into<String>, icon: IconAsset) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon,
        }
    }
}

use std::time::Duration;

use serde::Serialize;

pub const ERROR_TITLE: &str = "Something went wrong.";

/// How long an error toast stays on screen.
pub const ERROR_DURATION: Duration = Duration::from_millis(9000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Error,
}

/// A dismissible, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub status: NotificationStatus,
    #[serde(rename = "durationMs", serialize_with = "as_millis")]
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_owned(),
            description: description.into(),
            status: NotificationStatus::Error,
            duration: ERROR_DURATION,
            closable: true,
        }
    }
}

fn as_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

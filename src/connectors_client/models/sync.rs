use serde::Serialize;

pub const NOW_SYNCHRONIZING_LABEL: &str = "Now synchronizing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncIndicator {
    Yes,
    No,
    Waiting,
}

/// The sync trigger of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncControl {
    Button { label: String },
    /// Non-clickable placeholder keeping the button's former label.
    Disabled { label: String },
}

/// Optimistic look of a row once the user asked it to sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncingRow {
    pub connector_name: String,
    pub indicator: SyncIndicator,
    pub last_sync: String,
    pub control: SyncControl,
}

impl SyncIndicator {
    /// `Yes` once the connector has a real last-sync timestamp.
    pub fn from_last_sync(last_sync: Option<i64>) -> Self {
        match last_sync {
            Some(ts) if ts > 0 => SyncIndicator::Yes,
            _ => SyncIndicator::No,
        }
    }
}

impl SyncControl {
    pub fn label(&self) -> &str {
        match self {
            SyncControl::Button { label } | SyncControl::Disabled { label } => label,
        }
    }
}

impl SyncingRow {
    pub fn new(connector_name: &str, previous_label: &str) -> Self {
        Self {
            connector_name: connector_name.to_string(),
            indicator: SyncIndicator::Waiting,
            last_sync: NOW_SYNCHRONIZING_LABEL.to_string(),
            control: SyncControl::Disabled {
                label: previous_label.to_string(),
            },
        }
    }
}

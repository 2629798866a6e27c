mod connector;
mod history;
mod settings;
mod sync;

pub use connector::{ConnectorRow, ConnectorsDialog, DeleteConfirm, SYNC_NOW_LABEL};
pub use history::{HistoryView, UpdateRow};
pub use settings::{ChannelOption, SettingsForm};
pub use sync::{SyncControl, SyncIndicator, SyncingRow, NOW_SYNCHRONIZING_LABEL};

//! Line-oriented bridge between the dialog controller and a frontend process.
//!
//! Rendering calls become one JSON object per line on the output; user
//! actions arrive as whitespace-separated commands, one per line.

use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

use crate::connectors_client::models::{
    ConnectorsDialog, DeleteConfirm, HistoryView, SettingsForm, SyncingRow,
};
use crate::connectors_client::{ConnectorsApi, SourceCatalog};
use crate::manager::{ConnectorManager, DialogView, RenderMode, RowHandle};
use crate::types::ManagerError;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum BridgeMessage<'a> {
    Connectors {
        mode: RenderMode,
        dialog: &'a ConnectorsDialog,
    },
    Syncing {
        row: RowHandle,
        state: &'a SyncingRow,
    },
    DeleteConfirm {
        confirm: &'a DeleteConfirm,
    },
    DeleteConfirmClosed,
    Settings {
        form: &'a SettingsForm,
    },
    History {
        history: &'a HistoryView,
    },
}

/// Dialog view writing every render as a JSON line.
pub struct JsonLinesView<W> {
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> JsonLinesView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }

    fn emit(&self, message: &BridgeMessage<'_>) {
        let Ok(mut out) = self.out.lock() else {
            warn!("Bridge output lock poisoned");
            return;
        };
        let written = serde_json::to_writer(&mut *out, message)
            .map_err(ManagerError::Json)
            .and_then(|()| writeln!(out).map_err(ManagerError::Io))
            .and_then(|()| out.flush().map_err(ManagerError::Io));
        if let Err(err) = written {
            warn!(error = ?err, "Failed to write bridge message");
        }
    }
}

impl<W: Write + Send + 'static> DialogView for JsonLinesView<W> {
    fn render_connectors(&self, dialog: &ConnectorsDialog, mode: RenderMode) -> Vec<RowHandle> {
        self.emit(&BridgeMessage::Connectors { mode, dialog });
        (0..dialog.connectors.len()).map(RowHandle).collect()
    }

    fn show_syncing(&self, row: RowHandle, state: &SyncingRow) {
        self.emit(&BridgeMessage::Syncing { row, state });
    }

    fn show_delete_confirm(&self, confirm: &DeleteConfirm) {
        self.emit(&BridgeMessage::DeleteConfirm { confirm });
    }

    fn close_delete_confirm(&self) {
        self.emit(&BridgeMessage::DeleteConfirmClosed);
    }

    fn show_settings(&self, form: &SettingsForm) {
        self.emit(&BridgeMessage::Settings { form });
    }

    fn show_history(&self, history: &HistoryView) {
        self.emit(&BridgeMessage::History { history });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Sync(String),
    SyncAll,
    Delete(String),
    ConfirmDelete,
    CancelDelete,
    Settings(String),
    Toggle { channel: String, checked: bool },
    CloseSettings,
    History(String),
    Quit,
}

impl FromStr for Command {
    type Err = ManagerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| ManagerError::InvalidCommand("empty line".to_string()))?;
        let arg = parts.next();
        let missing = || ManagerError::InvalidCommand(format!("`{verb}` needs a connector"));

        let command = match verb {
            "open" => Command::Open,
            "close" => Command::Close,
            "sync" => Command::Sync(arg.ok_or_else(missing)?.to_string()),
            "sync-all" => Command::SyncAll,
            "delete" => Command::Delete(arg.ok_or_else(missing)?.to_string()),
            "confirm" => Command::ConfirmDelete,
            "cancel" => Command::CancelDelete,
            "settings" => Command::Settings(arg.ok_or_else(missing)?.to_string()),
            "toggle" => {
                let channel = arg.ok_or_else(|| {
                    ManagerError::InvalidCommand("`toggle` needs a channel".into())
                })?;
                let checked = match parts.next() {
                    Some("on") => true,
                    Some("off") => false,
                    other => {
                        return Err(ManagerError::InvalidCommand(format!(
                            "`toggle` expects on|off, got {other:?}"
                        )))
                    }
                };
                Command::Toggle {
                    channel: channel.to_string(),
                    checked,
                }
            }
            "close-settings" => Command::CloseSettings,
            "history" => Command::History(arg.ok_or_else(missing)?.to_string()),
            "quit" | "exit" => Command::Quit,
            other => return Err(ManagerError::InvalidCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Runs one command; returns false once the bridge should stop.
pub async fn dispatch<A, C, V>(
    manager: &ConnectorManager<A, C, V>,
    command: Command,
) -> Result<bool, ManagerError>
where
    A: ConnectorsApi,
    C: SourceCatalog,
    V: DialogView,
{
    match command {
        Command::Open => manager.open().await?,
        Command::Close => manager.close().await,
        Command::Sync(name) => {
            manager.sync_one(&name).await?;
        }
        Command::SyncAll => manager.sync_all().await,
        Command::Delete(name) => manager.request_delete(&name).await?,
        Command::ConfirmDelete => manager.confirm_delete().await?,
        Command::CancelDelete => manager.cancel_delete().await?,
        Command::Settings(name) => manager.edit_channels(&name).await?,
        Command::Toggle { channel, checked } => manager.toggle_channel(&channel, checked).await?,
        Command::CloseSettings => manager.close_settings().await,
        Command::History(name) => manager.view_history(&name).await?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

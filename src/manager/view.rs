use serde::Serialize;

use crate::connectors_client::models::{
    ConnectorsDialog, DeleteConfirm, HistoryView, SettingsForm, SyncingRow,
};

/// Opaque handle of a rendered connector row, issued by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RowHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Fresh dialog.
    Build,
    /// Replace the contents of the open dialog, keeping its scroll position.
    Merge,
}

/// Modal widget and templates the dialog renders into.
pub trait DialogView: Send + Sync + 'static {
    /// Renders the list and returns one handle per row, in row order.
    fn render_connectors(&self, dialog: &ConnectorsDialog, mode: RenderMode) -> Vec<RowHandle>;

    fn show_syncing(&self, row: RowHandle, state: &SyncingRow);

    fn show_delete_confirm(&self, confirm: &DeleteConfirm);

    fn close_delete_confirm(&self);

    fn show_settings(&self, form: &SettingsForm);

    fn show_history(&self, history: &HistoryView);
}

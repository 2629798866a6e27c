//! Fake collaborators for dialog tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::oneshot;

use crate::connectors_client::api::{ChannelSource, ConnectorSummary, SourceChannel, UpdateRecord};
use crate::connectors_client::models::{
    ConnectorsDialog, DeleteConfirm, HistoryView, SettingsForm, SyncingRow,
};
use crate::connectors_client::{ConnectorsApi, SourceCatalog};
use crate::types::ManagerError;

use super::view::{DialogView, RenderMode, RowHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Installed,
    SyncAll,
    Sync(String),
    Delete(String),
    SetChannels(String, String),
    Updates(String, u32, u32),
}

#[derive(Default)]
pub struct FakeApiInner {
    pub calls: Mutex<Vec<ApiCall>>,
    pub snapshot: Mutex<Vec<ConnectorSummary>>,
    pub updates: Mutex<Vec<UpdateRecord>>,
    pub fail_installed: AtomicBool,
    pub fail_delete: AtomicBool,
    /// The next `installed()` call waits until this fires.
    pub held_installed: Mutex<Option<oneshot::Receiver<()>>>,
    pub sync_delay: Mutex<Option<Duration>>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    pub inner: Arc<FakeApiInner>,
}

impl FakeApi {
    pub fn with_snapshot(snapshot: Vec<ConnectorSummary>) -> Self {
        let api = Self::default();
        api.set_snapshot(snapshot);
        api
    }

    pub fn set_snapshot(&self, snapshot: Vec<ConnectorSummary>) {
        *self.inner.snapshot.lock().unwrap() = snapshot;
    }

    /// Keeps the next `installed()` call in flight until the sender fires.
    pub fn hold_next_installed(&self) -> oneshot::Sender<()> {
        let (release, held) = oneshot::channel();
        *self.inner.held_installed.lock().unwrap() = Some(held);
        release
    }

    pub fn delay_syncs(&self, delay: Duration) {
        *self.inner.sync_delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &ApiCall) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: ApiCall) {
        self.inner.calls.lock().unwrap().push(call);
    }
}

fn server_error(path: &str) -> ManagerError {
    ManagerError::Api {
        path: path.to_string(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[async_trait]
impl ConnectorsApi for FakeApi {
    async fn installed(&self) -> Result<Vec<ConnectorSummary>, ManagerError> {
        self.record(ApiCall::Installed);
        let held = self.inner.held_installed.lock().unwrap().take();
        if let Some(held) = held {
            let _ = held.await;
        }
        if self.inner.fail_installed.load(Ordering::SeqCst) {
            return Err(server_error("/api/connectors/installed"));
        }
        Ok(self.inner.snapshot.lock().unwrap().clone())
    }

    async fn sync_all(&self) -> Result<(), ManagerError> {
        self.record(ApiCall::SyncAll);
        Ok(())
    }

    async fn sync_connector(&self, connector_name: &str) -> Result<(), ManagerError> {
        self.record(ApiCall::Sync(connector_name.to_string()));
        let delay = *self.inner.sync_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }

    async fn delete_connector(&self, connector_name: &str) -> Result<(), ManagerError> {
        self.record(ApiCall::Delete(connector_name.to_string()));
        if self.inner.fail_delete.load(Ordering::SeqCst) {
            return Err(server_error("/api/connectors"));
        }
        self.inner
            .snapshot
            .lock()
            .unwrap()
            .retain(|summary| summary.connector_name != connector_name);
        Ok(())
    }

    async fn set_channels(&self, connector_name: &str, channels: &str) -> Result<(), ManagerError> {
        self.record(ApiCall::SetChannels(
            connector_name.to_string(),
            channels.to_string(),
        ));
        Ok(())
    }

    async fn updates(
        &self,
        connector_name: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<UpdateRecord>, ManagerError> {
        self.record(ApiCall::Updates(connector_name.to_string(), page, page_size));
        Ok(self.inner.updates.lock().unwrap().clone())
    }
}

#[derive(Clone, Default)]
pub struct FakeCatalog {
    pub sources: Vec<ChannelSource>,
}

impl FakeCatalog {
    pub fn with_source(name: &str, channels: &[&str]) -> Self {
        Self {
            sources: vec![ChannelSource {
                name: name.to_string(),
                channels: channels
                    .iter()
                    .map(|channel| SourceChannel {
                        name: channel.to_string(),
                    })
                    .collect(),
            }],
        }
    }
}

#[async_trait]
impl SourceCatalog for FakeCatalog {
    async fn available_sources(&self) -> Result<Vec<ChannelSource>, ManagerError> {
        Ok(self.sources.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Rendered(RenderMode, Vec<String>),
    Syncing(RowHandle, SyncingRow),
    DeleteConfirm(DeleteConfirm),
    DeleteConfirmClosed,
    Settings(SettingsForm),
    History(HistoryView),
}

#[derive(Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn renders(&self) -> Vec<(RenderMode, Vec<String>)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Rendered(mode, names) => Some((mode, names)),
                _ => None,
            })
            .collect()
    }

    pub fn syncing_rows(&self) -> Vec<(RowHandle, SyncingRow)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Syncing(handle, row) => Some((handle, row)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl DialogView for RecordingView {
    fn render_connectors(&self, dialog: &ConnectorsDialog, mode: RenderMode) -> Vec<RowHandle> {
        let names = dialog
            .connectors
            .iter()
            .map(|row| row.connector_name.clone())
            .collect();
        self.push(ViewEvent::Rendered(mode, names));
        (0..dialog.connectors.len()).map(RowHandle).collect()
    }

    fn show_syncing(&self, row: RowHandle, state: &SyncingRow) {
        self.push(ViewEvent::Syncing(row, state.clone()));
    }

    fn show_delete_confirm(&self, confirm: &DeleteConfirm) {
        self.push(ViewEvent::DeleteConfirm(confirm.clone()));
    }

    fn close_delete_confirm(&self) {
        self.push(ViewEvent::DeleteConfirmClosed);
    }

    fn show_settings(&self, form: &SettingsForm) {
        self.push(ViewEvent::Settings(form.clone()));
    }

    fn show_history(&self, history: &HistoryView) {
        self.push(ViewEvent::History(history.clone()));
    }
}

pub fn summary(connector_name: &str, name: &str) -> ConnectorSummary {
    ConnectorSummary {
        connector_name: connector_name.to_string(),
        name: name.to_string(),
        manageable: true,
        channels: Vec::new(),
        latest_data: Some(0),
        last_sync: Some(0),
    }
}

/// Lets spawned requests run to completion on the paused test clock.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

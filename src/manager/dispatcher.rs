use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::connectors_client::api::ConnectorSummary;
use crate::connectors_client::models::{ConnectorsDialog, DeleteConfirm, HistoryView, SettingsForm};
use crate::connectors_client::{ConnectorsApi, SourceCatalog};
use crate::types::ManagerError;

use super::poller::RefreshPoller;
use super::projector::{SyncState, SyncStateProjector};
use super::store::SnapshotStore;
use super::view::{DialogView, RenderMode};

type CloseHook = Box<dyn Fn() + Send + Sync>;

/// Dialog state shared by user actions and poll ticks.
struct DialogState {
    hidden: bool,
    /// Bumped on every open; results fetched for an older open are dropped.
    generation: u64,
    store: SnapshotStore,
    projector: SyncStateProjector,
    poller: RefreshPoller,
    pending_delete: Option<ConnectorSummary>,
    settings: Option<SettingsForm>,
}

struct Shared<A, C, V> {
    api: A,
    catalog: C,
    view: V,
    poll_interval: Duration,
    history_page_size: u32,
    on_close: Option<CloseHook>,
    state: Mutex<DialogState>,
}

/// The "manage connectors" dialog controller.
pub struct ConnectorManager<A, C, V> {
    shared: Arc<Shared<A, C, V>>,
}

impl<A, C, V> Clone for ConnectorManager<A, C, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Builder for [`ConnectorManager`].
pub struct ConnectorManagerBuilder<A, C, V> {
    api: A,
    catalog: C,
    view: V,
    poll_interval: Duration,
    history_page_size: u32,
    on_close: Option<CloseHook>,
}

impl<A, C, V> ConnectorManagerBuilder<A, C, V>
where
    A: ConnectorsApi,
    C: SourceCatalog,
    V: DialogView,
{
    pub fn config(mut self, config: &Config) -> Self {
        self.poll_interval = config.poll_interval();
        self.history_page_size = config.history_page_size;
        self
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Called after the dialog closed, so the host can re-render its own state.
    pub fn on_close<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> ConnectorManager<A, C, V> {
        ConnectorManager {
            shared: Arc::new(Shared {
                api: self.api,
                catalog: self.catalog,
                view: self.view,
                poll_interval: self.poll_interval,
                history_page_size: self.history_page_size,
                on_close: self.on_close,
                state: Mutex::new(DialogState {
                    hidden: true,
                    generation: 0,
                    store: SnapshotStore::new(),
                    projector: SyncStateProjector::new(),
                    poller: RefreshPoller::new(),
                    pending_delete: None,
                    settings: None,
                }),
            }),
        }
    }
}

impl<A, C, V> ConnectorManager<A, C, V>
where
    A: ConnectorsApi,
    C: SourceCatalog,
    V: DialogView,
{
    pub fn builder(api: A, catalog: C, view: V) -> ConnectorManagerBuilder<A, C, V> {
        let defaults = Config::default();
        ConnectorManagerBuilder {
            api,
            catalog,
            view,
            poll_interval: defaults.poll_interval(),
            history_page_size: defaults.history_page_size,
            on_close: None,
        }
    }

    /// Fetches the connectors, renders a fresh dialog and starts polling.
    pub async fn open(&self) -> Result<(), ManagerError> {
        let snapshot = self.shared.api.installed().await?;

        let mut state = self.shared.state.lock().await;
        state.hidden = false;
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;
        self.apply(&mut state, snapshot, RenderMode::Build);

        // The timer only holds a weak reference; dropping the manager stops it.
        let weak = Arc::downgrade(&self.shared);
        state.poller.start(self.shared.poll_interval, move || {
            let shared = weak.upgrade();
            async move {
                if let Some(shared) = shared {
                    ConnectorManager { shared }
                        .reload(generation, RenderMode::Merge)
                        .await;
                }
            }
        });
        info!(connectors = state.store.current().len(), "Connectors dialog opened");
        Ok(())
    }

    /// Hides the dialog, stops polling and notifies the host.
    pub async fn close(&self) {
        {
            let mut state = self.shared.state.lock().await;
            state.hidden = true;
            state.poller.stop();
            state.pending_delete = None;
            state.settings = None;
        }
        info!("Connectors dialog closed");
        if let Some(hook) = &self.shared.on_close {
            hook();
        }
    }

    /// Fetches a fresh snapshot and renders it, unless the dialog was closed
    /// or reopened while the request was in flight.
    async fn reload(&self, generation: u64, mode: RenderMode) {
        let snapshot = match self.shared.api.installed().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                debug!(error = ?err, "Connector reload failed");
                return;
            }
        };

        let mut state = self.shared.state.lock().await;
        if state.hidden || state.generation != generation {
            debug!(generation, current = state.generation, "Discarding stale connector list");
            return;
        }
        self.apply(&mut state, snapshot, mode);
    }

    fn apply(&self, state: &mut DialogState, snapshot: Vec<ConnectorSummary>, mode: RenderMode) {
        state.store.load(snapshot);
        let dialog = ConnectorsDialog::from_snapshot(state.store.current());
        let handles = self.shared.view.render_connectors(&dialog, mode);
        state.projector.rebind(&dialog.connectors, handles);
    }

    /// Returns whether a sync request was sent. The request runs in the
    /// background; its outcome is only logged.
    pub async fn sync_one(&self, connector_name: &str) -> Result<bool, ManagerError> {
        {
            let mut state = self.shared.state.lock().await;
            if state.store.get(connector_name).is_none() {
                return Err(ManagerError::UnknownConnector(connector_name.to_string()));
            }
            if !state
                .projector
                .mark_syncing(connector_name, &self.shared.view)
            {
                return Ok(false);
            }
        }

        let shared = Arc::clone(&self.shared);
        let connector_name = connector_name.to_string();
        tokio::spawn(async move {
            if let Err(err) = shared.api.sync_connector(&connector_name).await {
                warn!(connector = %connector_name, error = ?err, "Sync request failed");
            }
        });
        Ok(true)
    }

    pub async fn sync_all(&self) {
        {
            let mut state = self.shared.state.lock().await;
            let names = state.store.connector_names();
            let marked = state
                .projector
                .mark_all_syncing(&names, &self.shared.view);
            debug!(marked, "Marked connectors as syncing");
        }

        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            if let Err(err) = shared.api.sync_all().await {
                warn!(error = ?err, "Sync-all request failed");
            }
        });
    }

    /// Opens the delete confirmation for a connector.
    pub async fn request_delete(&self, connector_name: &str) -> Result<(), ManagerError> {
        let mut state = self.shared.state.lock().await;
        let summary = state
            .store
            .get(connector_name)
            .cloned()
            .ok_or_else(|| ManagerError::UnknownConnector(connector_name.to_string()))?;
        self.shared
            .view
            .show_delete_confirm(&DeleteConfirm::from_summary(&summary));
        state.pending_delete = Some(summary);
        Ok(())
    }

    /// Deletes the connector awaiting confirmation.
    /// The confirmation closes whatever the outcome; the list is rebuilt on success.
    pub async fn confirm_delete(&self) -> Result<(), ManagerError> {
        let (pending, generation) = {
            let mut state = self.shared.state.lock().await;
            let pending = state
                .pending_delete
                .take()
                .ok_or(ManagerError::NoPendingDelete)?;
            (pending, state.generation)
        };

        let deleted = self
            .shared
            .api
            .delete_connector(&pending.connector_name)
            .await;
        self.shared.view.close_delete_confirm();

        match deleted {
            Ok(()) => {
                info!(connector = %pending.connector_name, "Connector deleted");
                // Fresh list, scroll position is not kept.
                self.reload(generation, RenderMode::Build).await;
            }
            Err(err) => {
                warn!(connector = %pending.connector_name, error = ?err, "Delete failed");
            }
        }
        Ok(())
    }

    pub async fn cancel_delete(&self) -> Result<(), ManagerError> {
        self.shared
            .state
            .lock()
            .await
            .pending_delete
            .take()
            .ok_or(ManagerError::NoPendingDelete)?;
        self.shared.view.close_delete_confirm();
        Ok(())
    }

    /// Shows the channel settings of a connector.
    pub async fn edit_channels(&self, connector_name: &str) -> Result<(), ManagerError> {
        let connector = self
            .shared
            .state
            .lock()
            .await
            .store
            .get(connector_name)
            .cloned()
            .ok_or_else(|| ManagerError::UnknownConnector(connector_name.to_string()))?;

        let sources = self.shared.catalog.available_sources().await?;
        let source = sources.iter().find(|source| source.name == connector.name);
        if source.is_none() {
            warn!(
                connector = connector_name,
                name = %connector.name,
                "No data source matches connector"
            );
        }

        let form = SettingsForm::build(&connector, source);
        self.shared.view.show_settings(&form);
        self.shared.state.lock().await.settings = Some(form);
        Ok(())
    }

    /// Applies one checkbox toggle and posts the full channel list.
    pub async fn toggle_channel(
        &self,
        channel_id: &str,
        checked: bool,
    ) -> Result<(), ManagerError> {
        let (connector_name, channels) = {
            let mut state = self.shared.state.lock().await;
            let form = state.settings.as_mut().ok_or(ManagerError::NoSettingsOpen)?;
            if !form.set_checked(channel_id, checked) {
                return Err(ManagerError::UnknownChannel(channel_id.to_string()));
            }
            (form.connector_name.clone(), form.channel_list())
        };

        debug!(connector = %connector_name, channels = %channels, "Updating channels");
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            if let Err(err) = shared.api.set_channels(&connector_name, &channels).await {
                warn!(connector = %connector_name, error = ?err, "Channel update failed");
            }
        });
        Ok(())
    }

    pub async fn close_settings(&self) {
        self.shared.state.lock().await.settings = None;
    }

    /// Shows the most recent updates of a connector.
    pub async fn view_history(&self, connector_name: &str) -> Result<(), ManagerError> {
        let records = self
            .shared
            .api
            .updates(connector_name, 0, self.shared.history_page_size)
            .await?;
        let history = HistoryView::from_records(connector_name, records);
        self.shared.view.show_history(&history);
        Ok(())
    }

    pub async fn is_visible(&self) -> bool {
        !self.shared.state.lock().await.hidden
    }

    pub async fn is_polling(&self) -> bool {
        self.shared.state.lock().await.poller.is_running()
    }

    pub async fn sync_state(&self, connector_name: &str) -> SyncState {
        self.shared.state.lock().await.projector.state(connector_name)
    }

    pub async fn snapshot(&self) -> Vec<ConnectorSummary> {
        self.shared.state.lock().await.store.current().to_vec()
    }
}

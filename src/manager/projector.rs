use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::connectors_client::models::{ConnectorRow, SyncingRow};

use super::view::{DialogView, RowHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Syncing,
}

#[derive(Debug)]
struct RowBinding {
    handle: RowHandle,
    sync_label: String,
}

/// Optimistic sync state per connector, valid for one render.
#[derive(Debug, Default)]
pub struct SyncStateProjector {
    rows: HashMap<String, RowBinding>,
    syncing: HashSet<String>,
}

impl SyncStateProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the rows of a fresh render and forgets every syncing flag.
    pub fn rebind(&mut self, rows: &[ConnectorRow], handles: Vec<RowHandle>) {
        if rows.len() != handles.len() {
            warn!(
                rows = rows.len(),
                handles = handles.len(),
                "View returned a mismatched number of row handles"
            );
        }
        self.syncing.clear();
        self.rows.clear();
        for (row, handle) in rows.iter().zip(handles) {
            self.rows
                .entry(row.connector_name.clone())
                .or_insert_with(|| RowBinding {
                    handle,
                    sync_label: row.sync_control.label().to_string(),
                });
        }
    }

    /// Returns true when the connector went from idle to syncing.
    pub fn mark_syncing<V: DialogView + ?Sized>(&mut self, connector_name: &str, view: &V) -> bool {
        if !self.syncing.insert(connector_name.to_string()) {
            debug!(connector = connector_name, "Already syncing");
            return false;
        }
        if let Some(binding) = self.rows.get(connector_name) {
            view.show_syncing(
                binding.handle,
                &SyncingRow::new(connector_name, &binding.sync_label),
            );
        }
        true
    }

    /// Returns how many connectors transitioned.
    pub fn mark_all_syncing<V, I, S>(&mut self, connector_names: I, view: &V) -> usize
    where
        V: DialogView + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        connector_names
            .into_iter()
            .filter(|name| self.mark_syncing(name.as_ref(), view))
            .count()
    }

    pub fn state(&self, connector_name: &str) -> SyncState {
        if self.syncing.contains(connector_name) {
            SyncState::Syncing
        } else {
            SyncState::Idle
        }
    }

    pub fn row(&self, connector_name: &str) -> Option<RowHandle> {
        self.rows.get(connector_name).map(|binding| binding.handle)
    }
}

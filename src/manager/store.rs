use std::collections::HashSet;

use tracing::warn;

use crate::connectors_client::api::ConnectorSummary;

/// Last snapshot fetched from `/api/connectors/installed`.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    snapshot: Option<Vec<ConnectorSummary>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held snapshot wholesale.
    pub fn load(&mut self, snapshot: Vec<ConnectorSummary>) {
        let mut seen = HashSet::new();
        for summary in &snapshot {
            if !seen.insert(summary.connector_name.as_str()) {
                warn!(connector = %summary.connector_name, "Duplicate connector in snapshot");
            }
        }
        self.snapshot = Some(snapshot);
    }

    /// Empty until the first load.
    pub fn current(&self) -> &[ConnectorSummary] {
        self.snapshot.as_deref().unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn get(&self, connector_name: &str) -> Option<&ConnectorSummary> {
        self.current()
            .iter()
            .find(|summary| summary.connector_name == connector_name)
    }

    pub fn connector_names(&self) -> Vec<String> {
        self.current()
            .iter()
            .map(|summary| summary.connector_name.clone())
            .collect()
    }
}

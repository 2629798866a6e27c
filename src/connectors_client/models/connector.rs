use serde::Serialize;

use crate::connectors_client::api::ConnectorSummary;
use crate::connectors_client::helpers::{format_or, NEVER_SYNCED_LABEL, NO_DATA_LABEL};

use super::sync::{SyncControl, SyncIndicator};

pub const SYNC_NOW_LABEL: &str = "Sync now";

/// One rendered row of the connectors dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorRow {
    pub connector_name: String,
    pub name: String,
    pub channels: Vec<String>,
    pub latest_data: String,
    pub last_sync: String,
    pub indicator: SyncIndicator,
    pub sync_control: SyncControl,
}

/// Payload for the main dialog. Only manageable connectors get a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorsDialog {
    pub connectors: Vec<ConnectorRow>,
}

/// Payload for the delete confirmation sub-dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteConfirm {
    pub connector_name: String,
    pub name: String,
}

impl ConnectorRow {
    pub fn from_summary(summary: &ConnectorSummary) -> Self {
        Self {
            connector_name: summary.connector_name.clone(),
            name: summary.name.clone(),
            channels: summary.channels.clone(),
            latest_data: format_or(summary.latest_data, NO_DATA_LABEL),
            last_sync: format_or(summary.last_sync, NEVER_SYNCED_LABEL),
            indicator: SyncIndicator::from_last_sync(summary.last_sync),
            sync_control: SyncControl::Button {
                label: SYNC_NOW_LABEL.to_string(),
            },
        }
    }
}

impl ConnectorsDialog {
    pub fn from_snapshot(snapshot: &[ConnectorSummary]) -> Self {
        Self {
            connectors: snapshot
                .iter()
                .filter(|summary| summary.manageable)
                .map(ConnectorRow::from_summary)
                .collect(),
        }
    }
}

impl DeleteConfirm {
    pub fn from_summary(summary: &ConnectorSummary) -> Self {
        Self {
            connector_name: summary.connector_name.clone(),
            name: summary.name.clone(),
        }
    }
}

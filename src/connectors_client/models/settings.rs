use std::collections::HashSet;

use serde::Serialize;

use crate::connectors_client::api::{ChannelSource, ConnectorSummary};
use crate::connectors_client::helpers::{enabled_channels, join_channels};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelOption {
    /// Qualified `source.channel` identifier.
    pub id: String,
    pub checked: bool,
}

/// Per-channel settings form of one connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsForm {
    pub connector_name: String,
    pub name: String,
    pub channels: Vec<ChannelOption>,
}

impl SettingsForm {
    /// Builds the form from the catalog entry matching the connector, if any.
    pub fn build(connector: &ConnectorSummary, source: Option<&ChannelSource>) -> Self {
        let enabled: HashSet<&str> = enabled_channels(&connector.channels).collect();
        let channels = source
            .map(|source| {
                source
                    .qualified_channels()
                    .map(|id| ChannelOption {
                        checked: enabled.contains(id.as_str()),
                        id,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            connector_name: connector.connector_name.clone(),
            name: connector.name.clone(),
            channels,
        }
    }

    /// Returns false when the form has no such channel.
    pub fn set_checked(&mut self, channel_id: &str, checked: bool) -> bool {
        match self.channels.iter_mut().find(|option| option.id == channel_id) {
            Some(option) => {
                option.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Comma-joined checked channels in catalog order.
    pub fn channel_list(&self) -> String {
        join_channels(
            self.channels
                .iter()
                .filter(|option| option.checked)
                .map(|option| option.id.as_str()),
        )
    }
}

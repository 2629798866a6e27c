use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One installed connector as reported by `/api/connectors/installed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSummary {
    pub connector_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manageable: bool,
    #[serde(default)]
    pub channels: Vec<String>,
    /// Milliseconds since the epoch; `None` or `0` means no data yet.
    #[serde(default)]
    pub latest_data: Option<i64>,
    /// Milliseconds since the epoch; `None` or `0` means never synced.
    #[serde(default)]
    pub last_sync: Option<i64>,
}

/// A single entry of a connector's update history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    #[serde(default)]
    pub ts: Option<i64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A data source offered by the channel catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSource {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<SourceChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceChannel {
    pub name: String,
}

impl ChannelSource {
    /// Qualified `source.channel` identifiers in catalog order.
    pub fn qualified_channels(&self) -> impl Iterator<Item = String> + '_ {
        self.channels
            .iter()
            .map(move |channel| format!("{}.{}", self.name, channel.name))
    }
}

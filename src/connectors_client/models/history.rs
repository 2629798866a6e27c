use serde::Serialize;
use serde_json::{Map, Value};

use crate::connectors_client::api::UpdateRecord;
use crate::connectors_client::helpers::{capitalize_first, format_or, PRESENT_LABEL};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateRow {
    pub time: String,
    pub ts: Option<i64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Recent update history of one connector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub connector_name: String,
    pub updates: Vec<UpdateRow>,
}

impl HistoryView {
    pub fn from_records(connector_name: &str, records: Vec<UpdateRecord>) -> Self {
        Self {
            connector_name: capitalize_first(connector_name),
            updates: records
                .into_iter()
                .map(|record| UpdateRow {
                    time: format_or(record.ts, PRESENT_LABEL),
                    ts: record.ts,
                    fields: record.fields,
                })
                .collect(),
        }
    }
}

use async_trait::async_trait;

use crate::types::ManagerError;

use super::api::{ChannelSource, ConnectorSummary, UpdateRecord};

/// Backend operations the dialog needs.
#[async_trait]
pub trait ConnectorsApi: Send + Sync + 'static {
    /// `GET /api/connectors/installed`
    async fn installed(&self) -> Result<Vec<ConnectorSummary>, ManagerError>;

    /// `POST /api/sync/all`
    async fn sync_all(&self) -> Result<(), ManagerError>;

    /// `POST /api/sync/{connector_name}`
    async fn sync_connector(&self, connector_name: &str) -> Result<(), ManagerError>;

    /// `DELETE /api/connectors/{connector_name}`
    async fn delete_connector(&self, connector_name: &str) -> Result<(), ManagerError>;

    /// `POST /api/connectors/{connector_name}/channels` with `channels=<list>`
    async fn set_channels(&self, connector_name: &str, channels: &str) -> Result<(), ManagerError>;

    /// `GET /api/updates/{connector_name}?page=..&pageSize=..`
    async fn updates(
        &self,
        connector_name: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<UpdateRecord>, ManagerError>;
}

/// Catalog of data sources and the channels each one offers.
#[async_trait]
pub trait SourceCatalog: Send + Sync + 'static {
    async fn available_sources(&self) -> Result<Vec<ChannelSource>, ManagerError>;
}

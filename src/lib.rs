pub mod bridge;
pub mod config;
pub mod connectors_client;
pub mod manager;
pub mod types;

pub use config::Config;
pub use connectors_client::{ConnectorsApi, ConnectorsClient, SourceCatalog};
pub use manager::{ConnectorManager, DialogView};
pub use types::ManagerError;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::types::ManagerError;

use super::api::{ChannelSource, ChannelsForm, ConnectorSummary, UpdateRecord, UpdatesQuery};
use super::backend::{ConnectorsApi, SourceCatalog};

/// HTTP client for the connector management endpoints.
#[derive(Clone)]
pub struct ConnectorsClient {
    http: Client,
    base_url: String,
    sources_list_path: String,
}

impl ConnectorsClient {
    pub fn new(config: &Config) -> Result<Self, ManagerError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ManagerError::Http)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sources_list_path: config.sources_list_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.http.request(method, url)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ManagerError>
    where
        T: DeserializeOwned,
    {
        self.get_json_with_query(path, &()).await
    }

    async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ManagerError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(ManagerError::Http)?;

        if !response.status().is_success() {
            return Err(ManagerError::Api {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response.json::<T>().await.map_err(ManagerError::Http)
    }

    /// Sends a request whose response body is ignored.
    async fn send(&self, request: RequestBuilder, path: &str) -> Result<(), ManagerError> {
        let response = request.send().await.map_err(ManagerError::Http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ManagerError::Api {
                path: path.to_string(),
                status,
            });
        }
        debug!(path, %status, "Request accepted");
        Ok(())
    }
}

#[async_trait]
impl ConnectorsApi for ConnectorsClient {
    async fn installed(&self) -> Result<Vec<ConnectorSummary>, ManagerError> {
        self.get_json("/api/connectors/installed").await
    }

    async fn sync_all(&self) -> Result<(), ManagerError> {
        let path = "/api/sync/all";
        self.send(self.request(Method::POST, path), path).await
    }

    async fn sync_connector(&self, connector_name: &str) -> Result<(), ManagerError> {
        let path = format!("/api/sync/{connector_name}");
        self.send(self.request(Method::POST, &path), &path).await
    }

    async fn delete_connector(&self, connector_name: &str) -> Result<(), ManagerError> {
        let path = format!("/api/connectors/{connector_name}");
        self.send(self.request(Method::DELETE, &path), &path).await
    }

    async fn set_channels(&self, connector_name: &str, channels: &str) -> Result<(), ManagerError> {
        let path = format!("/api/connectors/{connector_name}/channels");
        let request = self
            .request(Method::POST, &path)
            .form(&ChannelsForm { channels });
        self.send(request, &path).await
    }

    async fn updates(
        &self,
        connector_name: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<UpdateRecord>, ManagerError> {
        let query = UpdatesQuery { page, page_size };
        self.get_json_with_query(&format!("/api/updates/{connector_name}"), &query)
            .await
    }
}

#[async_trait]
impl SourceCatalog for ConnectorsClient {
    async fn available_sources(&self) -> Result<Vec<ChannelSource>, ManagerError> {
        self.get_json(&self.sources_list_path).await
    }
}

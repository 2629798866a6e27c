use connector_manager::{Config, ConnectorsApi, ConnectorsClient, ManagerError, SourceCatalog};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ConnectorsClient {
    let config = Config {
        api_base_url: format!("{}/", server.uri()),
        ..Config::default()
    };
    ConnectorsClient::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_installed_connectors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/connectors/installed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "connectorName": "fitbit",
                "name": "Fitbit",
                "manageable": true,
                "channels": ["Fitbit.steps"],
                "latestData": 0,
                "lastSync": 0
            },
            {
                "connectorName": "sms_backup",
                "name": "SMS Backup",
                "manageable": false,
                "channels": [],
                "latestData": null,
                "lastSync": null
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let connectors = client_for(&server).installed().await.unwrap();
    assert_eq!(connectors.len(), 2);
    assert_eq!(connectors[0].connector_name, "fitbit");
    assert_eq!(connectors[0].last_sync, Some(0));
    assert!(!connectors[1].manageable);
    assert_eq!(connectors[1].latest_data, None);
}

#[tokio::test]
async fn posts_sync_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sync/fitbit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/sync/all"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.sync_connector("fitbit").await.unwrap();
    client.sync_all().await.unwrap();
}

#[tokio::test]
async fn deletes_connector() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/connectors/zeo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_connector("zeo").await.unwrap();
}

#[tokio::test]
async fn posts_channels_as_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/connectors/zeo/channels"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("channels=Zeo.Sleep_Graph%2CZeo.ZQ"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .set_channels("zeo", "Zeo.Sleep_Graph,Zeo.ZQ")
        .await
        .unwrap();
}

#[tokio::test]
async fn requests_first_page_of_updates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/updates/fitbit"))
        .and(query_param("page", "0"))
        .and(query_param("pageSize", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "ts": 1357000000000i64, "type": "INCREMENTAL_UPDATE" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let updates = client_for(&server).updates("fitbit", 0, 50).await.unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].ts, Some(1_357_000_000_000));
    assert_eq!(updates[0].fields["type"], "INCREMENTAL_UPDATE");
}

#[tokio::test]
async fn lists_available_sources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bodytrack/sources/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Zeo", "channels": [{ "name": "Sleep_Graph" }, { "name": "ZQ" }] }
        ])))
        .mount(&server)
        .await;

    let sources = client_for(&server).available_sources().await.unwrap();
    assert_eq!(sources[0].name, "Zeo");
    assert_eq!(sources[0].channels.len(), 2);
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/connectors/fitbit"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_connector("fitbit")
        .await
        .unwrap_err();
    match err {
        ManagerError::Api { path, status } => {
            assert_eq!(path, "/api/connectors/fitbit");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

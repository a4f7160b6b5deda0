//! Platform info API operations

use crate::config::api;
use crate::error::Result;
use crate::cf::CfClient;

use super::models::Info;

impl CfClient {
    /// Get platform information (version, advertised endpoints)
    pub async fn info(&self) -> Result<Info> {
        self.get_json(&format!("{}/info", api::V2)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_info() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&format!("{}/api", mock_server.uri()));

        Mock::given(method("GET"))
            .and(path("/api/v2/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "vcap",
                "version": 2,
                "api_version": "2.103.0"
            })))
            .mount(&mock_server)
            .await;

        let info = client.info().await.unwrap();
        assert_eq!(info.version, Some(2));
        assert_eq!(info.api_version.as_deref(), Some("2.103.0"));
    }
}

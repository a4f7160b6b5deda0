//! Platform info data models

use serde::{Deserialize, Serialize};

/// Response of `GET /v2/info`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub build: Option<String>,
    #[serde(default)]
    pub support: Option<String>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authorization_endpoint: Option<String>,
    #[serde(default)]
    pub token_endpoint: Option<String>,
    #[serde(default)]
    pub min_cli_version: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub doppler_logging_endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_deserialization() {
        let json = r#"{
            "name": "vcap",
            "build": "2222",
            "support": "http://support.cloudfoundry.com",
            "version": 2,
            "description": "Cloud Foundry sponsored by Pivotal",
            "authorization_endpoint": "https://login.example.com",
            "token_endpoint": "https://uaa.example.com",
            "min_cli_version": null,
            "api_version": "2.103.0"
        }"#;

        let info: Info = serde_json::from_str(json).unwrap();
        assert_eq!(info.version, Some(2));
        assert_eq!(info.token_endpoint.as_deref(), Some("https://uaa.example.com"));
        assert!(info.min_cli_version.is_none());
        assert!(info.doppler_logging_endpoint.is_none());
    }
}

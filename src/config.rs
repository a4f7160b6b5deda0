/// Configuration constants for the Cloud Controller API
pub mod api {
    /// Version prefix for every Cloud Controller v2 path
    pub const V2: &str = "/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Spaces endpoint
    pub const SPACES: &str = "spaces";

    /// Applications endpoint
    pub const APPS: &str = "apps";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Stacks endpoint
    pub const STACKS: &str = "stacks";

    /// Organization quota definitions endpoint
    pub const QUOTA_DEFINITIONS: &str = "quota_definitions";

    /// Space quota definitions endpoint
    pub const SPACE_QUOTA_DEFINITIONS: &str = "space_quota_definitions";

    /// Managed service instances endpoint
    pub const SERVICE_INSTANCES: &str = "service_instances";

    /// User-provided service instances endpoint
    pub const USER_PROVIDED_SERVICE_INSTANCES: &str = "user_provided_service_instances";

    /// Service plans endpoint
    pub const SERVICE_PLANS: &str = "service_plans";

    /// Services endpoint
    pub const SERVICES: &str = "services";

    /// Audit events endpoint
    pub const EVENTS: &str = "events";

    /// Upper bound on pages followed for a single collection fetch
    pub const MAX_PAGES: usize = 1000;
}

/// Configuration constants for the identity (UAA) endpoint
pub mod auth {
    /// Token path, relative to the token endpoint
    pub const TOKEN_PATH: &str = "/oauth/token";

    /// Grant type requested from the token endpoint
    pub const GRANT_TYPE: &str = "client_credentials";
}

/// Environment variables read by the CLI
pub mod env {
    pub const API: &str = "CF_API";
    pub const TOKEN: &str = "CF_TOKEN";
    pub const CLIENT_ID: &str = "CF_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "CF_CLIENT_SECRET";
    pub const TOKEN_ENDPOINT: &str = "CF_TOKEN_ENDPOINT";
}

/// Default values
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Stack looked up by `CfClient::cflinuxfs2_stack_guid`
    pub const CFLINUXFS2_STACK: &str = "cflinuxfs2";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_prefix_format() {
        assert!(api::V2.starts_with('/'));
        assert!(!api::V2.ends_with('/'));
    }

    #[test]
    fn test_token_path_format() {
        assert!(auth::TOKEN_PATH.starts_with('/'));
    }

    #[test]
    fn test_max_pages_is_positive() {
        assert!(api::MAX_PAGES > 0);
    }

    #[test]
    fn test_env_vars_are_prefixed() {
        for var in [
            env::API,
            env::TOKEN,
            env::CLIENT_ID,
            env::CLIENT_SECRET,
            env::TOKEN_ENDPOINT,
        ] {
            assert!(var.starts_with("CF_"));
        }
    }
}

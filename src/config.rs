/// Configuration constants for the Confluent APIs
pub mod api {
    /// Confluent Cloud API endpoint
    pub const CLOUD_URL: &str = "https://api.confluent.cloud";

    /// Organizations (org v2)
    pub const ORGANIZATIONS: &str = "/org/v2/organizations";

    /// Environments (org v2)
    pub const ENVIRONMENTS: &str = "/org/v2/environments";

    /// Service accounts (iam v2)
    pub const SERVICE_ACCOUNTS: &str = "/iam/v2/service-accounts";

    /// Users (iam v2)
    pub const USERS: &str = "/iam/v2/users";

    /// Invitations (iam v2)
    pub const INVITATIONS: &str = "/iam/v2/invitations";

    /// Identity providers; pools live underneath a provider
    pub const IDENTITY_PROVIDERS: &str = "/iam/v2/identity-providers";

    /// SSO group mappings
    pub const GROUP_MAPPINGS: &str = "/iam/v2/sso/group-mappings";

    /// Certificate authorities for mTLS identity
    pub const CERTIFICATE_AUTHORITIES: &str = "/iam/v2/certificate-authorities";

    /// Cloud role bindings
    pub const ROLE_BINDINGS: &str = "/iam/v2/role-bindings";

    /// Cloud role catalog
    pub const ROLES: &str = "/api/metadata/security/v2alpha1/roles";

    /// Namespaces requested from the role catalog
    pub const ROLE_NAMESPACES: &str = "public,dataplane,dataplane/v2,ksql,streamcatalog";

    /// Kafka clusters (cmk v2)
    pub const KAFKA_CLUSTERS: &str = "/cmk/v2/clusters";

    /// Connect v1 base path
    pub const CONNECT: &str = "/connect/v1/environments";

    /// Log search endpoint used by `connect logs`
    pub const LOG_SEARCH: &str = "/logs/v1/search";

    /// Platform MDS base path
    pub const MDS: &str = "/security/1.0";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Page size for log queries
    pub const LOGS_PAGE_SIZE: u32 = 200;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Cloud API key/secret environment variables
    pub const CLOUD_KEY_ENV: &str = "CONFLUENT_CLOUD_API_KEY";
    pub const CLOUD_SECRET_ENV: &str = "CONFLUENT_CLOUD_API_SECRET";

    /// Platform username/password environment variables
    pub const PLATFORM_USERNAME_ENV: &str = "CONFLUENT_PLATFORM_USERNAME";
    pub const PLATFORM_PASSWORD_ENV: &str = "CONFLUENT_PLATFORM_PASSWORD";
}

/// Configuration constants for named contexts
pub mod context {
    /// Directory under $HOME holding the config file
    pub const DIR_NAME: &str = ".confluent";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active context
    pub const ENV_VAR: &str = "CONFLUENT_CONTEXT";
}

/// Polling parameters for pending operations
pub mod poll {
    use std::time::Duration;

    /// Interval between status checks
    pub const TICK: Duration = Duration::from_secs(1);

    /// Give up after this long
    pub const TIMEOUT: Duration = Duration::from_secs(30);
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Window used by `connect logs` when no start time is given
    pub const LOGS_WINDOW_HOURS: i64 = 1;
}

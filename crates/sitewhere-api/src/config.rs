use url::Url;

use crate::auth::{Credentials, DefaultTenant};
use crate::transport::TransportConfig;

/// Everything a [`SiteWhereClient`](crate::SiteWhereClient) needs to talk
/// to one platform instance.
///
/// The SDK reads no files or environment itself; the embedding
/// application (or `sitewhere-config`) fills this in.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Platform root, e.g. `http://localhost:8080`. The REST prefix
    /// `/sitewhere/api/` is appended unless the path already ends in `/api`.
    pub base_url: Url,
    /// Basic credentials for the token endpoint and unscoped calls.
    pub credentials: Option<Credentials>,
    /// Tenant headers sent on unscoped calls.
    pub default_tenant: Option<DefaultTenant>,
    pub transport: TransportConfig,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            credentials: None,
            default_tenant: None,
            transport: TransportConfig::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_default_tenant(mut self, tenant: DefaultTenant) -> Self {
        self.default_tenant = Some(tenant);
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

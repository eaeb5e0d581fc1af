use std::fmt;

use secrecy::SecretString;

/// Basic-auth credentials for the platform.
///
/// Used on the token endpoint and, for calls made without a tenant
/// context, on every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Identifier of a tenant: the partition resources live in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Tenant authentication context passed to scoped operations.
///
/// Carries the bearer token obtained from
/// [`SiteWhereClient::get_token`](crate::SiteWhereClient::get_token) plus
/// the tenant id and tenant auth token sent as headers. The client never
/// inspects or refreshes the JWT; an expired one surfaces as
/// [`Error::Authentication`](crate::Error::Authentication) on the call
/// that used it.
#[derive(Debug, Clone)]
pub struct TenantAuthentication {
    pub jwt: SecretString,
    pub tenant_id: TenantId,
    pub tenant_auth_token: SecretString,
}

impl TenantAuthentication {
    pub fn new(
        jwt: SecretString,
        tenant_id: impl Into<TenantId>,
        tenant_auth_token: impl Into<String>,
    ) -> Self {
        Self {
            jwt,
            tenant_id: tenant_id.into(),
            tenant_auth_token: SecretString::from(tenant_auth_token.into()),
        }
    }

    /// Same tenant, fresh bearer token.
    pub fn with_jwt(mut self, jwt: SecretString) -> Self {
        self.jwt = jwt;
        self
    }
}

/// Default tenant headers for calls made without a
/// [`TenantAuthentication`].
#[derive(Debug, Clone)]
pub struct DefaultTenant {
    pub tenant_id: TenantId,
    pub tenant_auth_token: SecretString,
}

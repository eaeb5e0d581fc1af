// SiteWhere REST client
//
// Wraps `reqwest::Client` with URL construction under `/sitewhere/api/`,
// per-call authentication headers and status-to-error mapping. Endpoint
// groups (areas, devices, events, ...) are inherent methods implemented in
// sibling files so this module stays focused on transport mechanics.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::{Credentials, DefaultTenant, TenantAuthentication};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::search::{QueryParams, SearchResults};

pub(crate) const TENANT_ID_HEADER: &str = "X-SiteWhere-Tenant-Id";
pub(crate) const TENANT_AUTH_HEADER: &str = "X-SiteWhere-Tenant-Auth";
pub(crate) const ERROR_HEADER: &str = "X-SiteWhere-Error";

/// Platform error bodies are `{"message": "..."}` when JSON at all.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Async client for a SiteWhere instance.
///
/// Holds no per-tenant state: every tenant-scoped operation takes an
/// `Option<&TenantAuthentication>`. With `Some`, the call carries the bearer
/// token and tenant headers; with `None`, it falls back to the configured
/// basic credentials and default tenant headers.
///
/// Cloning is cheap and clones share the connection pool, so one client
/// can serve concurrent tasks.
#[derive(Clone)]
pub struct SiteWhereClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<Credentials>,
    default_tenant: Option<DefaultTenant>,
    /// Set only when this client built its own transport, so a reqwest
    /// timeout can be reported against the configured value.
    timeout: Option<Duration>,
}

impl std::fmt::Debug for SiteWhereClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteWhereClient")
            .field("base_url", &self.base_url.as_str())
            .field(
                "username",
                &self.credentials.as_ref().map(|c| c.username.as_str()),
            )
            .field(
                "default_tenant",
                &self.default_tenant.as_ref().map(|t| t.tenant_id.as_str()),
            )
            .finish_non_exhaustive()
    }
}

impl SiteWhereClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a [`ClientConfig`].
    ///
    /// Fails with [`Error::Tls`] if the transport cannot be built and with
    /// [`Error::InvalidUrl`] if the base URL cannot carry path segments.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        let base_url = Self::normalize_base_url(config.base_url.as_str())?;
        debug!(base_url = %base_url, "created SiteWhere client");
        Ok(Self {
            http,
            base_url,
            credentials: config.credentials,
            default_tenant: config.default_tenant,
            timeout: Some(config.transport.timeout),
        })
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// Credentials and default tenant headers are attached with
    /// [`with_credentials`](Self::with_credentials) and
    /// [`with_default_tenant`](Self::with_default_tenant).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
            credentials: None,
            default_tenant: None,
            timeout: None,
        })
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_default_tenant(mut self, tenant: DefaultTenant) -> Self {
        self.default_tenant = Some(tenant);
        self
    }

    /// Append `/sitewhere/api/` to the instance root.
    ///
    /// A URL whose path already ends in `/api` is taken as the REST root.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/sitewhere/api/"));
        }

        Ok(url)
    }

    /// The REST root every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Resolve path segments under the REST root.
    ///
    /// Each segment is percent-encoded on its own, so tokens containing
    /// `/`, `?` or spaces address the right resource.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── Authentication headers ───────────────────────────────────────

    /// Start a request with the headers for `tenant`, or the configured
    /// fallback when `tenant` is `None`.
    fn request(
        &self,
        method: Method,
        url: Url,
        tenant: Option<&TenantAuthentication>,
    ) -> Result<RequestBuilder, Error> {
        let builder = self.http.request(method, url);

        if let Some(auth) = tenant {
            trace!(tenant = %auth.tenant_id, "using tenant bearer authentication");
            let builder = builder.bearer_auth(auth.jwt.expose_secret());
            return Self::tenant_headers(
                builder,
                auth.tenant_id.as_str(),
                auth.tenant_auth_token.expose_secret(),
            );
        }

        trace!(
            basic = self.credentials.is_some(),
            default_tenant = self.default_tenant.is_some(),
            "no tenant context, using configured fallback"
        );
        let builder = match &self.credentials {
            Some(creds) => {
                builder.basic_auth(&creds.username, Some(creds.password.expose_secret()))
            }
            None => builder,
        };
        match &self.default_tenant {
            Some(t) => Self::tenant_headers(
                builder,
                t.tenant_id.as_str(),
                t.tenant_auth_token.expose_secret(),
            ),
            None => Ok(builder),
        }
    }

    fn tenant_headers(
        builder: RequestBuilder,
        tenant_id: &str,
        tenant_auth: &str,
    ) -> Result<RequestBuilder, Error> {
        let id = header_value(TENANT_ID_HEADER, tenant_id, false)?;
        let auth = header_value(TENANT_AUTH_HEADER, tenant_auth, true)?;
        Ok(builder
            .header(HeaderName::from_static("x-sitewhere-tenant-id"), id)
            .header(HeaderName::from_static("x-sitewhere-tenant-auth"), auth))
    }

    // ── Sending ──────────────────────────────────────────────────────

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, Error> {
        builder.send().await.map_err(|e| {
            match self.timeout {
                Some(timeout) if e.is_timeout() => Error::Timeout { timeout },
                _ => Error::Transport(e),
            }
        })
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");
        let builder = self.request(Method::GET, url, tenant)?.query(params);
        let resp = self.send(builder).await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");
        let builder = self.request(Method::POST, url, tenant)?.json(body);
        let resp = self.send(builder).await?;
        Self::handle_response(resp).await
    }

    /// POST with no request body, for state transitions such as
    /// ending an assignment.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
    ) -> Result<T, Error> {
        debug!("POST {url}");
        let builder = self.request(Method::POST, url, tenant)?;
        let resp = self.send(builder).await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("PUT {url}");
        let builder = self.request(Method::PUT, url, tenant)?.json(body);
        let resp = self.send(builder).await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("DELETE {url} params={params:?}");
        let builder = self.request(Method::DELETE, url, tenant)?.query(params);
        let resp = self.send(builder).await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn delete_with_body<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("DELETE {url}");
        let builder = self.request(Method::DELETE, url, tenant)?.json(body);
        let resp = self.send(builder).await?;
        Self::handle_response(resp).await
    }

    // ── Binary payloads ──────────────────────────────────────────────

    pub(crate) async fn post_bytes(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        data: Bytes,
    ) -> Result<(), Error> {
        debug!("POST {url} ({} bytes)", data.len());
        let builder = self
            .request(Method::POST, url, tenant)?
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(data);
        let resp = self.send(builder).await?;
        Self::handle_empty(resp).await
    }

    pub(crate) async fn get_bytes(
        &self,
        tenant: Option<&TenantAuthentication>,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<Bytes, Error> {
        debug!("GET {url} params={params:?}");
        let builder = self
            .request(Method::GET, url, tenant)?
            .header(reqwest::header::ACCEPT, "application/octet-stream")
            .query(params);
        let resp = self.send(builder).await?;

        let status = resp.status();
        if status.is_success() {
            let data = resp.bytes().await?;
            trace!(len = data.len(), "received binary payload");
            Ok(data)
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    // ── Resource helpers ─────────────────────────────────────────────
    //
    // Most resource kinds share the same five operations on a collection
    // path: GET/PUT/DELETE `{collection}/{token}`, POST and GET on
    // `{collection}`.

    pub(crate) async fn get_resource<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        collection: &str,
        token: &str,
    ) -> Result<T, Error> {
        let url = self.endpoint(&[collection, token])?;
        self.get(tenant, url, &[]).await
    }

    pub(crate) async fn create_resource<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        tenant: Option<&TenantAuthentication>,
        collection: &str,
        request: &B,
    ) -> Result<T, Error> {
        let url = self.endpoint(&[collection])?;
        self.post(tenant, url, request).await
    }

    pub(crate) async fn update_resource<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        tenant: Option<&TenantAuthentication>,
        collection: &str,
        token: &str,
        request: &B,
    ) -> Result<T, Error> {
        let url = self.endpoint(&[collection, token])?;
        self.put(tenant, url, request).await
    }

    /// Soft-delete unless `permanently`, in which case `force=true` asks
    /// the server to remove the record.
    pub(crate) async fn delete_resource<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        collection: &str,
        token: &str,
        permanently: bool,
    ) -> Result<T, Error> {
        let url = self.endpoint(&[collection, token])?;
        self.delete(tenant, url, &[("force", permanently.to_string())])
            .await
    }

    pub(crate) async fn list_resources<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        collection: &str,
        params: QueryParams,
    ) -> Result<SearchResults<T>, Error> {
        let url = self.endpoint(&[collection])?;
        self.get(tenant, url, &params).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Map a non-success response onto an [`Error`].
    ///
    /// The message comes from the `X-SiteWhere-Error` header when present,
    /// then from a JSON `message` field, then from the raw body.
    pub(crate) async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let header_message = resp
            .headers()
            .get(ERROR_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        let body = resp.text().await.unwrap_or_default();
        let message = header_message
            .or_else(|| {
                serde_json::from_str::<ErrorResponse>(&body)
                    .ok()
                    .and_then(|e| e.message.or(e.error))
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            });

        debug!(status = status.as_u16(), %message, "request failed");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication {
                status: Some(status.as_u16()),
                message,
            },
            StatusCode::NOT_FOUND => Error::NotFound { message, body },
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => Error::Validation {
                status: status.as_u16(),
                message,
            },
            _ => Error::Server {
                status: status.as_u16(),
                message,
                body,
            },
        }
    }
}

fn header_value(name: &str, value: &str, sensitive: bool) -> Result<HeaderValue, Error> {
    let mut header = HeaderValue::from_str(value).map_err(|e| Error::InvalidRequest {
        message: format!("invalid {name} header value: {e}"),
    })?;
    header.set_sensitive(sensitive);
    Ok(header)
}

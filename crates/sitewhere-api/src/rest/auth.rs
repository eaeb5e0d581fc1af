// Token acquisition
//
// The platform issues a JWT for basic credentials on `GET jwt` and returns
// it in a response header, not the body.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::Error;
use crate::rest::client::SiteWhereClient;

pub(crate) const JWT_HEADER: &str = "X-Sitewhere-JWT";

impl SiteWhereClient {
    /// Exchange the configured credentials for a JWT.
    ///
    /// `GET jwt` with basic auth. The token is read from the
    /// `X-Sitewhere-JWT` response header and never logged. Nothing is
    /// cached; each call issues a new request.
    pub async fn get_token(&self) -> Result<SecretString, Error> {
        let creds = self.credentials().ok_or_else(|| Error::Authentication {
            status: None,
            message: "no credentials configured for token request".into(),
        })?;

        let url = self.endpoint(&["jwt"])?;
        debug!(username = %creds.username, "requesting JWT at {url}");

        let builder = self
            .http()
            .request(Method::GET, url)
            .basic_auth(&creds.username, Some(creds.password.expose_secret()));
        let resp = self.send(builder).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let token = resp
            .headers()
            .get(JWT_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::from(t.to_owned()))
            .ok_or_else(|| Error::Authentication {
                status: Some(status.as_u16()),
                message: format!("response carried no {JWT_HEADER} header"),
            })?;

        debug!("JWT acquired");
        Ok(token)
    }
}

// System endpoints

use crate::error::Error;
use crate::model::Version;
use crate::rest::client::SiteWhereClient;

impl SiteWhereClient {
    /// Platform version information.
    ///
    /// `GET system/version`, sent with the configured basic credentials.
    pub async fn get_version(&self) -> Result<Version, Error> {
        let url = self.endpoint(&["system", "version"])?;
        self.get(None, url, &[]).await
    }
}

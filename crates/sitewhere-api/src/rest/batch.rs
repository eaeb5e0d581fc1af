// Batch operation endpoints
//
// A batch fans one command out to many devices. The create call returns
// the operation handle straight away; per-device outcomes are polled
// through the operation's elements.

use std::collections::BTreeMap;

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{BatchCommandInvocationRequest, BatchOperation};
use crate::rest::client::SiteWhereClient;
use crate::search::{BatchElementSearchResults, BatchOperationSearchResults, SearchCriteria};

impl SiteWhereClient {
    pub async fn get_batch_operation_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<BatchOperation, Error> {
        self.get_resource(tenant, "batch", token).await
    }

    pub async fn list_batch_operations(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &SearchCriteria,
    ) -> Result<BatchOperationSearchResults, Error> {
        self.list_resources(tenant, "batch", criteria.query()).await
    }

    /// Invoke `command_token` on every device in `hardware_ids` with a
    /// single request.
    ///
    /// `POST batch/command`. Without a `batch_token` the server assigns
    /// one. The returned operation is usually still pending.
    pub async fn create_batch_command_invocation(
        &self,
        tenant: Option<&TenantAuthentication>,
        batch_token: Option<&str>,
        command_token: &str,
        parameters: &BTreeMap<String, String>,
        hardware_ids: &[String],
    ) -> Result<BatchOperation, Error> {
        if hardware_ids.is_empty() {
            return Err(Error::InvalidRequest {
                message: "batch command invocation needs at least one hardware id".into(),
            });
        }

        let request = BatchCommandInvocationRequest {
            token: batch_token.map(str::to_owned),
            command_token: command_token.to_owned(),
            parameter_values: parameters.clone(),
            hardware_ids: hardware_ids.to_vec(),
            ..BatchCommandInvocationRequest::default()
        };

        debug!(
            command_token,
            devices = hardware_ids.len(),
            "creating batch command invocation"
        );
        let url = self.endpoint(&["batch", "command"])?;
        self.post(tenant, url, &request).await
    }

    /// Per-device outcomes of a batch.
    ///
    /// `GET batch/{token}/elements`
    pub async fn list_batch_operation_elements(
        &self,
        tenant: Option<&TenantAuthentication>,
        batch_token: &str,
        criteria: &SearchCriteria,
    ) -> Result<BatchElementSearchResults, Error> {
        let url = self.endpoint(&["batch", batch_token, "elements"])?;
        self.get(tenant, url, &criteria.query()).await
    }
}

// Device group endpoints
//
// Element add and remove send the element list as the body and answer
// with the affected elements.

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{DeviceGroup, DeviceGroupCreateRequest, DeviceGroupElementCreateRequest};
use crate::rest::client::SiteWhereClient;
use crate::search::{DeviceGroupElementSearchResults, DeviceGroupSearchResults, SearchCriteria};

impl SiteWhereClient {
    // ── Groups ───────────────────────────────────────────────────────

    pub async fn get_device_group_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<DeviceGroup, Error> {
        self.get_resource(tenant, "devicegroups", token).await
    }

    pub async fn create_device_group(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &DeviceGroupCreateRequest,
    ) -> Result<DeviceGroup, Error> {
        debug!(name = %request.name, "creating device group");
        self.create_resource(tenant, "devicegroups", request).await
    }

    pub async fn update_device_group(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &DeviceGroupCreateRequest,
    ) -> Result<DeviceGroup, Error> {
        self.update_resource(tenant, "devicegroups", token, request)
            .await
    }

    pub async fn delete_device_group(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<DeviceGroup, Error> {
        self.delete_resource(tenant, "devicegroups", token, permanently)
            .await
    }

    /// List groups, optionally only those carrying `role`.
    pub async fn list_device_groups(
        &self,
        tenant: Option<&TenantAuthentication>,
        role: Option<&str>,
        criteria: &SearchCriteria,
        include_deleted: bool,
    ) -> Result<DeviceGroupSearchResults, Error> {
        let criteria = criteria.with_deleted(include_deleted || criteria.include_deleted);
        let mut params = criteria.query();
        if let Some(role) = role {
            params.push(("role", role.to_owned()));
        }
        self.list_resources(tenant, "devicegroups", params).await
    }

    // ── Elements ─────────────────────────────────────────────────────

    /// `PUT devicegroups/{group}/elements`
    pub async fn add_device_group_elements(
        &self,
        tenant: Option<&TenantAuthentication>,
        group_token: &str,
        elements: &[DeviceGroupElementCreateRequest],
    ) -> Result<DeviceGroupElementSearchResults, Error> {
        debug!(group_token, count = elements.len(), "adding group elements");
        let url = self.endpoint(&["devicegroups", group_token, "elements"])?;
        self.put(tenant, url, &elements).await
    }

    /// `GET devicegroups/{group}/elements`. With `include_details` the
    /// server also populates the referenced devices and groups.
    pub async fn list_device_group_elements(
        &self,
        tenant: Option<&TenantAuthentication>,
        group_token: &str,
        include_details: bool,
        criteria: &SearchCriteria,
    ) -> Result<DeviceGroupElementSearchResults, Error> {
        let url = self.endpoint(&["devicegroups", group_token, "elements"])?;
        let mut params = criteria.query();
        params.push(("includeDetails", include_details.to_string()));
        self.get(tenant, url, &params).await
    }

    /// `DELETE devicegroups/{group}/elements` with the elements to remove
    /// as the body.
    pub async fn delete_device_group_elements(
        &self,
        tenant: Option<&TenantAuthentication>,
        group_token: &str,
        elements: &[DeviceGroupElementCreateRequest],
    ) -> Result<DeviceGroupElementSearchResults, Error> {
        debug!(group_token, count = elements.len(), "removing group elements");
        let url = self.endpoint(&["devicegroups", group_token, "elements"])?;
        self.delete_with_body(tenant, url, &elements).await
    }
}

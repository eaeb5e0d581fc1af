// Device assignment endpoints
//
// An assignment ties a device to a customer, area and asset. The platform
// allows one active assignment per device and answers a second create
// with a conflict, which surfaces as `Error::Validation`.

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{
    DeviceAssignment, DeviceAssignmentCreateRequest, DeviceAssignmentStatus, Metadata,
    MetadataProvider,
};
use crate::rest::client::SiteWhereClient;
use crate::search::{AssignmentSearchCriteria, DeviceAssignmentSearchResults, SearchCriteria};

impl SiteWhereClient {
    pub async fn get_device_assignment_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<DeviceAssignment, Error> {
        self.get_resource(tenant, "assignments", token).await
    }

    pub async fn create_device_assignment(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &DeviceAssignmentCreateRequest,
    ) -> Result<DeviceAssignment, Error> {
        debug!(device_token = %request.device_token, "creating device assignment");
        self.create_resource(tenant, "assignments", request).await
    }

    pub async fn update_device_assignment(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &DeviceAssignmentCreateRequest,
    ) -> Result<DeviceAssignment, Error> {
        self.update_resource(tenant, "assignments", token, request)
            .await
    }

    pub async fn delete_device_assignment(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<DeviceAssignment, Error> {
        self.delete_resource(tenant, "assignments", token, permanently)
            .await
    }

    pub async fn list_device_assignments(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &AssignmentSearchCriteria,
    ) -> Result<DeviceAssignmentSearchResults, Error> {
        self.list_resources(tenant, "assignments", criteria.query())
            .await
    }

    /// Replace the assignment's metadata map.
    ///
    /// `PUT assignments/{token}/metadata`
    pub async fn update_device_assignment_metadata(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        metadata: &Metadata,
    ) -> Result<DeviceAssignment, Error> {
        let url = self.endpoint(&["assignments", token, "metadata"])?;
        let body = MetadataProvider::from(metadata.clone());
        self.put(tenant, url, &body).await
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// End an assignment, freeing the device for a new one.
    ///
    /// `POST assignments/{token}/end`
    pub async fn release_device_assignment(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<DeviceAssignment, Error> {
        debug!(token, "releasing device assignment");
        let url = self.endpoint(&["assignments", token, "end"])?;
        self.post_empty(tenant, url).await
    }

    /// `POST assignments/{token}/missing`
    pub async fn mark_device_assignment_missing(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<DeviceAssignment, Error> {
        debug!(token, "marking device assignment missing");
        let url = self.endpoint(&["assignments", token, "missing"])?;
        self.post_empty(tenant, url).await
    }

    // ── By area / asset ──────────────────────────────────────────────

    /// `GET areas/{area}/assignments`
    pub async fn list_assignments_for_area(
        &self,
        tenant: Option<&TenantAuthentication>,
        area_token: &str,
        criteria: &SearchCriteria,
    ) -> Result<DeviceAssignmentSearchResults, Error> {
        let url = self.endpoint(&["areas", area_token, "assignments"])?;
        self.get(tenant, url, &criteria.query()).await
    }

    /// `GET assets/{asset}/assignments`, optionally filtered by status.
    pub async fn list_assignments_for_asset(
        &self,
        tenant: Option<&TenantAuthentication>,
        asset_token: &str,
        status: Option<DeviceAssignmentStatus>,
        criteria: &SearchCriteria,
    ) -> Result<DeviceAssignmentSearchResults, Error> {
        let url = self.endpoint(&["assets", asset_token, "assignments"])?;
        let mut params = criteria.query();
        if let Some(status) = status {
            params.push(("status", status.as_str().to_owned()));
        }
        self.get(tenant, url, &params).await
    }
}

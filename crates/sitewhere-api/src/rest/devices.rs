// Device endpoints
//
// Devices are keyed by token. The hardware-id variants address the same
// resources: on the platform versions this client targets, the hardware
// id occupies the token slot of the path.

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{Device, DeviceAssignment, DeviceCreateRequest, DeviceEventBatch, DeviceEventBatchResponse};
use crate::rest::client::SiteWhereClient;
use crate::search::{
    DateRangeSearchCriteria, DeviceAssignmentSearchResults, DeviceListOptions,
    DeviceSearchResults, SearchCriteria,
};

impl SiteWhereClient {
    // ── By token ─────────────────────────────────────────────────────

    pub async fn get_device_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<Device, Error> {
        self.get_resource(tenant, "devices", token).await
    }

    pub async fn create_device(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &DeviceCreateRequest,
    ) -> Result<Device, Error> {
        debug!(
            device_type_token = %request.device_type_token,
            "creating device"
        );
        self.create_resource(tenant, "devices", request).await
    }

    pub async fn update_device(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &DeviceCreateRequest,
    ) -> Result<Device, Error> {
        self.update_resource(tenant, "devices", token, request).await
    }

    pub async fn delete_device(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<Device, Error> {
        self.delete_resource(tenant, "devices", token, permanently)
            .await
    }

    /// List devices, optionally bounded by creation date.
    pub async fn list_devices(
        &self,
        tenant: Option<&TenantAuthentication>,
        options: DeviceListOptions,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<DeviceSearchResults, Error> {
        let mut criteria = *criteria;
        criteria.paging.include_deleted |= options.include_deleted;

        let mut params = criteria.query();
        params.extend(options.query());
        self.list_resources(tenant, "devices", params).await
    }

    // ── By hardware id ───────────────────────────────────────────────

    #[deprecated(note = "devices are keyed by token; use get_device_by_token")]
    pub async fn get_device_by_hardware_id(
        &self,
        tenant: Option<&TenantAuthentication>,
        hardware_id: &str,
    ) -> Result<Device, Error> {
        self.get_device_by_token(tenant, hardware_id).await
    }

    #[deprecated(note = "devices are keyed by token; use update_device")]
    pub async fn update_device_by_hardware_id(
        &self,
        tenant: Option<&TenantAuthentication>,
        hardware_id: &str,
        request: &DeviceCreateRequest,
    ) -> Result<Device, Error> {
        self.update_device(tenant, hardware_id, request).await
    }

    #[deprecated(note = "devices are keyed by token; use delete_device")]
    pub async fn delete_device_by_hardware_id(
        &self,
        tenant: Option<&TenantAuthentication>,
        hardware_id: &str,
        permanently: bool,
    ) -> Result<Device, Error> {
        self.delete_device(tenant, hardware_id, permanently).await
    }

    // ── Assignments of a device ──────────────────────────────────────

    /// The device's active assignment.
    ///
    /// `GET devices/{id}/assignment`. Fails with `NotFound` when the
    /// device exists but is unassigned.
    pub async fn get_current_assignment_for_device(
        &self,
        tenant: Option<&TenantAuthentication>,
        hardware_id: &str,
    ) -> Result<DeviceAssignment, Error> {
        let url = self.endpoint(&["devices", hardware_id, "assignment"])?;
        self.get(tenant, url, &[]).await
    }

    /// Every assignment the device has had, newest first.
    ///
    /// `GET devices/{id}/assignments`
    pub async fn list_device_assignment_history(
        &self,
        tenant: Option<&TenantAuthentication>,
        hardware_id: &str,
        criteria: &SearchCriteria,
    ) -> Result<DeviceAssignmentSearchResults, Error> {
        let url = self.endpoint(&["devices", hardware_id, "assignments"])?;
        self.get(tenant, url, &criteria.query()).await
    }

    // ── Event batches ────────────────────────────────────────────────

    /// Submit measurements, locations and alerts for one device in a
    /// single request. They are recorded against its active assignment.
    ///
    /// `POST devices/{id}/batch`
    pub async fn add_device_event_batch(
        &self,
        tenant: Option<&TenantAuthentication>,
        hardware_id: &str,
        batch: &DeviceEventBatch,
    ) -> Result<DeviceEventBatchResponse, Error> {
        debug!(
            hardware_id,
            measurements = batch.measurements.len(),
            locations = batch.locations.len(),
            alerts = batch.alerts.len(),
            "submitting event batch"
        );
        let url = self.endpoint(&["devices", hardware_id, "batch"])?;
        self.post(tenant, url, batch).await
    }
}

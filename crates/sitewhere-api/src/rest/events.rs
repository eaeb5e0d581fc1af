// Device event endpoints
//
// Events are recorded against an assignment and listed per assignment
// under `assignments/{token}/{kind}`, optionally bounded by event date.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{
    DeviceAlert, DeviceAlertCreateRequest, DeviceCommandInvocation,
    DeviceCommandInvocationCreateRequest, DeviceLocation, DeviceLocationCreateRequest,
    DeviceMeasurement, DeviceMeasurementCreateRequest,
};
use crate::rest::client::SiteWhereClient;
use crate::search::{
    DateRangeSearchCriteria, DeviceAlertSearchResults, DeviceCommandInvocationSearchResults,
    DeviceLocationSearchResults, DeviceMeasurementSearchResults, SearchResults,
};

impl SiteWhereClient {
    async fn create_event<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        kind: &str,
        request: &B,
    ) -> Result<T, Error> {
        debug!(assignment_token, kind, "recording event");
        let url = self.endpoint(&["assignments", assignment_token, kind])?;
        self.post(tenant, url, request).await
    }

    async fn list_events<T: DeserializeOwned>(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        kind: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<SearchResults<T>, Error> {
        let url = self.endpoint(&["assignments", assignment_token, kind])?;
        self.get(tenant, url, &criteria.query()).await
    }

    // ── Measurements ─────────────────────────────────────────────────

    pub async fn create_device_measurement(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        request: &DeviceMeasurementCreateRequest,
    ) -> Result<DeviceMeasurement, Error> {
        self.create_event(tenant, assignment_token, "measurements", request)
            .await
    }

    pub async fn list_device_measurements(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<DeviceMeasurementSearchResults, Error> {
        self.list_events(tenant, assignment_token, "measurements", criteria)
            .await
    }

    // ── Locations ────────────────────────────────────────────────────

    pub async fn create_device_location(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        request: &DeviceLocationCreateRequest,
    ) -> Result<DeviceLocation, Error> {
        self.create_event(tenant, assignment_token, "locations", request)
            .await
    }

    pub async fn list_device_locations(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<DeviceLocationSearchResults, Error> {
        self.list_events(tenant, assignment_token, "locations", criteria)
            .await
    }

    // ── Alerts ───────────────────────────────────────────────────────

    pub async fn create_device_alert(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        request: &DeviceAlertCreateRequest,
    ) -> Result<DeviceAlert, Error> {
        self.create_event(tenant, assignment_token, "alerts", request)
            .await
    }

    pub async fn list_device_alerts(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<DeviceAlertSearchResults, Error> {
        self.list_events(tenant, assignment_token, "alerts", criteria)
            .await
    }

    // ── Command invocations ──────────────────────────────────────────

    /// Record a command invocation. Delivery to the device happens
    /// server-side.
    pub async fn create_device_command_invocation(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        request: &DeviceCommandInvocationCreateRequest,
    ) -> Result<DeviceCommandInvocation, Error> {
        self.create_event(tenant, assignment_token, "invocations", request)
            .await
    }

    pub async fn list_device_command_invocations(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<DeviceCommandInvocationSearchResults, Error> {
        self.list_events(tenant, assignment_token, "invocations", criteria)
            .await
    }
}

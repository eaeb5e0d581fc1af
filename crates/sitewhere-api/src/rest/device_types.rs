// Device type and device command endpoints
//
// Commands belong to a device type. They can be created through the
// type's own collection or through `commands` with the type token in
// the body; either way they are addressed by their own token afterwards.

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{DeviceCommand, DeviceCommandCreateRequest, DeviceType, DeviceTypeCreateRequest};
use crate::rest::client::SiteWhereClient;
use crate::search::{DeviceCommandSearchResults, DeviceTypeSearchResults, SearchCriteria};

impl SiteWhereClient {
    // ── Device types ─────────────────────────────────────────────────

    pub async fn get_device_type_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<DeviceType, Error> {
        self.get_resource(tenant, "devicetypes", token).await
    }

    pub async fn create_device_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &DeviceTypeCreateRequest,
    ) -> Result<DeviceType, Error> {
        debug!(name = %request.name, "creating device type");
        self.create_resource(tenant, "devicetypes", request).await
    }

    pub async fn update_device_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &DeviceTypeCreateRequest,
    ) -> Result<DeviceType, Error> {
        self.update_resource(tenant, "devicetypes", token, request)
            .await
    }

    /// Soft-deleted types stay listable with `include_deleted`.
    pub async fn delete_device_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<DeviceType, Error> {
        self.delete_resource(tenant, "devicetypes", token, permanently)
            .await
    }

    pub async fn list_device_types(
        &self,
        tenant: Option<&TenantAuthentication>,
        include_deleted: bool,
        include_detailed_asset_info: bool,
        criteria: &SearchCriteria,
    ) -> Result<DeviceTypeSearchResults, Error> {
        let criteria = criteria.with_deleted(include_deleted || criteria.include_deleted);
        let mut params = criteria.query();
        params.push((
            "includeDetailedAssetInfo",
            include_detailed_asset_info.to_string(),
        ));
        self.list_resources(tenant, "devicetypes", params).await
    }

    // ── Device commands ──────────────────────────────────────────────

    pub async fn get_device_command_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<DeviceCommand, Error> {
        self.get_resource(tenant, "commands", token).await
    }

    /// `POST commands`. The request must name its device type.
    pub async fn create_device_command(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &DeviceCommandCreateRequest,
    ) -> Result<DeviceCommand, Error> {
        if request.device_type_token.is_none() {
            return Err(Error::InvalidRequest {
                message: "device command requires a device type token".into(),
            });
        }
        debug!(name = %request.name, "creating device command");
        self.create_resource(tenant, "commands", request).await
    }

    /// `POST devicetypes/{type}/commands`
    pub async fn create_device_command_for_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        device_type_token: &str,
        request: &DeviceCommandCreateRequest,
    ) -> Result<DeviceCommand, Error> {
        debug!(device_type_token, name = %request.name, "creating device command");
        let url = self.endpoint(&["devicetypes", device_type_token, "commands"])?;
        self.post(tenant, url, request).await
    }

    pub async fn update_device_command(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &DeviceCommandCreateRequest,
    ) -> Result<DeviceCommand, Error> {
        self.update_resource(tenant, "commands", token, request)
            .await
    }

    pub async fn delete_device_command(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<DeviceCommand, Error> {
        self.delete_resource(tenant, "commands", token, permanently)
            .await
    }

    /// All commands of one device type, in a single page.
    ///
    /// `GET devicetypes/{type}/commands`
    pub async fn list_device_commands(
        &self,
        tenant: Option<&TenantAuthentication>,
        device_type_token: &str,
        include_deleted: bool,
    ) -> Result<DeviceCommandSearchResults, Error> {
        let url = self.endpoint(&["devicetypes", device_type_token, "commands"])?;
        let params = SearchCriteria::all().with_deleted(include_deleted).query();
        self.get(tenant, url, &params).await
    }
}

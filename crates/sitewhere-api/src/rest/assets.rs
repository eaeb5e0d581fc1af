// Asset type and asset endpoints

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{Asset, AssetCreateRequest, AssetType, AssetTypeCreateRequest};
use crate::rest::client::SiteWhereClient;
use crate::search::{AssetSearchCriteria, AssetSearchResults, AssetTypeSearchResults, SearchCriteria};

impl SiteWhereClient {
    // ── Asset types ──────────────────────────────────────────────────

    pub async fn get_asset_type_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<AssetType, Error> {
        self.get_resource(tenant, "assettypes", token).await
    }

    pub async fn create_asset_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &AssetTypeCreateRequest,
    ) -> Result<AssetType, Error> {
        debug!(name = %request.name, "creating asset type");
        self.create_resource(tenant, "assettypes", request).await
    }

    pub async fn update_asset_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &AssetTypeCreateRequest,
    ) -> Result<AssetType, Error> {
        self.update_resource(tenant, "assettypes", token, request)
            .await
    }

    pub async fn delete_asset_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<AssetType, Error> {
        self.delete_resource(tenant, "assettypes", token, permanently)
            .await
    }

    pub async fn list_asset_types(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &SearchCriteria,
    ) -> Result<AssetTypeSearchResults, Error> {
        self.list_resources(tenant, "assettypes", criteria.query())
            .await
    }

    // ── Assets ───────────────────────────────────────────────────────

    pub async fn get_asset_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<Asset, Error> {
        self.get_resource(tenant, "assets", token).await
    }

    pub async fn create_asset(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &AssetCreateRequest,
    ) -> Result<Asset, Error> {
        debug!(name = %request.name, "creating asset");
        self.create_resource(tenant, "assets", request).await
    }

    pub async fn update_asset(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &AssetCreateRequest,
    ) -> Result<Asset, Error> {
        self.update_resource(tenant, "assets", token, request).await
    }

    pub async fn delete_asset(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<Asset, Error> {
        self.delete_resource(tenant, "assets", token, permanently)
            .await
    }

    pub async fn list_assets(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &AssetSearchCriteria,
    ) -> Result<AssetSearchResults, Error> {
        self.list_resources(tenant, "assets", criteria.query()).await
    }

    /// Free-text asset search within an asset module.
    ///
    /// `GET assets/modules/{module}/assets?criteria=...`. Kept for
    /// platforms that still expose asset modules; newer ones answer
    /// `NotFound`.
    #[deprecated(note = "asset modules were replaced by asset types; use list_assets")]
    pub async fn get_assets_by_module_id(
        &self,
        tenant: Option<&TenantAuthentication>,
        module_id: &str,
        criteria: &str,
    ) -> Result<AssetSearchResults, Error> {
        let url = self.endpoint(&["assets", "modules", module_id, "assets"])?;
        self.get(tenant, url, &[("criteria", criteria.to_owned())])
            .await
    }
}

// Area type, area and zone endpoints
//
// Areas form a hierarchy through `parent_area_token`; zones are polygons
// created under an area but addressed by their own token afterwards.

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{Area, AreaCreateRequest, AreaType, AreaTypeCreateRequest, Zone, ZoneCreateRequest};
use crate::rest::client::SiteWhereClient;
use crate::search::{
    AreaSearchCriteria, AreaSearchResults, AreaTypeSearchResults, SearchCriteria,
    ZoneSearchResults,
};

impl SiteWhereClient {
    // ── Area types ───────────────────────────────────────────────────

    /// `GET areatypes/{token}`
    pub async fn get_area_type_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<AreaType, Error> {
        self.get_resource(tenant, "areatypes", token).await
    }

    pub async fn create_area_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &AreaTypeCreateRequest,
    ) -> Result<AreaType, Error> {
        debug!(name = %request.name, "creating area type");
        self.create_resource(tenant, "areatypes", request).await
    }

    pub async fn update_area_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &AreaTypeCreateRequest,
    ) -> Result<AreaType, Error> {
        self.update_resource(tenant, "areatypes", token, request).await
    }

    pub async fn delete_area_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<AreaType, Error> {
        self.delete_resource(tenant, "areatypes", token, permanently)
            .await
    }

    pub async fn list_area_types(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &SearchCriteria,
    ) -> Result<AreaTypeSearchResults, Error> {
        self.list_resources(tenant, "areatypes", criteria.query())
            .await
    }

    // ── Areas ────────────────────────────────────────────────────────

    /// `GET areas/{token}`
    pub async fn get_area_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<Area, Error> {
        self.get_resource(tenant, "areas", token).await
    }

    pub async fn create_area(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &AreaCreateRequest,
    ) -> Result<Area, Error> {
        debug!(name = %request.name, "creating area");
        self.create_resource(tenant, "areas", request).await
    }

    pub async fn update_area(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &AreaCreateRequest,
    ) -> Result<Area, Error> {
        self.update_resource(tenant, "areas", token, request).await
    }

    pub async fn delete_area(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<Area, Error> {
        self.delete_resource(tenant, "areas", token, permanently).await
    }

    /// List areas, optionally only roots or the children of one parent.
    pub async fn list_areas(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &AreaSearchCriteria,
    ) -> Result<AreaSearchResults, Error> {
        self.list_resources(tenant, "areas", criteria.query()).await
    }

    // ── Zones ────────────────────────────────────────────────────────

    /// `POST areas/{area}/zones`
    pub async fn create_zone(
        &self,
        tenant: Option<&TenantAuthentication>,
        area_token: &str,
        request: &ZoneCreateRequest,
    ) -> Result<Zone, Error> {
        debug!(area_token, name = %request.name, "creating zone");
        let url = self.endpoint(&["areas", area_token, "zones"])?;
        self.post(tenant, url, request).await
    }

    /// `GET areas/{area}/zones`
    pub async fn list_zones_for_area(
        &self,
        tenant: Option<&TenantAuthentication>,
        area_token: &str,
        criteria: &SearchCriteria,
    ) -> Result<ZoneSearchResults, Error> {
        let url = self.endpoint(&["areas", area_token, "zones"])?;
        self.get(tenant, url, &criteria.query()).await
    }

    /// `GET zones/{token}`
    pub async fn get_zone_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<Zone, Error> {
        self.get_resource(tenant, "zones", token).await
    }

    pub async fn delete_zone(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<Zone, Error> {
        self.delete_resource(tenant, "zones", token, permanently).await
    }
}

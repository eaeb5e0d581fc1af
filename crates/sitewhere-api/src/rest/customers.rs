// Customer type and customer endpoints

use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{Customer, CustomerCreateRequest, CustomerType, CustomerTypeCreateRequest};
use crate::rest::client::SiteWhereClient;
use crate::search::{
    CustomerSearchCriteria, CustomerSearchResults, CustomerTypeSearchResults, SearchCriteria,
};

impl SiteWhereClient {
    // ── Customer types ───────────────────────────────────────────────

    pub async fn get_customer_type_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<CustomerType, Error> {
        self.get_resource(tenant, "customertypes", token).await
    }

    pub async fn create_customer_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &CustomerTypeCreateRequest,
    ) -> Result<CustomerType, Error> {
        debug!(name = %request.name, "creating customer type");
        self.create_resource(tenant, "customertypes", request).await
    }

    pub async fn update_customer_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &CustomerTypeCreateRequest,
    ) -> Result<CustomerType, Error> {
        self.update_resource(tenant, "customertypes", token, request)
            .await
    }

    pub async fn delete_customer_type(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<CustomerType, Error> {
        self.delete_resource(tenant, "customertypes", token, permanently)
            .await
    }

    pub async fn list_customer_types(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &SearchCriteria,
    ) -> Result<CustomerTypeSearchResults, Error> {
        self.list_resources(tenant, "customertypes", criteria.query())
            .await
    }

    // ── Customers ────────────────────────────────────────────────────

    pub async fn get_customer_by_token(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
    ) -> Result<Customer, Error> {
        self.get_resource(tenant, "customers", token).await
    }

    pub async fn create_customer(
        &self,
        tenant: Option<&TenantAuthentication>,
        request: &CustomerCreateRequest,
    ) -> Result<Customer, Error> {
        debug!(name = %request.name, "creating customer");
        self.create_resource(tenant, "customers", request).await
    }

    pub async fn update_customer(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        request: &CustomerCreateRequest,
    ) -> Result<Customer, Error> {
        self.update_resource(tenant, "customers", token, request)
            .await
    }

    pub async fn delete_customer(
        &self,
        tenant: Option<&TenantAuthentication>,
        token: &str,
        permanently: bool,
    ) -> Result<Customer, Error> {
        self.delete_resource(tenant, "customers", token, permanently)
            .await
    }

    /// List customers, optionally only roots or the children of one parent.
    pub async fn list_customers(
        &self,
        tenant: Option<&TenantAuthentication>,
        criteria: &CustomerSearchCriteria,
    ) -> Result<CustomerSearchResults, Error> {
        self.list_resources(tenant, "customers", criteria.query())
            .await
    }
}

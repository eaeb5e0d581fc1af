// sitewhere-api: Async Rust client for the SiteWhere IoT platform REST API

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod rest;
pub mod search;
pub mod transport;

pub use auth::{Credentials, DefaultTenant, TenantAuthentication, TenantId};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind};
pub use rest::SiteWhereClient;
pub use search::{
    AreaSearchCriteria, AssetSearchCriteria, AssignmentSearchCriteria, CustomerSearchCriteria,
    DateRangeSearchCriteria, DeviceListOptions, SearchCriteria, SearchResults, collect_all_pages,
};
pub use transport::{TlsMode, TransportConfig};

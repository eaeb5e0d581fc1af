//! Paging, filtering and result envelopes for list operations.
//!
//! Every list endpoint returns `{ "results": [...], "numResults": N }`,
//! where `N` counts all matches regardless of the paging window.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{
    Area, AreaType, Asset, AssetType, BatchElement, BatchOperation, Customer, CustomerType,
    Device, DeviceAlert, DeviceAssignment, DeviceAssignmentStatus, DeviceCommand,
    DeviceCommandInvocation, DeviceGroup, DeviceGroupElement, DeviceLocation, DeviceMeasurement,
    DeviceStream, DeviceType, Zone,
};

/// Query pairs appended to a list request.
pub(crate) type QueryParams = Vec<(&'static str, String)>;

// ── Results ──────────────────────────────────────────────────────────

/// One page of matches plus the total match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub num_results: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            num_results: 0,
            results: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SearchResults<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl<T> IntoIterator for SearchResults<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

pub type AreaTypeSearchResults = SearchResults<AreaType>;
pub type AreaSearchResults = SearchResults<Area>;
pub type ZoneSearchResults = SearchResults<Zone>;
pub type AssetTypeSearchResults = SearchResults<AssetType>;
pub type AssetSearchResults = SearchResults<Asset>;
pub type CustomerTypeSearchResults = SearchResults<CustomerType>;
pub type CustomerSearchResults = SearchResults<Customer>;
pub type DeviceTypeSearchResults = SearchResults<DeviceType>;
pub type DeviceCommandSearchResults = SearchResults<DeviceCommand>;
pub type DeviceSearchResults = SearchResults<Device>;
pub type DeviceAssignmentSearchResults = SearchResults<DeviceAssignment>;
pub type DeviceMeasurementSearchResults = SearchResults<DeviceMeasurement>;
pub type DeviceLocationSearchResults = SearchResults<DeviceLocation>;
pub type DeviceAlertSearchResults = SearchResults<DeviceAlert>;
pub type DeviceCommandInvocationSearchResults = SearchResults<DeviceCommandInvocation>;
pub type DeviceStreamSearchResults = SearchResults<DeviceStream>;
pub type DeviceGroupSearchResults = SearchResults<DeviceGroup>;
pub type DeviceGroupElementSearchResults = SearchResults<DeviceGroupElement>;
pub type BatchOperationSearchResults = SearchResults<BatchOperation>;
pub type BatchElementSearchResults = SearchResults<BatchElement>;

// ── Criteria ─────────────────────────────────────────────────────────

/// Paging window. Pages are 1-based; a page size of 0 asks the server
/// for every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCriteria {
    pub page_number: u32,
    pub page_size: u32,
    /// Also return soft-deleted resources.
    pub include_deleted: bool,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 100,
            include_deleted: false,
        }
    }
}

impl SearchCriteria {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            include_deleted: false,
        }
    }

    /// Every match in a single page.
    pub fn all() -> Self {
        Self::new(1, 0)
    }

    pub fn with_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }

    /// The same filter, one page further on.
    pub fn next_page(self) -> Self {
        Self {
            page_number: self.page_number.saturating_add(1),
            ..self
        }
    }

    pub(crate) fn query(&self) -> QueryParams {
        let mut params = vec![
            ("page", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if self.include_deleted {
            params.push(("includeDeleted", "true".to_owned()));
        }
        params
    }
}

/// Paging plus an optional event-date window.
///
/// Either bound may be absent; when both are set `start <= end` holds,
/// which [`DateRangeSearchCriteria::with_range`] enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeSearchCriteria {
    pub paging: SearchCriteria,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl DateRangeSearchCriteria {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            paging: SearchCriteria::new(page_number, page_size),
            start_date: None,
            end_date: None,
        }
    }

    /// Restrict to `[start, end]`. Fails if both bounds are set and
    /// `start` is after `end`.
    pub fn with_range(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, Error> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(Error::InvalidRequest {
                    message: format!("start date {s} is after end date {e}"),
                });
            }
        }
        self.start_date = start;
        self.end_date = end;
        Ok(self)
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub(crate) fn query(&self) -> QueryParams {
        let mut params = self.paging.query();
        if let Some(start) = self.start_date {
            params.push(("startDate", start.to_rfc3339_opts(SecondsFormat::Millis, true)));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate", end.to_rfc3339_opts(SecondsFormat::Millis, true)));
        }
        params
    }
}

impl From<SearchCriteria> for DateRangeSearchCriteria {
    fn from(paging: SearchCriteria) -> Self {
        Self {
            paging,
            start_date: None,
            end_date: None,
        }
    }
}

/// Filters for area listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaSearchCriteria {
    pub paging: SearchCriteria,
    /// Only areas without a parent.
    pub root_only: Option<bool>,
    pub parent_area_token: Option<String>,
    pub area_type_token: Option<String>,
}

impl AreaSearchCriteria {
    pub(crate) fn query(&self) -> QueryParams {
        let mut params = self.paging.query();
        push_opt(&mut params, "rootOnly", self.root_only);
        push_opt(&mut params, "parentAreaToken", self.parent_area_token.as_ref());
        push_opt(&mut params, "areaTypeToken", self.area_type_token.as_ref());
        params
    }
}

/// Filters for customer listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerSearchCriteria {
    pub paging: SearchCriteria,
    /// Only customers without a parent.
    pub root_only: Option<bool>,
    pub parent_customer_token: Option<String>,
    pub customer_type_token: Option<String>,
}

impl CustomerSearchCriteria {
    pub(crate) fn query(&self) -> QueryParams {
        let mut params = self.paging.query();
        push_opt(&mut params, "rootOnly", self.root_only);
        push_opt(&mut params, "parentCustomerToken", self.parent_customer_token.as_ref());
        push_opt(&mut params, "customerTypeToken", self.customer_type_token.as_ref());
        params
    }
}

/// Filters for asset listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSearchCriteria {
    pub paging: SearchCriteria,
    pub asset_type_token: Option<String>,
}

impl AssetSearchCriteria {
    pub(crate) fn query(&self) -> QueryParams {
        let mut params = self.paging.query();
        push_opt(&mut params, "assetTypeToken", self.asset_type_token.as_ref());
        params
    }
}

/// Filters for device assignment listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSearchCriteria {
    pub paging: SearchCriteria,
    pub status: Option<DeviceAssignmentStatus>,
    pub device_token: Option<String>,
    pub customer_token: Option<String>,
    pub area_token: Option<String>,
    pub asset_token: Option<String>,
}

impl AssignmentSearchCriteria {
    pub(crate) fn query(&self) -> QueryParams {
        let mut params = self.paging.query();
        push_opt(&mut params, "status", self.status.map(DeviceAssignmentStatus::as_str));
        push_opt(&mut params, "deviceToken", self.device_token.as_ref());
        push_opt(&mut params, "customerToken", self.customer_token.as_ref());
        push_opt(&mut params, "areaToken", self.area_token.as_ref());
        push_opt(&mut params, "assetToken", self.asset_token.as_ref());
        params
    }
}

/// Extra population and filtering flags for device listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeviceListOptions {
    pub include_deleted: bool,
    /// Only devices without an active assignment.
    pub exclude_assigned: bool,
    pub include_device_type: bool,
    pub include_assignment: bool,
}

impl DeviceListOptions {
    /// Flags other than `include_deleted`, which travels with the paging
    /// criteria.
    pub(crate) fn query(self) -> QueryParams {
        vec![
            ("excludeAssigned", self.exclude_assigned.to_string()),
            ("includeDeviceType", self.include_device_type.to_string()),
            ("includeAssignment", self.include_assignment.to_string()),
        ]
    }
}

// ── Pagination ───────────────────────────────────────────────────────

/// Drive a list operation page by page and gather every result.
///
/// `fetch` is called with page 1, 2, ... of `page_size` until the total
/// reported by `numResults` is reached or a short page arrives. A
/// `page_size` of 0 is a single unpaged request.
///
/// ```ignore
/// let devices = collect_all_pages(SearchCriteria::new(1, 200), |page| {
///     client.list_devices(tenant, options, &page.into())
/// })
/// .await?;
/// ```
pub async fn collect_all_pages<T, F, Fut>(start: SearchCriteria, fetch: F) -> Result<Vec<T>, Error>
where
    F: Fn(SearchCriteria) -> Fut,
    Fut: Future<Output = Result<SearchResults<T>, Error>>,
{
    let mut all = Vec::new();
    let mut criteria = start;

    loop {
        let page = fetch(criteria).await?;
        let received = page.results.len();
        let total = page.num_results;
        all.extend(page.results);

        let page_size = usize::try_from(criteria.page_size).unwrap_or(usize::MAX);
        if criteria.page_size == 0
            || received == 0
            || received < page_size
            || u64::try_from(all.len()).unwrap_or(u64::MAX) >= total
        {
            break;
        }

        criteria = criteria.next_page();
    }

    Ok(all)
}

fn push_opt<V: ToString>(params: &mut QueryParams, key: &'static str, value: Option<V>) {
    if let Some(v) = value {
        params.push((key, v.to_string()));
    }
}

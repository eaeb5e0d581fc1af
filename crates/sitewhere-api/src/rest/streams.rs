// Device stream endpoints
//
// A stream belongs to an assignment and carries opaque binary chunks keyed
// by a caller-assigned sequence number. Chunk bodies travel as
// `application/octet-stream`, never JSON.

use bytes::Bytes;
use tracing::debug;

use crate::auth::TenantAuthentication;
use crate::error::Error;
use crate::model::{DeviceStream, DeviceStreamCreateRequest};
use crate::rest::client::SiteWhereClient;
use crate::search::{DateRangeSearchCriteria, DeviceStreamSearchResults};

impl SiteWhereClient {
    /// `POST assignments/{assignment}/streams`
    pub async fn create_device_stream(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        request: &DeviceStreamCreateRequest,
    ) -> Result<DeviceStream, Error> {
        debug!(assignment_token, stream_id = %request.stream_id, "creating device stream");
        let url = self.endpoint(&["assignments", assignment_token, "streams"])?;
        self.post(tenant, url, request).await
    }

    /// `GET assignments/{assignment}/streams/{stream}`
    pub async fn get_device_stream(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        stream_id: &str,
    ) -> Result<DeviceStream, Error> {
        let url = self.endpoint(&["assignments", assignment_token, "streams", stream_id])?;
        self.get(tenant, url, &[]).await
    }

    /// Streams of an assignment, optionally limited to those created within
    /// the criteria's date window.
    pub async fn list_device_streams(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<DeviceStreamSearchResults, Error> {
        let url = self.endpoint(&["assignments", assignment_token, "streams"])?;
        self.get(tenant, url, &criteria.query()).await
    }

    // ── Chunks ───────────────────────────────────────────────────────

    /// Store one chunk. Sequence numbers need not be contiguous.
    ///
    /// `POST assignments/{assignment}/streams/{stream}/data/{seq}`
    pub async fn add_device_stream_data(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        stream_id: &str,
        sequence_number: u64,
        data: Bytes,
    ) -> Result<(), Error> {
        let seq = sequence_number.to_string();
        let url = self.endpoint(&[
            "assignments",
            assignment_token,
            "streams",
            stream_id,
            "data",
            &seq,
        ])?;
        self.post_bytes(tenant, url, data).await
    }

    /// Fetch exactly the chunk stored under `sequence_number`. A number
    /// never written fails with `NotFound`.
    pub async fn get_device_stream_data(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        stream_id: &str,
        sequence_number: u64,
    ) -> Result<Bytes, Error> {
        let seq = sequence_number.to_string();
        let url = self.endpoint(&[
            "assignments",
            assignment_token,
            "streams",
            stream_id,
            "data",
            &seq,
        ])?;
        self.get_bytes(tenant, url, &[]).await
    }

    /// A page of chunks as the server concatenates them, in the server's
    /// order. The date window filters on when each chunk was stored.
    ///
    /// `GET assignments/{assignment}/streams/{stream}/data`
    pub async fn list_device_stream_data(
        &self,
        tenant: Option<&TenantAuthentication>,
        assignment_token: &str,
        stream_id: &str,
        criteria: &DateRangeSearchCriteria,
    ) -> Result<Bytes, Error> {
        let url = self.endpoint(&["assignments", assignment_token, "streams", stream_id, "data"])?;
        self.get_bytes(tenant, url, &criteria.query()).await
    }
}

// ── Device streams ──

use serde::{Deserialize, Serialize};

use super::common::{Metadata, PersistentEntity};

/// A binary data stream attached to a device assignment, addressed by
/// `(assignment token, stream id)`.
///
/// Chunks are opaque and ordered only by the caller-assigned sequence
/// number; the client neither reassembles nor checks for gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStream {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub assignment_token: String,
    pub stream_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStreamCreateRequest {
    pub stream_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

// ── Batch operations ──
//
// A batch operation is a server-tracked fan-out (one command to many
// devices). The client creates it with a single request and then polls
// the operation and its elements by token.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Metadata, PersistentEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BatchOperationType {
    InvokeCommand,
    UpdateFirmware,
}

/// Overall progress of a batch operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchOperationStatus {
    #[default]
    Unprocessed,
    Initializing,
    InitializedSuccessfully,
    InitializedWithErrors,
    Processing,
    FinishedSuccessfully,
    FinishedWithErrors,
}

impl BatchOperationStatus {
    /// `true` while the platform is still working through the batch.
    ///
    /// A batch that initialized with errors still goes on to process the
    /// elements that were created, so it counts as pending too.
    pub fn is_pending(self) -> bool {
        !matches!(self, Self::FinishedSuccessfully | Self::FinishedWithErrors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOperation {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub operation_type: BatchOperationType,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub processing_status: BatchOperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_started_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_ended_date: Option<DateTime<Utc>>,
}

/// Per-device outcome of a batch operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementProcessingStatus {
    #[default]
    Unprocessed,
    Processing,
    Failed,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub batch_operation_token: String,
    pub device_token: String,
    #[serde(default)]
    pub processing_status: ElementProcessingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Body of `POST batch/command`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCommandInvocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub command_token: String,
    #[serde(default)]
    pub parameter_values: BTreeMap<String, String>,
    pub hardware_ids: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

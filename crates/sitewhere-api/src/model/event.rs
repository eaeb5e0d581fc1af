// ── Device events ──
//
// Every event hangs off a device assignment and carries an event date.
// Events are immutable once stored. Payload-specific fields live in small
// content groups that the stored event and its create request both flatten.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Location, Metadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DeviceEventType {
    Measurement,
    Location,
    Alert,
    CommandInvocation,
    CommandResponse,
    StateChange,
}

/// Fields shared by every stored event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<DeviceEventType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    pub device_assignment_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_token: Option<String>,
    pub event_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Metadata,
}

// ── Content groups ───────────────────────────────────────────────────

/// Fields every event create request carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreateContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_id: Option<String>,
    /// Defaults to the server's receive time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    /// Also record the event as the device's most recent state.
    #[serde(default)]
    pub update_state: bool,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementContent {
    pub name: String,
    pub value: f64,
}

/// Location events reuse the boundary point shape.
pub type LocationContent = Location;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSource {
    #[default]
    Device,
    System,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertContent {
    #[serde(default)]
    pub source: AlertSource,
    #[serde(default)]
    pub level: AlertLevel,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
}

// ── Measurements ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMeasurement {
    #[serde(flatten)]
    pub event: DeviceEvent,
    #[serde(flatten)]
    pub measurement: MeasurementContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMeasurementCreateRequest {
    #[serde(flatten)]
    pub event: EventCreateContent,
    #[serde(flatten)]
    pub measurement: MeasurementContent,
}

impl DeviceMeasurementCreateRequest {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            event: EventCreateContent::default(),
            measurement: MeasurementContent {
                name: name.into(),
                value,
            },
        }
    }
}

// ── Locations ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceLocation {
    #[serde(flatten)]
    pub event: DeviceEvent,
    #[serde(flatten)]
    pub location: LocationContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceLocationCreateRequest {
    #[serde(flatten)]
    pub event: EventCreateContent,
    #[serde(flatten)]
    pub location: LocationContent,
}

// ── Alerts ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAlert {
    #[serde(flatten)]
    pub event: DeviceEvent,
    #[serde(flatten)]
    pub alert: AlertContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAlertCreateRequest {
    #[serde(flatten)]
    pub event: EventCreateContent,
    #[serde(flatten)]
    pub alert: AlertContent,
}

// ── Command invocations ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandInitiator {
    #[default]
    #[serde(rename = "REST")]
    Rest,
    Script,
    Scheduler,
    BatchOperation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandTarget {
    #[default]
    Assignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContent {
    #[serde(default)]
    pub initiator: CommandInitiator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator_id: Option<String>,
    #[serde(default)]
    pub target: CommandTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    pub device_command_token: String,
    #[serde(default)]
    pub parameter_values: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCommandInvocation {
    #[serde(flatten)]
    pub event: DeviceEvent,
    #[serde(flatten)]
    pub invocation: InvocationContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCommandInvocationCreateRequest {
    #[serde(flatten)]
    pub event: EventCreateContent,
    #[serde(flatten)]
    pub invocation: InvocationContent,
}

// ── Batches ──────────────────────────────────────────────────────────

/// Several events for one device submitted in a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEventBatch {
    pub hardware_id: String,
    #[serde(default)]
    pub measurements: Vec<DeviceMeasurementCreateRequest>,
    #[serde(default)]
    pub locations: Vec<DeviceLocationCreateRequest>,
    #[serde(default)]
    pub alerts: Vec<DeviceAlertCreateRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEventBatchResponse {
    #[serde(default)]
    pub created_measurements: Vec<DeviceMeasurement>,
    #[serde(default)]
    pub created_locations: Vec<DeviceLocation>,
    #[serde(default)]
    pub created_alerts: Vec<DeviceAlert>,
}

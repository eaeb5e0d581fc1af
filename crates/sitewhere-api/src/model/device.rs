// ── Device domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BrandingContent, Metadata, PersistentEntity};

/// Whether devices of a type stand alone or host nested devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DeviceContainerPolicy {
    #[default]
    Standalone,
    Composite,
}

/// A hardware model: shared behaviour, commands and branding for a
/// family of devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceType {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub container_policy: DeviceContainerPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type_token: Option<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTypeCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub container_policy: DeviceContainerPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type_token: Option<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Maps a slot in a composite device's schema to a nested device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceElementMapping {
    pub device_element_schema_path: String,
    pub device_token: String,
}

/// A physical device registered with the platform.
///
/// `device_type` and `active_device_assignments` are only populated when
/// the listing asked the server to include them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub device_type_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_device_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub device_element_mappings: Vec<DeviceElementMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<Box<DeviceType>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_device_assignments: Vec<DeviceAssignment>,
}

impl Device {
    /// The device token. On older platform versions this doubles as the
    /// hardware id.
    pub fn token(&self) -> &str {
        &self.entity.token
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub device_type_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_device_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub device_element_mappings: Vec<DeviceElementMapping>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Lifecycle state of a device assignment.
///
/// At most one assignment per device is `Active`; the platform enforces
/// this, the client only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceAssignmentStatus {
    Active,
    Missing,
    Released,
}

impl DeviceAssignmentStatus {
    /// Query-string form, identical to the wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Missing => "Missing",
            Self::Released => "Released",
        }
    }
}

/// Relates a device to a customer, area and asset for a span of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAssignment {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub device_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_token: Option<String>,
    pub status: DeviceAssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_date: Option<DateTime<Utc>>,
}

impl DeviceAssignment {
    pub fn is_active(&self) -> bool {
        self.status == DeviceAssignmentStatus::Active
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAssignmentCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub device_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceAssignmentStatus>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn assignment_parses_platform_shape() {
        let raw = json!({
            "id": "8c0ad6a8-4f1b-4c55-9a3d-0c3e7d2f0a11",
            "token": "assn-1",
            "createdDate": "2024-03-01T12:00:00Z",
            "createdBy": "admin",
            "deleted": false,
            "metadata": { "rack": "B4" },
            "deviceToken": "dev-1",
            "areaToken": "area-1",
            "status": "Active",
            "activeDate": "2024-03-01T12:00:00Z"
        });

        let assignment: DeviceAssignment = serde_json::from_value(raw).unwrap();

        assert_eq!(assignment.entity.token, "assn-1");
        assert_eq!(assignment.entity.metadata.get("rack").map(String::as_str), Some("B4"));
        assert_eq!(assignment.area_token.as_deref(), Some("area-1"));
        assert!(assignment.is_active());
        assert!(assignment.released_date.is_none());
    }

    #[test]
    fn device_round_trips_through_json() {
        let device = Device {
            entity: PersistentEntity {
                token: "dev-7".into(),
                metadata: Metadata::from([("fw".to_owned(), "1.2.0".to_owned())]),
                ..PersistentEntity::default()
            },
            device_type_token: "rpi4".into(),
            parent_device_token: None,
            comments: Some("lab bench".into()),
            status: None,
            device_element_mappings: vec![DeviceElementMapping {
                device_element_schema_path: "/slot/1".into(),
                device_token: "dev-8".into(),
            }],
            device_type: None,
            active_device_assignments: Vec::new(),
        };

        let wire = serde_json::to_value(&device).unwrap();
        assert_eq!(wire["deviceTypeToken"], "rpi4");
        assert_eq!(wire["deviceElementMappings"][0]["deviceElementSchemaPath"], "/slot/1");

        let back: Device = serde_json::from_value(wire).unwrap();
        assert_eq!(back, device);
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let request = DeviceAssignmentCreateRequest {
            device_token: "dev-1".into(),
            ..DeviceAssignmentCreateRequest::default()
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire, json!({ "deviceToken": "dev-1", "metadata": {} }));
    }
}

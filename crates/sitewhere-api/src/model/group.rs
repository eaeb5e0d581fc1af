// ── Device groups ──

use serde::{Deserialize, Serialize};

use super::common::{BrandingContent, Metadata, PersistentEntity};

/// A named collection of devices and nested groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroup {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroupCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

/// What a group element points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupElementTarget<'a> {
    Device(&'a str),
    Group(&'a str),
}

/// One membership entry of a group. Exactly one of `device_token` and
/// `nested_group_token` is set by the server.
///
/// Cycles between nested groups are not checked client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroupElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub group_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_group_token: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl DeviceGroupElement {
    pub fn target(&self) -> Option<GroupElementTarget<'_>> {
        match (&self.device_token, &self.nested_group_token) {
            (Some(device), _) => Some(GroupElementTarget::Device(device)),
            (None, Some(group)) => Some(GroupElementTarget::Group(group)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGroupElementCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_group_token: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl DeviceGroupElementCreateRequest {
    /// An element referencing a device.
    pub fn device(token: impl Into<String>) -> Self {
        Self {
            device_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// An element referencing another group.
    pub fn group(token: impl Into<String>) -> Self {
        Self {
            nested_group_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }
}

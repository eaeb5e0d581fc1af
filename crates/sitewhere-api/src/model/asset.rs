// ── Assets and asset types ──

use serde::{Deserialize, Serialize};

use super::common::{BrandingContent, Metadata, PersistentEntity};

/// Broad category an asset type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AssetCategory {
    Device,
    Person,
    Hardware,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetType {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub asset_category: AssetCategory,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub asset_category: AssetCategory,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

/// A thing a device can be assigned to: a person, a vehicle, a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub asset_type_token: String,
    pub name: String,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub asset_type_token: String,
    pub name: String,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

// ── Areas, area types, zones ──

use serde::{Deserialize, Serialize};

use super::common::{BrandingContent, Location, Metadata, PersistentEntity};

/// Classifies areas and constrains which child area types may nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaType {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub contained_area_type_tokens: Vec<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaTypeCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub contained_area_type_tokens: Vec<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

/// A physical region devices can be deployed into. Areas nest via
/// `parent_area_token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub area_type_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_area_token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub bounds: Vec<Location>,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub area_type_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_area_token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub bounds: Vec<Location>,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

/// A polygon within an area, typically used for geofencing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub area_token: String,
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub metadata: Metadata,
}

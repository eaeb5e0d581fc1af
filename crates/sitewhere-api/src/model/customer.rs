// ── Customers and customer types ──

use serde::{Deserialize, Serialize};

use super::common::{BrandingContent, Metadata, PersistentEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerType {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub contained_customer_type_tokens: Vec<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTypeCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub contained_customer_type_tokens: Vec<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

/// An organization devices are provisioned for. Customers nest via
/// `parent_customer_token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(flatten)]
    pub entity: PersistentEntity,
    pub customer_type_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_customer_token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub customer_type_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_customer_token: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub branding: BrandingContent,
    #[serde(default)]
    pub metadata: Metadata,
}

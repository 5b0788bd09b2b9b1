use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Video,
    Document,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "document" => Ok(Self::Document),
            other => Err(format!("unknown asset type '{}'", other)),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaAssetDto {
    pub id: i32,
    pub name: String,
    pub asset_type: AssetType,
    /// Mirror of `assetType` kept for older clients.
    #[serde(rename = "type")]
    pub type_alias: AssetType,
    pub url: String,
    pub size: i64,
    pub uploaded_by: String,
    pub is_gallery: bool,
    pub gallery_year: Option<i32>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// One year of the public gallery. Assets without a year are grouped under `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GalleryYearDto {
    pub year: Option<i32>,
    pub items: Vec<MediaAssetDto>,
}

/// Upload metadata as posted by the admin media form.
///
/// Numeric fields and `isGallery` accept either JSON numbers/booleans or their string
/// forms, and blank optional text is treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaDto {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_alias: Option<AssetType>,
    /// Accepted alongside `type` so a fetched asset can be posted back as is.
    #[serde(default)]
    pub asset_type: Option<AssetType>,
    /// Public URL or base64 data URI.
    pub url: String,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    #[schema(value_type = i64)]
    pub size: i64,
    #[serde(default = "default_uploader")]
    pub uploaded_by: String,
    #[serde(default, deserialize_with = "lenient::bool_or_false")]
    #[schema(value_type = bool)]
    pub is_gallery: bool,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    #[schema(value_type = Option<i32>)]
    pub gallery_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::non_empty")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "lenient::non_empty")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::i32_or_zero")]
    #[schema(value_type = i32)]
    pub order_index: i32,
}

impl CreateMediaDto {
    /// `type` wins when both keys are sent.
    pub fn resolved_type(&self) -> Option<AssetType> {
        self.type_alias.or(self.asset_type)
    }
}

fn default_uploader() -> String {
    "Admin".to_string()
}

/// Gallery fields of a media asset.
///
/// Omitted fields are left untouched; `null` or `""` clears a nullable field.
/// `name`, `url` and `type` cannot be changed and are ignored if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaDto {
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    #[schema(value_type = Option<bool>)]
    pub is_gallery: Option<bool>,
    #[serde(default, deserialize_with = "lenient::patch_i32")]
    #[schema(value_type = Option<i32>)]
    pub gallery_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "lenient::patch_text")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::patch_text")]
    #[schema(value_type = Option<String>)]
    pub caption: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::patch_text")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    #[schema(value_type = Option<i32>)]
    pub order_index: Option<i32>,
}

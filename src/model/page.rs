use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub sections: Vec<PageSectionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSectionDto {
    pub id: i32,
    pub page_id: i32,
    #[serde(rename = "type")]
    pub section_type: String,
    pub title: Option<String>,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSectionInputDto {
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    /// Defaults to the section's position in the submitted list.
    #[serde(default)]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageDto {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<PageSectionInputDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageDto {
    pub slug: Option<String>,
    pub title: Option<String>,
    /// When present, replaces the page's whole section list.
    pub sections: Option<Vec<PageSectionInputDto>>,
}

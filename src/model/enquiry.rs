use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryStatus {
    #[default]
    New,
    InProgress,
    Contacted,
    Converted,
    Closed,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Contacted => "contacted",
            Self::Converted => "converted",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for EnquiryStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "contacted" => Ok(Self::Contacted),
            "converted" => Ok(Self::Converted),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown enquiry status '{}'", other)),
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub enquiry_type: String,
    pub message: String,
    pub status: EnquiryStatus,
    pub notes: Vec<EnquiryNoteDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryNoteDto {
    pub id: i32,
    pub enquiry_id: i32,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiryDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub enquiry_type: String,
    pub message: String,
    #[serde(default)]
    pub status: EnquiryStatus,
}

/// Editable enquiry fields.
///
/// `id`, `createdAt`, `updatedAt` and `notes` are owned by the server; when a
/// client echoes them back they are dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnquiryDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enquiry_type: Option<String>,
    pub message: Option<String>,
    pub status: Option<EnquiryStatus>,
}

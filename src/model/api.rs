use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of the note endpoints on enquiries and franchise applications.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteDto {
    pub content: String,
    #[serde(default = "default_note_author")]
    pub author: String,
}

fn default_note_author() -> String {
    "Admin".to_string()
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Creation timestamp, set once on create
    #[serde(rename = "createdat")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(rename = "updatedat")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteResponse {
    /// Human readable confirmation
    pub message: String,
    /// ID assigned to the new note
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    #[test]
    fn note_response_serializes_flat_timestamp_names() {
        let now = Utc::now();
        let note = NoteResponse {
            id: 7,
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdat").is_some());
        assert!(json.get("updatedat").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn create_request_deserializes_from_wire_shape() {
        let req: CreateNoteRequest =
            serde_json::from_str(r#"{"title":"A","content":"B"}"#).unwrap();
        assert_eq!(req.title, "A");
        assert_eq!(req.content, "B");
    }
}

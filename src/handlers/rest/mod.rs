use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use chrono::Utc;
use utoipa::OpenApi;

use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{CreateNoteRequest, CreateNoteResponse, NoteResponse, UpdateNoteRequest},
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    paths(get_all_notes, get_one_note, create_note, update_note, delete_note),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        CreateNoteResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Parse the `id` query parameter. An absent and a non-integer value are
/// both client errors.
fn parse_id(params: &HashMap<String, String>) -> Option<i64> {
    params.get("id").and_then(|raw| raw.parse().ok())
}

fn bad_id_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json("Query parameter 'id' must be an integer"),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Latest notes (up to 10)", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => {
            tracing::error!("failed to get note entries: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/note",
    params(
        ("id" = i64, Query, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Non-integer note ID"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(id) = parse_id(&params) else {
        return bad_id_response();
    };

    match service.get_one_note(id).await {
        Ok(Some(note)) => (StatusCode::OK, Json(note)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json("Note not found")).into_response(),
        Err(e) => {
            tracing::error!("failed to get note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/create",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = CreateNoteResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Response {
    // Timestamps come from the server clock, never from the client.
    let now = Utc::now();

    match service.create_note(payload, now).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(CreateNoteResponse {
                message: format!("Note with id {id} has been created"),
                id,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/update",
    params(
        ("id" = i64, Query, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Non-integer note ID or malformed JSON body"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Query(params): Query<HashMap<String, String>>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Response {
    let Some(id) = parse_id(&params) else {
        return bad_id_response();
    };

    let now = Utc::now();

    match service.update_note(id, payload, now).await {
        Ok(Some(note)) => (StatusCode::OK, Json(note)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json("Note not found")).into_response(),
        Err(e) => {
            tracing::error!("failed to update note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/delete",
    params(
        ("id" = i64, Query, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Deleted note ID", body = i64),
        (status = 400, description = "Non-integer note ID"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(id) = parse_id(&params) else {
        return bad_id_response();
    };

    match service.delete_note(id).await {
        Ok(Some(deleted_id)) => (StatusCode::OK, Json(deleted_id)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Json("Note not found")).into_response(),
        Err(e) => {
            tracing::error!("failed to delete note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: &str) -> HashMap<String, String> {
        HashMap::from([("id".to_string(), id.to_string())])
    }

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id(&params("42")), Some(42));
        assert_eq!(parse_id(&params("-1")), Some(-1));
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id(&params("abc")), None);
        assert_eq!(parse_id(&params("4.2")), None);
        assert_eq!(parse_id(&params("")), None);
    }

    #[test]
    fn parse_id_rejects_missing_parameter() {
        assert_eq!(parse_id(&HashMap::new()), None);
    }
}

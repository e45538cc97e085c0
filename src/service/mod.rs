use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    models::{NewNote, Note},
    repository::Repository,
};

use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<Repository>,
}

impl NoteService {
    pub const fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }

    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
        now: DateTime<Utc>,
    ) -> Result<i64, tokio_postgres::Error> {
        self.repo
            .create(NewNote {
                title: request.title,
                content: request.content,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    pub async fn update_note(
        &self,
        id: i64,
        request: UpdateNoteRequest,
        now: DateTime<Utc>,
    ) -> Result<Option<NoteResponse>, tokio_postgres::Error> {
        self.repo
            .update(id, &request.title, &request.content, now)
            .await
            .map(|note| note.map(to_response))
    }

    pub async fn delete_note(&self, id: i64) -> Result<Option<i64>, tokio_postgres::Error> {
        self.repo.delete(id).await
    }

    pub async fn get_one_note(
        &self,
        id: i64,
    ) -> Result<Option<NoteResponse>, tokio_postgres::Error> {
        self.repo
            .get_one(id)
            .await
            .map(|note| note.map(to_response))
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, tokio_postgres::Error> {
        self.repo
            .latest()
            .await
            .map(|notes| notes.into_iter().map(to_response).collect())
    }
}

fn to_response(note: Note) -> NoteResponse {
    NoteResponse {
        id: note.id,
        title: note.title,
        content: note.content,
        created_at: note.created_at,
        updated_at: note.updated_at,
    }
}

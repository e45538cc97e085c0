use chrono::{DateTime, Utc};
use tokio_postgres::Client;

use crate::models::{NewNote, Note};

pub struct Repository {
    client: Client,
}

impl Repository {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_one(&self, id: i64) -> Result<Option<Note>, tokio_postgres::Error> {
        let row = self
            .client
            .query_opt(
                "SELECT id, title, content, createdat, updatedat FROM note WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.map(|row| Note {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            created_at: row.get("createdat"),
            updated_at: row.get("updatedat"),
        }))
    }

    /// Fetch up to 10 notes in storage order. Without an ORDER BY clause
    /// recency ordering is not guaranteed.
    pub async fn latest(&self) -> Result<Vec<Note>, tokio_postgres::Error> {
        let rows = self
            .client
            .query(
                "SELECT id, title, content, createdat, updatedat FROM note LIMIT 10",
                &[],
            )
            .await?;

        let mut notes = Vec::new();

        for row in rows {
            notes.push(Note {
                id: row.get("id"),
                title: row.get("title"),
                content: row.get("content"),
                created_at: row.get("createdat"),
                updated_at: row.get("updatedat"),
            });
        }

        Ok(notes)
    }

    pub async fn create(&self, note: NewNote) -> Result<i64, tokio_postgres::Error> {
        let row = self
            .client
            .query_one(
                "INSERT INTO note (title, content, createdat, updatedat) \
                 VALUES ($1, $2, $3, $4) RETURNING id",
                &[
                    &note.title,
                    &note.content,
                    &note.created_at,
                    &note.updated_at,
                ],
            )
            .await?;

        Ok(row.get("id"))
    }

    /// Write the new title/content/updatedat, then re-read the row. A write
    /// matching zero rows is not an error by itself; the re-read surfaces
    /// the missing row as `None`.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>, tokio_postgres::Error> {
        self.client
            .execute(
                "UPDATE note SET title = $1, content = $2, updatedat = $3 WHERE id = $4",
                &[&title, &content, &updated_at, &id],
            )
            .await?;

        self.get_one(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<Option<i64>, tokio_postgres::Error> {
        let row = self
            .client
            .query_opt("DELETE FROM note WHERE id = $1 RETURNING id", &[&id])
            .await?;

        Ok(row.map(|row| row.get("id")))
    }
}

//! # RestBackend: [`store::Backend`] over the hosted REST API
//!
//! Every table lives at `{url}/rest/v1/{table}`. Reads are `GET` with PostgREST
//! filters (see [`RestQuery`]); writes are `POST` / `PATCH` / `DELETE` with
//! `Prefer: return=representation` so the affected rows come back as a JSON
//! array.
//!
//! ## Error mapping
//!
//! | Response | [`BackendError`] |
//! |----------|------------------|
//! | 401 / 403 | `Unauthorized` |
//! | 404, or an empty array from a single-row operation | `NotFound` |
//! | any other non-2xx | `Rejected` with the server's message |
//! | body that does not decode | `Decode` |
//! | no response at all | `Transport` |

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::backend::{NOTES_TABLE, PROFILES_TABLE, TASKS_TABLE};
use store::models::{NewNote, NewTask, NotePatch, ProfileUpdate, TaskPatch};
use store::{Backend, BackendError, Note, NoteQuery, Profile, Task, TaskQuery};
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::http::{authorize, decode, send};
use crate::query::RestQuery;
use crate::session::Session;

/// Backend client for one signed-in session.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    config: BackendConfig,
    session: Session,
}

impl RestBackend {
    pub fn new(client: Client, config: BackendConfig, session: Session) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn request(&self, method: reqwest::Method, table: &str, query: &RestQuery) -> RequestBuilder {
        let request = self
            .client
            .request(method, self.config.rest_url(table))
            .query(query.pairs());
        authorize(request, &self.config, Some(&self.session.access_token))
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &'static str,
        query: RestQuery,
    ) -> Result<Vec<T>, BackendError> {
        tracing::debug!(table, query = %query.describe(), "select");
        let body = send(self.request(reqwest::Method::GET, table, &query))
            .await
            .map_err(|e| map_error(e, table, &query))?;
        Ok(decode(&body)?)
    }

    async fn write<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        table: &'static str,
        query: RestQuery,
        body: Option<&B>,
    ) -> Result<Vec<T>, BackendError> {
        tracing::debug!(table, %method, query = %query.describe(), "write");
        let mut request = self
            .request(method, table, &query)
            .header("Prefer", "return=representation");
        if let Some(body) = body {
            request = request.json(body);
        }
        let body = send(request).await.map_err(|e| map_error(e, table, &query))?;
        Ok(decode(&body)?)
    }

    async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &'static str,
        row: &B,
    ) -> Result<T, BackendError> {
        let rows = self
            .write(reqwest::Method::POST, table, RestQuery::new(), Some(row))
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode(format!("{table} insert returned no row")))
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &'static str,
        id: Uuid,
        patch: &B,
    ) -> Result<T, BackendError> {
        let rows = self
            .write(reqwest::Method::PATCH, table, RestQuery::by_id(id), Some(patch))
            .await?;
        single(rows, table, id)
    }

    async fn remove(&self, table: &'static str, id: Uuid) -> Result<(), BackendError> {
        let rows: Vec<serde_json::Value> = self
            .write(reqwest::Method::DELETE, table, RestQuery::by_id(id), None::<&()>)
            .await?;
        single(rows, table, id).map(|_| ())
    }
}

/// The one row a by-id operation touched.
fn single<T>(rows: Vec<T>, table: &'static str, id: Uuid) -> Result<T, BackendError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| BackendError::not_found(table, id))
}

fn map_error(err: ApiError, table: &'static str, query: &RestQuery) -> BackendError {
    match err {
        ApiError::Status { status: 404, .. } => {
            let id = query
                .pairs()
                .iter()
                .find(|(k, _)| k == "id")
                .map(|(_, v)| v.trim_start_matches("eq.").to_string())
                .unwrap_or_default();
            BackendError::NotFound { table, id }
        }
        other => other.into(),
    }
}

impl Backend for RestBackend {
    async fn list_notes(&self, user_id: Uuid, query: &NoteQuery) -> Result<Vec<Note>, BackendError> {
        self.select(NOTES_TABLE, RestQuery::notes(user_id, query)).await
    }

    async fn get_note(&self, id: Uuid) -> Result<Note, BackendError> {
        let rows = self.select(NOTES_TABLE, RestQuery::row(id)).await?;
        single(rows, NOTES_TABLE, id)
    }

    async fn insert_note(&self, note: NewNote) -> Result<Note, BackendError> {
        self.insert(NOTES_TABLE, &note).await
    }

    async fn update_note(&self, id: Uuid, patch: NotePatch) -> Result<Note, BackendError> {
        if patch.is_empty() {
            return self.get_note(id).await;
        }
        self.patch(NOTES_TABLE, id, &patch).await
    }

    async fn delete_note(&self, id: Uuid) -> Result<(), BackendError> {
        self.remove(NOTES_TABLE, id).await
    }

    async fn list_tasks(&self, user_id: Uuid, query: &TaskQuery) -> Result<Vec<Task>, BackendError> {
        self.select(TASKS_TABLE, RestQuery::tasks(user_id, query)).await
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task, BackendError> {
        self.insert(TASKS_TABLE, &task).await
    }

    async fn update_task(&self, id: Uuid, patch: TaskPatch) -> Result<Task, BackendError> {
        self.patch(TASKS_TABLE, id, &patch).await
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), BackendError> {
        self.remove(TASKS_TABLE, id).await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Profile, BackendError> {
        let rows = self.select(PROFILES_TABLE, RestQuery::row(user_id)).await?;
        single(rows, PROFILES_TABLE, user_id)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, BackendError> {
        self.patch(PROFILES_TABLE, user_id, &update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_or_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(single(vec![7], NOTES_TABLE, id), Ok(7));
        assert_eq!(
            single(Vec::<i32>::new(), TASKS_TABLE, id),
            Err(BackendError::not_found(TASKS_TABLE, id))
        );
    }

    #[test]
    fn test_404_maps_to_not_found_with_id() {
        let id = Uuid::new_v4();
        let err = map_error(
            ApiError::from_status(404, r#"{"message":"relation not found"}"#),
            NOTES_TABLE,
            &RestQuery::by_id(id),
        );
        assert_eq!(err, BackendError::not_found(NOTES_TABLE, id));

        let err = map_error(ApiError::from_status(401, ""), NOTES_TABLE, &RestQuery::new());
        assert_eq!(err, BackendError::Unauthorized);

        let err = map_error(
            ApiError::from_status(400, r#"{"message":"bad filter"}"#),
            TASKS_TABLE,
            &RestQuery::new(),
        );
        assert_eq!(
            err,
            BackendError::Rejected {
                status: 400,
                message: "bad filter".into()
            }
        );
    }

    #[test]
    fn test_decode_note_rows() {
        let body = r#"[{
            "id": "6f1d2c1e-5a7b-4a43-9d1e-2f0c3b4a5d6e",
            "user_id": "0b7f5c58-1f0a-4b8e-9a43-4d1f2e3c4b5a",
            "title": "Dinosaurs",
            "content": null,
            "folder": null,
            "tags": ["science"],
            "image_url": null,
            "drawing": null,
            "schedule_date": "2024-06-01",
            "is_starred": true,
            "created_at": "2024-05-01T10:15:00.123456+00:00"
        }]"#;
        let rows: Vec<Note> = decode(body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].folder, "main");
        assert_eq!(rows[0].content, "");
        assert!(rows[0].is_starred);

        let err: BackendError = decode::<Vec<Note>>("[{\"id\": 5}]").unwrap_err().into();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}

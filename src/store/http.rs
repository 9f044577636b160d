use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use uuid::Uuid;

use crate::config::app_config::AppConfig;
use crate::store::errors::StoreError;
use crate::store::io_trait::{NewNoteRow, NoteRow, NoteRowPatch, NoteTable};

/// The production table client: a PostgREST-style HTTP endpoint with
/// equality filters (`id=eq.<uuid>`) and `Prefer: return=representation`
/// for writes.
pub struct HttpNoteTable {
    client: Client,
    table_url: String,
    api_key: String,
}

impl HttpNoteTable {
    pub fn new(config: &AppConfig) -> HttpNoteTable {
        HttpNoteTable {
            client: Client::new(),
            table_url: config.table_url.clone(),
            api_key: config.table_api_key.clone(),
        }
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Backend { status: status.as_u16(), body })
}

#[async_trait]
impl NoteTable for HttpNoteTable {
    async fn select_all(&self) -> Result<Vec<NoteRow>, StoreError> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn insert(&self, row: NewNoteRow) -> Result<NoteRow, StoreError> {
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        let rows: Vec<NoteRow> = ensure_success(response).await?.json().await?;
        rows.into_iter().next().ok_or(StoreError::MissingRow)
    }

    async fn update(&self, id: Uuid, patch: NoteRowPatch) -> Result<Option<NoteRow>, StoreError> {
        let response = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;
        let rows: Vec<NoteRow> = ensure_success(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

//! HTTP adapter for the document store port.
//!
//! `POST {url}` with `{"ids": [..]}` returns the known subset as
//! `[{"id", "name"}, ..]`; unknown ids are simply absent.

use async_trait::async_trait;
use docroom_application::ports::document_store::{DocumentStore, DocumentStoreError};
use docroom_domain::{RoomId, RoomSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct BatchRequest<'a> {
    ids: &'a [RoomId],
}

/// Wire record for one document
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentRecord {
    id: String,
    name: String,
}

impl From<DocumentRecord> for RoomSummary {
    fn from(record: DocumentRecord) -> Self {
        RoomSummary::new(record.id, record.name)
    }
}

/// reqwest-backed implementation of [`DocumentStore`]
pub struct HttpDocumentStore {
    client: reqwest::Client,
    url: String,
}

impl HttpDocumentStore {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn room_summaries(&self, ids: &[RoomId]) -> Result<Vec<RoomSummary>, DocumentStoreError> {
        let response = self
            .client
            .post(&self.url)
            .json(&BatchRequest { ids })
            .send()
            .await
            .map_err(|e| DocumentStoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentStoreError::HttpStatus(status.as_u16()));
        }

        let records: Vec<DocumentRecord> = response
            .json()
            .await
            .map_err(|e| DocumentStoreError::InvalidResponse(e.to_string()))?;

        debug!("document store resolved {}/{} rooms", records.len(), ids.len());
        Ok(records.into_iter().map(RoomSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_record_maps_to_room_summary() {
        let records: Vec<DocumentRecord> = serde_json::from_str(
            r#"[{"id": "doc1", "name": "Roadmap"}, {"id": "doc2", "name": "Notes"}]"#,
        )
        .unwrap();

        let summaries: Vec<RoomSummary> = records.into_iter().map(RoomSummary::from).collect();
        assert_eq!(summaries[0], RoomSummary::new("doc1", "Roadmap"));
        assert_eq!(summaries[1], RoomSummary::new("doc2", "Notes"));
    }

    #[test]
    fn test_batch_request_serializes_ids() {
        let ids = vec![RoomId::new("doc1"), RoomId::new("doc2")];
        let body = serde_json::to_value(BatchRequest { ids: &ids }).unwrap();
        assert_eq!(body, serde_json::json!({ "ids": ["doc1", "doc2"] }));
    }
}

//! HTTP adapter for the participant directory port.
//!
//! `GET {url}` returns the full collaborator set as
//! `[{"id", "name", "avatar", "color"}, ..]`.

use async_trait::async_trait;
use docroom_application::ports::directory::{DirectoryError, ParticipantDirectory};
use docroom_domain::Participant;
use serde::Deserialize;
use tracing::debug;

/// Wire record for one directory entry
#[derive(Debug, Deserialize)]
pub(crate) struct UserRecord {
    id: String,
    name: String,
    avatar: String,
    color: String,
}

impl From<UserRecord> for Participant {
    fn from(record: UserRecord) -> Self {
        Participant::new(record.id, record.name, record.avatar, record.color)
    }
}

/// reqwest-backed implementation of [`ParticipantDirectory`]
pub struct HttpParticipantDirectory {
    client: reqwest::Client,
    url: String,
}

impl HttpParticipantDirectory {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ParticipantDirectory for HttpParticipantDirectory {
    async fn fetch_participants(&self) -> Result<Vec<Participant>, DirectoryError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::HttpStatus(status.as_u16()));
        }

        let records: Vec<UserRecord> = response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))?;

        debug!("directory returned {} participants", records.len());
        Ok(records.into_iter().map(Participant::from).collect())
    }
}

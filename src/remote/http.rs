//! `IdeaSource` backed by the remote REST endpoint.

use reqwest::Client;
use serde::Deserialize;

use crate::domain::idea::Idea;
use crate::domain::query::QueryState;
use crate::remote::errors::{RemoteError, RemoteResult};
use crate::remote::{IdeaBatch, IdeaSource};

#[derive(Deserialize)]
struct IdeasEnvelope {
    data: Vec<Idea>,
    meta: Meta,
}

#[derive(Deserialize)]
struct Meta {
    total: usize,
}

#[derive(Clone)]
pub struct HttpIdeaSource {
    client: Client,
    base_url: String,
}

impl HttpIdeaSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl IdeaSource for HttpIdeaSource {
    async fn list_ideas(&self, query: QueryState) -> RemoteResult<IdeaBatch> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("page[number]", query.page.to_string()),
                ("page[size]", query.size.to_string()),
                ("append[]", "small_image".to_string()),
                ("append[]", "medium_image".to_string()),
                ("sort", query.sort.as_str().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let envelope: IdeasEnvelope = response
            .json()
            .await
            .map_err(|err| RemoteError::Malformed(err.to_string()))?;

        Ok(IdeaBatch {
            ideas: envelope.data,
            total: envelope.meta.total,
        })
    }
}

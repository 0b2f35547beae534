use crate::domain::idea::Idea;
use crate::domain::query::QueryState;

pub mod errors;
pub mod http;

pub use errors::{RemoteError, RemoteResult};

/// One page of ideas as reported by the remote service, together with the
/// total count across all pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdeaBatch {
    pub ideas: Vec<Idea>,
    pub total: usize,
}

/// Seam between the view layers and the remote ideas endpoint.
#[allow(async_fn_in_trait)]
pub trait IdeaSource {
    /// Performs exactly one request for the given query state.
    async fn list_ideas(&self, query: QueryState) -> RemoteResult<IdeaBatch>;
}

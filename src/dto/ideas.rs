use serde::Serialize;

use crate::domain::idea::Idea;
use crate::domain::query::QueryState;
use crate::pagination::Paginated;

/// One page control, with its target URL carrying all three query
/// parameters.
#[derive(Debug, PartialEq, Serialize)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
}

/// Data required to render the ideas index template.
#[derive(Serialize)]
pub struct IdeasPageData {
    /// Paginated ideas with derived page controls and range bounds.
    pub ideas: Paginated<Idea>,
    /// Navigation links, one per page control.
    pub page_links: Vec<PageLink>,
    /// Query state echoed back so the controls reflect the current URL.
    pub query: QueryState,
}

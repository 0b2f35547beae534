use crate::domain::query::QueryState;
use crate::dto::ideas::{IdeasPageData, PageLink};
use crate::pagination::Paginated;
use crate::remote::IdeaSource;
use crate::services::ServiceResult;

/// Runs one fetch cycle for the given query state and assembles the view
/// data for the ideas page.
pub async fn load_ideas_page<S>(source: &S, query: QueryState) -> ServiceResult<IdeasPageData>
where
    S: IdeaSource,
{
    let batch = source.list_ideas(query).await.map_err(|err| {
        log::error!("Failed to fetch ideas: {err}");
        err
    })?;

    let ideas = Paginated::new(batch.ideas, query.page, query.size, batch.total);

    // Every navigation link rewrites all three parameters together.
    let page_links = ideas
        .pages
        .iter()
        .map(|&page| PageLink {
            page,
            href: format!("?{}", query.with_page(page).query_string()),
        })
        .collect();

    Ok(IdeasPageData {
        ideas,
        page_links,
        query,
    })
}

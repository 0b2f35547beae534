use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::query::{PAGE_SIZES, QueryState};
use crate::models::config::ServerConfig;
use crate::remote::http::HttpIdeaSource;
use crate::routes::render_template;
use crate::services::ideas as ideas_service;

/// Raw URL query parameters. Kept as strings so non-numeric input falls back
/// to defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct IdeasQueryParams {
    page: Option<String>,
    size: Option<String>,
    sort: Option<String>,
}

impl IdeasQueryParams {
    pub fn to_query_state(&self) -> QueryState {
        QueryState::from_params(
            self.page.as_deref(),
            self.size.as_deref(),
            self.sort.as_deref(),
        )
    }
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IdeasQueryParams>,
    source: web::Data<HttpIdeaSource>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = params.to_query_state();

    let mut context = Context::new();
    context.insert("current_page", "ideas");
    context.insert("banner_image_url", &server_config.banner_image_url);
    context.insert("page_sizes", &PAGE_SIZES);
    context.insert("query", &query);

    match ideas_service::load_ideas_page(source.get_ref(), query).await {
        Ok(page_data) => {
            context.insert("ideas", &page_data.ideas);
            context.insert("page_links", &page_data.page_links);
            context.insert("fetch_failed", &false);
        }
        Err(_) => {
            context.insert("fetch_failed", &true);
        }
    }

    render_template(&tera, "main/index.html", &context)
}

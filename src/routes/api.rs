use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Serialize;

use crate::domain::idea::Idea;
use crate::remote::IdeaSource;
use crate::remote::http::HttpIdeaSource;
use crate::routes::ideas::IdeasQueryParams;

#[derive(Serialize)]
struct IdeasListResponse {
    total: usize,
    ideas: Vec<Idea>,
}

#[get("/v1/ideas")]
pub async fn api_v1_ideas(
    params: web::Query<IdeasQueryParams>,
    source: web::Data<HttpIdeaSource>,
) -> impl Responder {
    let query = params.to_query_state();

    match source.list_ideas(query).await {
        Ok(batch) => HttpResponse::Ok().json(IdeasListResponse {
            total: batch.total,
            ideas: batch.ideas,
        }),
        Err(e) => {
            error!("Failed to list ideas: {e}");
            HttpResponse::BadGateway()
                .json(serde_json::json!({ "error": "ideas service unavailable" }))
        }
    }
}

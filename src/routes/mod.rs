//! HTTP route handlers and shared response helpers.

use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod api;
pub mod ideas;

/// Renders a tera template into an HTML response, logging render failures.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::remote::http::HttpIdeaSource;
use crate::routes::api::api_v1_ideas;
use crate::routes::ideas::show_index;

pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod remote;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One shared HTTP client for every fetch cycle against the ideas API.
    let source = HttpIdeaSource::new(server_config.ideas_api_url.clone());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let assets_dir = server_config.assets_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &assets_dir))
            .service(web::scope("/api").service(api_v1_ideas))
            .service(show_index)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(source.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

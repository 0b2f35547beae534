use actix_web::http::StatusCode;
use actix_web::{App, web};
use tera::Tera;

use ideas_board::domain::query::{QueryState, SortOrder};
use ideas_board::models::config::ServerConfig;
use ideas_board::remote::http::HttpIdeaSource;
use ideas_board::routes::api::api_v1_ideas;
use ideas_board::routes::ideas::{IdeasQueryParams, show_index};

fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*.html".to_string(),
        assets_dir: "./assets".to_string(),
        // Nothing listens on port 9; every fetch cycle fails fast.
        ideas_api_url: "http://127.0.0.1:9/api/ideas".to_string(),
        banner_image_url: "http://127.0.0.1:9/storage/banner.jpg".to_string(),
    }
}

#[test]
fn query_params_map_to_query_state() {
    let params =
        web::Query::<IdeasQueryParams>::from_query("page=2&size=20&sort=published_at").unwrap();
    let state = params.to_query_state();

    assert_eq!(state.page, 2);
    assert_eq!(state.size, 20);
    assert_eq!(state.sort, SortOrder::OldestFirst);
}

#[test]
fn bad_query_params_fall_back_to_defaults() {
    let params =
        web::Query::<IdeasQueryParams>::from_query("page=abc&size=7&sort=unknown").unwrap();

    assert_eq!(params.to_query_state(), QueryState::default());
}

#[actix_web::test]
async fn index_renders_fetch_failed_state_when_remote_is_down() {
    let config = test_config();
    let tera = Tera::new(&config.templates_dir).unwrap();
    let source = HttpIdeaSource::new(config.ideas_api_url.clone());

    let app = actix_web::test::init_service(
        App::new()
            .service(show_index)
            .app_data(web::Data::new(tera))
            .app_data(web::Data::new(source))
            .app_data(web::Data::new(config)),
    )
    .await;

    let req = actix_web::test::TestRequest::get()
        .uri("/?page=3&size=20&sort=published_at")
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = actix_web::test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("We could not load ideas right now"));
    // Query controls stay usable in the error state.
    assert!(body.contains("Sort by:"));
}

#[actix_web::test]
async fn api_reports_bad_gateway_when_remote_is_down() {
    let config = test_config();
    let source = HttpIdeaSource::new(config.ideas_api_url.clone());

    let app = actix_web::test::init_service(
        App::new()
            .service(web::scope("/api").service(api_v1_ideas))
            .app_data(web::Data::new(source)),
    )
    .await;

    let req = actix_web::test::TestRequest::get()
        .uri("/api/v1/ideas")
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

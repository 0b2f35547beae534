use ideas_board::models::config::ServerConfig;
use ideas_board::run;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    config::Config::builder()
        .set_default("address", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("templates_dir", "templates/**/*.html")?
        .set_default("assets_dir", "./assets")?
        .set_default(
            "ideas_api_url",
            "https://suitmedia-backend.suitdev.com/api/ideas",
        )?
        .set_default(
            "banner_image_url",
            "https://suitmedia-backend.suitdev.com/storage/ideas/banner.jpg",
        )?
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use viver_bem_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config)
        .await
        .expect("failed to initialise application state");

    log::info!("Starting lead capture server on {host}:{port}");

    HttpServer::new(move || {
        let cors = if cors_origin == "*" {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_origin(&cors_origin)
                .allowed_methods(vec!["GET", "POST"])
                .max_age(3600)
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::register_lead)
            .service(handlers::dashboard_metrics)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}

use crate::db::Databases;
use crate::error::ApiError;
use crate::rating_provider::RatingProviderClient;
use crate::routes::hello_world::{handler, heartbeat};
use crate::routes::{genre_source, movie_source, rating_source};

use actix_web::{
    dev::Server,
    web::{self, Data},
    App, HttpServer,
};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use actix_cors::Cors;
use actix_web::http::header;
use std::env;

// Unparsable path segments such as `/movies/abc` are JSON 404s.
fn configure_path_extraction() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::error!("Failed to extract path {}: {}", req.path(), err);
        ApiError::NotFound(format!("Invalid identifier in {}", req.path())).into()
    })
}

fn configure_cors(frontend_url: &str) -> Cors {
    let mut cors = Cors::default();
    cors = if frontend_url == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(frontend_url)
    };
    cors.allowed_methods(vec!["GET"])
        .allowed_header(header::ACCEPT)
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

pub fn run_server(
    listener: TcpListener,
    databases: Databases,
    rating_provider: RatingProviderClient,
) -> Result<Server, std::io::Error> {
    let databases = Data::new(databases);
    let rating_provider = Data::new(rating_provider);
    let frontend_url = env::var("FRONTEND_URL").unwrap_or_else(|_| "*".to_string());

    let server: Server = HttpServer::new(move || {
        let cors = configure_cors(frontend_url.as_str());
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(configure_path_extraction())
            .app_data(databases.clone())
            .app_data(rating_provider.clone())
            .service(genre_source())
            .service(movie_source())
            .service(rating_source())
            .route("/", web::get().to(handler))
            .route("/heartbeat", web::get().to(heartbeat))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

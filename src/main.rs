use dotenv::dotenv;
use movies_api::configuration::get_configuration;
use movies_api::db::Databases;
use movies_api::rating_provider::RatingProviderClient;
use movies_api::startup;
use movies_api::telemetry::{get_subscriber, init_subscriber};
use std::io::{Error, ErrorKind};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let subscriber = get_subscriber("movies_api", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration("configuration").map_err(|err| {
        Error::new(
            ErrorKind::Other,
            format!(
                "Failed to read `configuration.json`. Please make sure it exists and is valid JSON: {}",
                err
            ),
        )
    })?;

    let databases = Databases::connect(&configuration.database)
        .await
        .map_err(|err| Error::new(ErrorKind::Other, format!("Failed to open databases: {}", err)))?;
    let rating_provider = RatingProviderClient::new(&configuration.rating_provider)
        .map_err(|err| Error::new(ErrorKind::Other, format!("Failed to build http client: {}", err)))?;

    let listener = TcpListener::bind(format!("0.0.0.0:{}", configuration.application_port))?;
    tracing::info!("Server is running on http://localhost:{}", configuration.application_port);
    startup::run_server(listener, databases, rating_provider)?.await
}

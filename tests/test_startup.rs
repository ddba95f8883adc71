#![allow(dead_code)]

use actix_web::{web, App, HttpResponse, HttpServer};
use movies_api::configuration::{get_configuration, DatabaseSettings, Settings};
use movies_api::db::Databases;
use movies_api::rating_provider::RatingProviderClient;
use serde::Deserialize;
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;
use std::net::TcpListener;
use std::time::Duration;
use uuid::Uuid;

pub const KNOWN_IMDB_ID: &str = "tt0114709";
pub const SLOW_IMDB_ID: &str = "tt9000001";
pub const FAILING_IMDB_ID: &str = "tt9000002";
pub const GARBAGE_IMDB_ID: &str = "tt9000003";
pub const SLOW_PROVIDER_DELAY: Duration = Duration::from_secs(3);

pub struct TestApp {
    pub address: String,
    pub movies_db: SqlitePool,
    pub ratings_db: SqlitePool,
    pub database_settings: DatabaseSettings,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.database_settings.movies_path);
        let _ = std::fs::remove_file(&self.database_settings.ratings_path);
    }
}

#[derive(Clone, Debug)]
pub struct MovieSeed {
    pub movie_id: i64,
    pub imdb_id: String,
    pub title: String,
    pub overview: String,
    pub genres: String,
    pub production_companies: String,
    pub release_date: String,
    pub budget: i64,
    pub runtime: f64,
    pub language: String,
}

impl MovieSeed {
    pub fn new(movie_id: i64, release_date: &str, genres: &str) -> Self {
        Self {
            movie_id,
            imdb_id: format!("tt{:07}", movie_id),
            title: format!("Movie {}", movie_id),
            overview: format!("Overview of movie {}", movie_id),
            genres: genres.to_string(),
            production_companies: r#"[{"id": 3, "name": "Pixar Animation Studios"}]"#
                .to_string(),
            release_date: release_date.to_string(),
            budget: 30_000_000,
            runtime: 81.0,
            language: "en".to_string(),
        }
    }
}

impl TestApp {
    pub async fn insert_movie(&self, movie: &MovieSeed) {
        sqlx::query(
            r#"
                INSERT INTO movies (movieId, imdbId, title, overview, productionCompanies,
                                    releaseDate, budget, revenue, runtime, language, genres, status)
                VALUES (?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?, 'Released')
            "#,
        )
        .bind(movie.movie_id)
        .bind(&movie.imdb_id)
        .bind(&movie.title)
        .bind(&movie.overview)
        .bind(&movie.production_companies)
        .bind(&movie.release_date)
        .bind(movie.budget)
        .bind(movie.runtime)
        .bind(&movie.language)
        .bind(&movie.genres)
        .execute(&self.movies_db)
        .await
        .expect("Failed to insert movie");
    }

    pub async fn insert_rating(&self, rating_id: i64, movie_id: i64, rating: f64) {
        sqlx::query(
            "INSERT INTO ratings (ratingId, userId, movieId, rating, timestamp) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(rating_id)
        .bind(rating_id + 100)
        .bind(movie_id)
        .bind(rating)
        .bind(1_260_759_144_i64)
        .execute(&self.ratings_db)
        .await
        .expect("Failed to insert rating");
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

async fn open_writable(path: &str) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    SqlitePool::connect_with(options)
        .await
        .expect("Failed to create sqlite database")
}

pub async fn configure_database(settings: &DatabaseSettings) -> (SqlitePool, SqlitePool) {
    let movies_db = open_writable(&settings.movies_path).await;
    sqlx::migrate!("./migrations/movies")
        .run(&movies_db)
        .await
        .expect("Failed to migrate the movies database");
    let ratings_db = open_writable(&settings.ratings_path).await;
    sqlx::migrate!("./migrations/ratings")
        .run(&ratings_db)
        .await
        .expect("Failed to migrate the ratings database");
    (movies_db, ratings_db)
}

fn test_configuration() -> Settings {
    let mut configuration =
        get_configuration("test_configuration").expect("Failed to read configuration file");
    let prefix = Uuid::new_v4().to_string();
    let directory = std::env::temp_dir();
    configuration.database.movies_path = directory
        .join(format!("{}-{}", prefix, configuration.database.movies_path))
        .to_string_lossy()
        .into_owned();
    configuration.database.ratings_path = directory
        .join(format!("{}-{}", prefix, configuration.database.ratings_path))
        .to_string_lossy()
        .into_owned();
    configuration
}

async fn spawn_with(configuration: Settings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    let (movies_db, ratings_db) = configure_database(&configuration.database).await;
    let databases = Databases::connect(&configuration.database)
        .await
        .expect("Failed to open read-only databases");
    let rating_provider = RatingProviderClient::new(&configuration.rating_provider)
        .expect("Failed to build rating provider client");
    let server = movies_api::startup::run_server(listener, databases, rating_provider)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        movies_db,
        ratings_db,
        database_settings: configuration.database,
    }
}

/// App whose rating provider is unreachable.
pub async fn spawn_app() -> TestApp {
    spawn_with(test_configuration()).await
}

pub async fn spawn_app_with_rating_provider(base_url: &str) -> TestApp {
    let mut configuration = test_configuration();
    configuration.rating_provider.base_url = base_url.to_string();
    spawn_with(configuration).await
}

#[derive(Deserialize)]
struct ProviderQuery {
    i: String,
    apikey: String,
}

async fn fake_provider_lookup(query: web::Query<ProviderQuery>) -> HttpResponse {
    if query.apikey.is_empty() {
        return HttpResponse::Unauthorized().json(json!({
            "Response": "False",
            "Error": "No API key provided."
        }));
    }
    match query.i.as_str() {
        SLOW_IMDB_ID => {
            actix_rt::time::sleep(SLOW_PROVIDER_DELAY).await;
        }
        FAILING_IMDB_ID => {
            return HttpResponse::InternalServerError().json(json!({
                "Response": "False",
                "Error": "Something went wrong."
            }));
        }
        GARBAGE_IMDB_ID => {
            return HttpResponse::Ok()
                .content_type("application/json")
                .body("<html>Service Unavailable</html>");
        }
        _ => {}
    }
    if query.i != KNOWN_IMDB_ID && query.i != SLOW_IMDB_ID {
        return HttpResponse::Ok().json(json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID."
        }));
    }
    HttpResponse::Ok().json(json!({
        "Title": "Toy Story",
        "Ratings": [
            {"Source": "Internet Movie Database", "Value": "8.3/10"},
            {"Source": "Rotten Tomatoes", "Value": "100%"},
            {"Source": "Metacritic", "Value": "95/100"}
        ],
        "Response": "True"
    }))
}

/// Minimal OMDb stand-in; returns its base url.
pub fn spawn_rating_provider() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(|| App::new().route("/", web::get().to(fake_provider_lookup)))
        .workers(2)
        .listen(listener)
        .expect("Failed to bind fake rating provider")
        .run();
    let _ = tokio::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

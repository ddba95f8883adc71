use super::SortOrder;
use sqlx::{FromRow, SqlitePool};
use tracing::Instrument;

#[derive(FromRow, Debug, Clone)]
pub struct MovieRow {
    #[sqlx(rename = "movieId")]
    pub movie_id: i64,
    #[sqlx(rename = "imdbId")]
    pub imdb_id: Option<String>,
    pub title: String,
    pub overview: Option<String>,
    #[sqlx(rename = "productionCompanies")]
    pub production_companies: Option<String>,
    #[sqlx(rename = "releaseDate")]
    pub release_date: Option<String>,
    pub budget: Option<i64>,
    pub runtime: Option<f64>,
    pub language: Option<String>,
    pub genres: Option<String>,
}

#[derive(FromRow, Debug, Clone)]
pub struct MoviePreviewRow {
    #[sqlx(rename = "movieId")]
    pub movie_id: i64,
    #[sqlx(rename = "imdbId")]
    pub imdb_id: Option<String>,
    pub title: String,
    pub genres: Option<String>,
    #[sqlx(rename = "releaseDate")]
    pub release_date: Option<String>,
    pub budget: Option<i64>,
}

const PREVIEW_COLUMNS: &str = "movieId, imdbId, title, genres, releaseDate, budget";

pub async fn fetch_genre_columns(pool: &SqlitePool) -> Result<Vec<Option<String>>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetching the genres column of every movie");
    sqlx::query_scalar::<_, Option<String>>("SELECT genres FROM movies ORDER BY movieId")
        .fetch_all(pool)
        .instrument(query_span)
        .await
}

pub async fn count_movies(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let query_span = tracing::info_span!("Counting movies");
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .instrument(query_span)
        .await
}

pub async fn fetch_movie_previews(
    pool: &SqlitePool,
    order: SortOrder,
    limit: i64,
    offset: i64,
) -> Result<Vec<MoviePreviewRow>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetching a page of movies", ?order, limit, offset);
    let query = format!(
        "SELECT {} FROM movies ORDER BY releaseDate {}, movieId LIMIT ? OFFSET ?",
        PREVIEW_COLUMNS,
        order.as_sql()
    );
    sqlx::query_as::<_, MoviePreviewRow>(query.as_str())
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .instrument(query_span)
        .await
}

pub async fn fetch_movie(
    pool: &SqlitePool,
    movie_id: i64,
) -> Result<Option<MovieRow>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetching movie details", movie_id);
    sqlx::query_as::<_, MovieRow>(
        r#"
            SELECT movieId, imdbId, title, overview, productionCompanies, releaseDate,
                   budget, runtime, language, genres
            FROM movies
            WHERE movieId = ?
        "#,
    )
    .bind(movie_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

pub async fn count_movies_by_year(pool: &SqlitePool, year: &str) -> Result<i64, sqlx::Error> {
    let query_span = tracing::info_span!("Counting movies released in year", year);
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM movies WHERE strftime('%Y', releaseDate) = ?",
    )
    .bind(year)
    .fetch_one(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch_movie_previews_by_year(
    pool: &SqlitePool,
    year: &str,
    order: SortOrder,
    limit: i64,
    offset: i64,
) -> Result<Vec<MoviePreviewRow>, sqlx::Error> {
    let query_span =
        tracing::info_span!("Fetching a page of movies released in year", year, ?order, limit, offset);
    let query = format!(
        r#"
            SELECT {}
            FROM movies
            WHERE strftime('%Y', releaseDate) = ?
            ORDER BY releaseDate {}, movieId
            LIMIT ? OFFSET ?
        "#,
        PREVIEW_COLUMNS,
        order.as_sql()
    );
    sqlx::query_as::<_, MoviePreviewRow>(query.as_str())
        .bind(year)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .instrument(query_span)
        .await
}

/// Every movie that has a `genres` column. Genre names are matched after
/// decoding, since the stored JSON may escape or case them differently than
/// any SQL pattern could see.
pub async fn fetch_movies_with_genres(
    pool: &SqlitePool,
    order: SortOrder,
) -> Result<Vec<MoviePreviewRow>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetching movies with genres", ?order);
    let query = format!(
        r#"
            SELECT {}
            FROM movies
            WHERE genres IS NOT NULL
            ORDER BY releaseDate {}, movieId
        "#,
        PREVIEW_COLUMNS,
        order.as_sql()
    );
    sqlx::query_as::<_, MoviePreviewRow>(query.as_str())
        .fetch_all(pool)
        .instrument(query_span)
        .await
}

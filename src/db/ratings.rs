use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::Instrument;

#[derive(FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingRow {
    #[sqlx(rename = "ratingId")]
    pub rating_id: i64,
    #[sqlx(rename = "userId")]
    pub user_id: i64,
    #[sqlx(rename = "movieId")]
    pub movie_id: i64,
    pub rating: f64,
    pub timestamp: i64,
}

pub async fn fetch_ratings_by_movie(
    pool: &SqlitePool,
    movie_id: i64,
) -> Result<Vec<RatingRow>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetching ratings of movie", movie_id);
    sqlx::query_as::<_, RatingRow>(
        r#"
            SELECT ratingId, userId, movieId, rating, timestamp
            FROM ratings
            WHERE movieId = ?
            ORDER BY ratingId
        "#,
    )
    .bind(movie_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
}

/// `None` when the movie has no local ratings.
pub async fn fetch_average_rating(
    pool: &SqlitePool,
    movie_id: i64,
) -> Result<Option<f64>, sqlx::Error> {
    let query_span = tracing::info_span!("Averaging local ratings of movie", movie_id);
    sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating) FROM ratings WHERE movieId = ?")
        .bind(movie_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
}

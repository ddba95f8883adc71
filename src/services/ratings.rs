use crate::db::{fetch_ratings_by_movie, RatingRow};
use crate::error::ApiError;
use sqlx::SqlitePool;

pub async fn get_movie_ratings(
    pool: &SqlitePool,
    movie_id: i64,
) -> Result<Vec<RatingRow>, ApiError> {
    let rows = fetch_ratings_by_movie(pool, movie_id).await?;
    if rows.is_empty() {
        return Err(ApiError::NotFound("No ratings found".to_string()));
    }
    Ok(rows)
}

use super::PageRequest;
use crate::db::{
    count_movies, count_movies_by_year, fetch_average_rating, fetch_movie, fetch_movies_with_genres,
    fetch_movie_previews, fetch_movie_previews_by_year, Databases, MoviePreviewRow,
};
use crate::error::ApiError;
use crate::format::{decode_json_list, format_budget};
use crate::models::{
    Genre, Movie, MoviePreview, PaginatedResponse, ProductionCompany, Rating, RatingValue,
};
use crate::rating_provider::RatingProviderClient;
use sqlx::SqlitePool;

pub const LOCAL_RATING_SOURCE: &str = "Local";

fn to_preview(row: MoviePreviewRow) -> Result<MoviePreview, ApiError> {
    Ok(MoviePreview {
        genres: decode_json_list(row.genres.as_deref())?,
        budget: format_budget(row.budget.unwrap_or_default()),
        movie_id: row.movie_id,
        imdb_id: row.imdb_id,
        title: row.title,
        release_date: row.release_date,
    })
}

fn to_previews(rows: Vec<MoviePreviewRow>) -> Result<Vec<MoviePreview>, ApiError> {
    rows.into_iter().map(to_preview).collect()
}

pub async fn get_all_movies(
    pool: &SqlitePool,
    request: PageRequest,
) -> Result<PaginatedResponse<MoviePreview>, ApiError> {
    let count = count_movies(pool).await?;
    let rows = fetch_movie_previews(pool, request.order, request.limit(), request.offset()).await?;
    Ok(request.respond(to_previews(rows)?, count.max(0) as u64))
}

pub async fn get_movies_by_year(
    pool: &SqlitePool,
    year: &str,
    request: PageRequest,
) -> Result<PaginatedResponse<MoviePreview>, ApiError> {
    let count = count_movies_by_year(pool, year).await?;
    let rows = fetch_movie_previews_by_year(
        pool,
        year,
        request.order,
        request.limit(),
        request.offset(),
    )
    .await?;
    Ok(request.respond(to_previews(rows)?, count.max(0) as u64))
}

/// Exact, case-insensitive genre name check on a decoded `genres` column.
/// Undecodable columns never match.
pub fn has_genre(column: Option<&str>, genre: &str) -> bool {
    match decode_json_list::<Genre>(column) {
        Ok(genres) => genres
            .iter()
            .any(|candidate| candidate.name.to_lowercase() == genre.to_lowercase()),
        Err(_) => false,
    }
}

pub async fn get_movies_by_genre(
    pool: &SqlitePool,
    genre: &str,
    request: PageRequest,
) -> Result<PaginatedResponse<MoviePreview>, ApiError> {
    let candidates = fetch_movies_with_genres(pool, request.order).await?;
    let candidate_count = candidates.len();
    let matching: Vec<MoviePreviewRow> = candidates
        .into_iter()
        .filter(|row| has_genre(row.genres.as_deref(), genre))
        .collect();
    tracing::info!(
        "Genre {} matched {} of {} movies",
        genre,
        matching.len(),
        candidate_count
    );

    let page = request.slice(matching);
    Ok(PaginatedResponse {
        data: to_previews(page.data)?,
        total_pages: page.total_pages,
        curr_page: page.curr_page,
        count: page.count,
        limit: page.limit,
    })
}

fn round_rating(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Movie details with the local average rating first and the critic rating
/// after it when the provider has one.
pub async fn get_movie(
    databases: &Databases,
    rating_provider: &RatingProviderClient,
    movie_id: i64,
) -> Result<Movie, ApiError> {
    let row = fetch_movie(&databases.movies, movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    let genres: Vec<Genre> = decode_json_list(row.genres.as_deref())?;
    let production_companies: Vec<ProductionCompany> =
        decode_json_list(row.production_companies.as_deref())?;

    let mut ratings = Vec::new();
    if let Some(average) = fetch_average_rating(&databases.ratings, movie_id).await? {
        ratings.push(Rating {
            source: LOCAL_RATING_SOURCE.to_string(),
            value: RatingValue::Number(round_rating(average)),
        });
    }
    match row.imdb_id.as_deref() {
        Some(imdb_id) if !imdb_id.trim().is_empty() => {
            if let Some(critic_rating) = rating_provider.fetch_critic_rating(imdb_id).await {
                ratings.push(critic_rating);
            }
        }
        _ => tracing::info!("Movie {} has no imdb id, skipping critic rating", movie_id),
    }

    Ok(Movie {
        movie_id: row.movie_id,
        imdb_id: row.imdb_id,
        title: row.title,
        description: row.overview,
        genres,
        release_date: row.release_date,
        budget: format_budget(row.budget.unwrap_or_default()),
        runtime: row.runtime,
        language: row.language,
        production_companies,
        ratings,
    })
}

use actix_web::{
    web::{Data, Path},
    HttpResponse, ResponseError,
};

use crate::db::Databases;
use crate::rating_provider::RatingProviderClient;
use crate::services;

pub async fn get_movie_info(
    databases: Data<Databases>,
    rating_provider: Data<RatingProviderClient>,
    path: Path<i64>,
) -> HttpResponse {
    let movie_id = path.into_inner();
    match services::get_movie(&databases, &rating_provider, movie_id).await {
        Ok(movie) => {
            tracing::info!("Sending details of movie {}", movie_id);
            HttpResponse::Ok().json(movie)
        }
        Err(err) => {
            tracing::error!("Failed to get movie {}: {}", movie_id, err);
            err.error_response()
        }
    }
}

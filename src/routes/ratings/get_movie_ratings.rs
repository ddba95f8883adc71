use actix_web::{
    web::{Data, Path},
    HttpResponse, ResponseError,
};

use crate::db::Databases;
use crate::services;

pub async fn get_movie_ratings(databases: Data<Databases>, path: Path<i64>) -> HttpResponse {
    let movie_id = path.into_inner();
    match services::get_movie_ratings(&databases.ratings, movie_id).await {
        Ok(rows) => {
            tracing::info!("Sending {} ratings of movie {}", rows.len(), movie_id);
            HttpResponse::Ok().json(rows)
        }
        Err(err) => {
            tracing::error!("Failed to get ratings of movie {}: {}", movie_id, err);
            err.error_response()
        }
    }
}

use actix_web::{web::Data, HttpResponse, ResponseError};

use crate::db::Databases;
use crate::services;

pub async fn get_genre_list(databases: Data<Databases>) -> HttpResponse {
    match services::get_genre_list(&databases.movies).await {
        Ok(genre_list) => {
            tracing::info!("Sending {} genres", genre_list.len());
            HttpResponse::Ok().json(genre_list)
        }
        Err(err) => {
            tracing::error!("Failed to list genres: {}", err);
            err.error_response()
        }
    }
}

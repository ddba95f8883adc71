use actix_web::{
    web::{Data, Path, Query},
    HttpResponse, ResponseError,
};
use serde::Deserialize;
use validator::Validate;

use super::{validate_genre, PageInfo};
use crate::db::Databases;
use crate::services;
use crate::util::validate_request;

#[derive(Deserialize, Validate, Debug)]
pub struct GenrePath {
    #[validate(custom(function = "validate_genre"))]
    pub genre: String,
}

pub async fn get_movies_by_genre(
    databases: Data<Databases>,
    path: Path<GenrePath>,
    info: Query<PageInfo>,
) -> HttpResponse {
    let path = path.into_inner();
    if let Err(err) = validate_request(&path) {
        return err.error_response();
    }

    let genre = path.genre.trim();
    let request = info.page_request();
    match services::get_movies_by_genre(&databases.movies, genre, request).await {
        Ok(page) => {
            tracing::info!("Sending {} movies of genre {}", page.data.len(), genre);
            HttpResponse::Ok().json(page)
        }
        Err(err) => {
            tracing::error!("Failed to list movies of genre {}: {}", genre, err);
            err.error_response()
        }
    }
}

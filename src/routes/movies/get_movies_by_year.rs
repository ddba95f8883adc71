use actix_web::{
    web::{Data, Path, Query},
    HttpResponse, ResponseError,
};
use serde::Deserialize;
use validator::Validate;

use super::{validate_year, PageInfo};
use crate::db::Databases;
use crate::services;
use crate::util::validate_request;

#[derive(Deserialize, Validate, Debug)]
pub struct YearPath {
    #[validate(custom(function = "validate_year"))]
    pub year: String,
}

pub async fn get_movies_by_year(
    databases: Data<Databases>,
    path: Path<YearPath>,
    info: Query<PageInfo>,
) -> HttpResponse {
    let path = path.into_inner();
    if let Err(err) = validate_request(&path) {
        return err.error_response();
    }

    let request = info.page_request();
    match services::get_movies_by_year(&databases.movies, &path.year, request).await {
        Ok(page) => {
            tracing::info!("Sending {} movies released in {}", page.data.len(), path.year);
            HttpResponse::Ok().json(page)
        }
        Err(err) => {
            tracing::error!("Failed to list movies released in {}: {}", path.year, err);
            err.error_response()
        }
    }
}

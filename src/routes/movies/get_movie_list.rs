use actix_web::{
    web::{Data, Query},
    HttpResponse, ResponseError,
};

use super::PageInfo;
use crate::db::Databases;
use crate::services;

pub async fn get_movie_list(databases: Data<Databases>, info: Query<PageInfo>) -> HttpResponse {
    let request = info.page_request();
    match services::get_all_movies(&databases.movies, request).await {
        Ok(page) => {
            tracing::info!(
                "Sending page {} of {} with {} movies",
                page.curr_page,
                page.total_pages,
                page.data.len()
            );
            HttpResponse::Ok().json(page)
        }
        Err(err) => {
            tracing::error!("Failed to list movies: {}", err);
            err.error_response()
        }
    }
}

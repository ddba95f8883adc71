use actix_web::{web, Scope};

use super::get_movie_ratings;

pub fn rating_source() -> Scope {
    web::scope("/ratings").route("/{movie_id}", web::get().to(get_movie_ratings))
}

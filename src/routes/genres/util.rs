use actix_web::{web, Scope};

use super::get_genre_list;

pub fn genre_source() -> Scope {
    web::scope("/genres").route("/all", web::get().to(get_genre_list))
}

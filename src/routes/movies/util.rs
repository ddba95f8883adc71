use std::borrow::Cow;

use actix_web::{web, Scope};
use regex::Regex;
use serde::Deserialize;
use validator::ValidationError;

use super::{get_movie_info, get_movie_list, get_movies_by_genre, get_movies_by_year};
use crate::db::SortOrder;
use crate::services::PageRequest;

const YEAR_PATTERN: &str = r"^[0-9]{4}$";

pub fn movie_source() -> Scope {
    // `/all` has to be registered before `/{movie_id}`
    web::scope("/movies")
        .route("/all", web::get().to(get_movie_list))
        .route("/year/{year}", web::get().to(get_movies_by_year))
        .route("/genre/{genre}", web::get().to(get_movies_by_genre))
        .route("/{movie_id}", web::get().to(get_movie_info))
}

/// `?page=&order=` as sent by clients. Both are optional and forgiving:
/// an unparsable page is page 1 and an unknown order is ascending.
#[derive(Deserialize, Debug, Default)]
pub struct PageInfo {
    pub page: Option<String>,
    pub order: Option<String>,
}

impl PageInfo {
    pub fn page_request(&self) -> PageRequest {
        let page = self
            .page
            .as_deref()
            .and_then(|page| page.trim().parse::<u32>().ok());
        PageRequest::new(page, SortOrder::parse(self.order.as_deref()))
    }
}

pub fn validate_year(year: &str) -> Result<(), ValidationError> {
    let is_year = Regex::new(YEAR_PATTERN)
        .map(|pattern| pattern.is_match(year))
        .unwrap_or(false);
    if !is_year {
        return Err(ValidationError::new("Invalid year")
            .with_message(Cow::from("Year must be four digits, e.g. 1995")));
    }
    Ok(())
}

pub fn validate_genre(genre: &str) -> Result<(), ValidationError> {
    if genre.trim().is_empty() {
        return Err(ValidationError::new("Invalid genre")
            .with_message(Cow::from("Genre can't be empty")));
    }
    Ok(())
}

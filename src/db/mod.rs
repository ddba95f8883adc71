mod movies;
mod ratings;

pub use movies::*;
pub use ratings::*;

use crate::configuration::DatabaseSettings;
use sqlx::SqlitePool;

/// The two read-only stores the API serves from.
#[derive(Clone, Debug)]
pub struct Databases {
    pub movies: SqlitePool,
    pub ratings: SqlitePool,
}

impl Databases {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        let movies = SqlitePool::connect_with(settings.movies_connect_options()).await?;
        tracing::info!("Opened movies database at {}", settings.movies_path);
        let ratings = SqlitePool::connect_with(settings.ratings_connect_options()).await?;
        tracing::info!("Opened ratings database at {}", settings.ratings_path);
        Ok(Self { movies, ratings })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` (case-insensitive) sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    // Only ever interpolated as one of these two literals.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

use crate::db::fetch_genre_columns;
use crate::error::ApiError;
use crate::format::decode_json_list;
use crate::models::Genre;
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Every distinct genre name across the collection, first occurrence wins.
pub async fn get_genre_list(pool: &SqlitePool) -> Result<Vec<Genre>, ApiError> {
    let columns = fetch_genre_columns(pool).await?;

    let mut seen_names = HashSet::new();
    let mut genre_list = Vec::new();
    for column in columns.iter() {
        for genre in decode_json_list::<Genre>(column.as_deref())? {
            if seen_names.insert(genre.name.clone()) {
                genre_list.push(genre);
            }
        }
    }

    if genre_list.is_empty() {
        return Err(ApiError::NotFound("No genres found".to_string()));
    }
    Ok(genre_list)
}

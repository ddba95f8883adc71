use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
}

/// Local ratings are numeric averages, critic ratings come back as strings
/// such as `"87%"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RatingValue {
    Number(f64),
    Text(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub source: String,
    pub value: RatingValue,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub genres: Vec<Genre>,
    pub release_date: Option<String>,
    pub budget: String,
    pub runtime: Option<f64>,
    pub language: Option<String>,
    pub production_companies: Vec<ProductionCompany>,
    pub ratings: Vec<Rating>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MoviePreview {
    pub movie_id: i64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub genres: Vec<Genre>,
    pub release_date: Option<String>,
    pub budget: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total_pages: u64,
    pub curr_page: u32,
    pub count: u64,
    pub limit: u32,
}

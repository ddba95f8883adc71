use crate::configuration::RatingProviderSettings;
use crate::models::{Rating, RatingValue};
use serde::Deserialize;

pub const CRITIC_RATING_SOURCE: &str = "Rotten Tomatoes";

// https://www.omdbapi.com/
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderResponse {
    #[serde(default)]
    pub ratings: Vec<ProviderRating>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderRating {
    pub source: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct RatingProviderClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RatingProviderClient {
    pub fn new(settings: &RatingProviderSettings) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;
        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Looks up the critic rating of `imdb_id`. Every failure is logged and
    /// reported as `None`; the request timeout bounds the whole call.
    pub async fn fetch_critic_rating(&self, imdb_id: &str) -> Option<Rating> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("No rating provider api key configured, skipping critic rating");
            return None;
        };

        let response = self
            .http_client
            .get(format!("{}/", self.base_url))
            .query(&[("i", imdb_id), ("apikey", api_key)])
            .send()
            .await
            .and_then(|res| res.error_for_status());
        let response = match response {
            Ok(res) => res,
            Err(err) => {
                tracing::warn!("Rating provider request failed: {:?}", err);
                return None;
            }
        };

        match response.json::<ProviderResponse>().await {
            Ok(body) => {
                let rating = pick_rating(&body, CRITIC_RATING_SOURCE);
                if rating.is_none() {
                    tracing::info!("Rating provider has no {} rating for {}", CRITIC_RATING_SOURCE, imdb_id);
                }
                rating
            }
            Err(err) => {
                tracing::warn!("Rating provider returned a malformed body: {:?}", err);
                None
            }
        }
    }
}

pub fn pick_rating(response: &ProviderResponse, source: &str) -> Option<Rating> {
    response
        .ratings
        .iter()
        .find(|rating| rating.source == source)
        .map(|rating| Rating {
            source: rating.source.clone(),
            value: RatingValue::Text(rating.value.clone()),
        })
}

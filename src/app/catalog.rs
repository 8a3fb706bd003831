use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app::error::ApiError;
use crate::app::utils::{lenient_opt_u32, lenient_text, null_as_empty};

pub const DEFAULT_API_URL: &str = "https://moviesapi.ir/api/v1";

/// A movie as it appears in listings. The poster is only fetched on the
/// detail view, so the listing's poster URL is not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub imdb_rating: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
}

/// The full record returned by `GET /movies/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rated: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub writer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub actors: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub awards: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub metascore: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub imdb_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub imdb_votes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub imdb_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub media_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Paging details. Every field is optional: a listing with odd metadata
/// still shows its movies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub current_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub per_page: Option<u32>,
    #[serde(default, alias = "last_page", deserialize_with = "lenient_opt_u32")]
    pub page_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub total_count: Option<u32>,
}

/// One page of a movie listing, search or genre listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Movie>,
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

/// Read-only access to the movie catalog.
pub trait CatalogApi: Send + Sync {
    fn list_movies(&self, page: u32) -> Result<MoviePage, ApiError>;

    fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, ApiError>;

    fn list_genres(&self) -> Result<Vec<Genre>, ApiError>;

    fn genre_movies(&self, genre_id: u32, page: u32) -> Result<MoviePage, ApiError>;

    fn movie(&self, id: u32) -> Result<MovieDetail, ApiError>;

    /// Raw poster bytes, decoded by the caller.
    fn poster(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("moviedb-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Request {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn movies_url(&self, page: u32) -> String {
        format!("{}/movies?page={}", self.base_url, page)
    }

    pub fn search_url(&self, query: &str, page: u32) -> String {
        format!(
            "{}/movies?q={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            page
        )
    }

    pub fn genres_url(&self) -> String {
        format!("{}/genres", self.base_url)
    }

    pub fn genre_movies_url(&self, genre_id: u32, page: u32) -> String {
        format!("{}/genres/{}/movies?page={}", self.base_url, genre_id, page)
    }

    pub fn movie_url(&self, id: u32) -> String {
        format!("{}/movies/{}", self.base_url, id)
    }

    fn send(&self, url: &str) -> Result<reqwest::blocking::Response, ApiError> {
        tracing::debug!(%url, "API request started");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let result = self.send(url).and_then(|response| {
            response.json::<T>().map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
        });

        match &result {
            Ok(_) => tracing::info!(%url, "API request successful"),
            Err(e) => tracing::warn!(%url, error = %e, "API request failed"),
        }
        result
    }
}

impl CatalogApi for HttpCatalog {
    fn list_movies(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.get_json(&self.movies_url(page))
    }

    fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
        self.get_json(&self.search_url(query, page))
    }

    fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get_json(&self.genres_url())
    }

    fn genre_movies(&self, genre_id: u32, page: u32) -> Result<MoviePage, ApiError> {
        self.get_json(&self.genre_movies_url(genre_id, page))
    }

    fn movie(&self, id: u32) -> Result<MovieDetail, ApiError> {
        self.get_json(&self.movie_url(id))
    }

    fn poster(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let bytes = self
            .send(url)?
            .bytes()
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }
}

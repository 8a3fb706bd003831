//! In-memory catalog shared by the unit tests.

use std::thread;
use std::time::{Duration, Instant};

use reqwest::StatusCode;

use crate::app::App;
use crate::app::catalog::{CatalogApi, Genre, Movie, MovieDetail, MoviePage, PageMetadata};
use crate::app::error::ApiError;

pub const PER_PAGE: u32 = 10;
pub const PAGES: u32 = 3;

/// Three pages of ten movies, two genres (only Drama has movies) and movie
/// details for every id below 1000. Posters always fail.
#[derive(Default)]
pub struct FakeCatalog {
    /// Delays `list_movies` for this page by 200ms.
    pub slow_page: Option<u32>,
    /// When set, `list_movies` always serves this page, whatever was asked.
    pub clamp_to_page: Option<u32>,
}

pub fn movie(id: u32) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        year: Some("1999".into()),
        country: Some("USA".into()),
        imdb_rating: Some("7.5".into()),
        genres: vec!["Drama".into()],
        images: Vec::new(),
    }
}

fn page_of(movies: Vec<Movie>, page: u32, pages: u32) -> MoviePage {
    MoviePage {
        data: movies,
        metadata: Some(PageMetadata {
            current_page: Some(page),
            per_page: Some(PER_PAGE),
            page_count: Some(pages),
            total_count: None,
        }),
    }
}

fn not_found(url: &str) -> ApiError {
    ApiError::Status {
        url: url.to_string(),
        status: StatusCode::NOT_FOUND,
    }
}

impl CatalogApi for FakeCatalog {
    fn list_movies(&self, page: u32) -> Result<MoviePage, ApiError> {
        if self.slow_page == Some(page) {
            thread::sleep(Duration::from_millis(200));
        }
        let page = self.clamp_to_page.unwrap_or(page);
        let first = (page.max(1) - 1) * PER_PAGE + 1;
        Ok(page_of((first..first + PER_PAGE).map(movie).collect(), page, PAGES))
    }

    fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
        let hits = (1..=PER_PAGE * PAGES)
            .map(movie)
            .filter(|m| m.title.ends_with(query))
            .collect();
        Ok(page_of(hits, page, 1))
    }

    fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        Ok(vec![
            Genre { id: 1, name: "Crime".into() },
            Genre { id: 2, name: "Drama".into() },
        ])
    }

    fn genre_movies(&self, genre_id: u32, page: u32) -> Result<MoviePage, ApiError> {
        if genre_id == 2 {
            Ok(page_of(vec![movie(200), movie(201)], page, 2))
        } else {
            Err(not_found("/genres"))
        }
    }

    fn movie(&self, id: u32) -> Result<MovieDetail, ApiError> {
        if id >= 1000 {
            return Err(not_found("/movies"));
        }
        let json = format!(r#"{{"id": {id}, "title": "Movie {id}", "runtime": "120 min"}}"#);
        serde_json::from_str(&json).map_err(|_| not_found("/movies"))
    }

    fn poster(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        Err(not_found(url))
    }
}

/// Pumps messages until nothing is loading.
pub fn settle(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.drain_messages();
        if !app.loading_genres && !app.listing.loading && !app.detail.loading {
            return;
        }
        assert!(Instant::now() < deadline, "app never settled");
        thread::sleep(Duration::from_millis(5));
    }
}

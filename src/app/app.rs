use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use chrono::{DateTime, Local};
use image::DynamicImage;
use ratatui::widgets::ListState;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};
use throbber_widgets_tui::ThrobberState;

use crate::app::catalog::{CatalogApi, Genre, Movie, MovieDetail, MoviePage};
use crate::app::error::ApiError;
use crate::app::pagination::{can_go_next, can_go_prev, total_pages};
use crate::app::route::Route;

/// Results coming back from the background fetch threads.
pub enum FetchMessage {
    Genres(Result<Vec<Genre>, ApiError>),
    Listing {
        generation: u64,
        result: Result<MoviePage, ApiError>,
    },
    Detail {
        generation: u64,
        result: Result<MovieDetail, ApiError>,
    },
    Poster {
        generation: u64,
        result: Result<DynamicImage, ApiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Listing,
    Genres,
    GenreListing,
    MovieDetail,
}

/// State behind both the home gallery and the genre gallery.
pub struct ListingState {
    pub movies: Vec<Movie>,
    pub page: u32,
    pub total_pages: u32,
    pub per_page: Option<u32>,
    pub total_count: Option<u32>,
    pub loading: bool,
    pub selected: usize,
    /// Set by the gallery renderer; up/down move by a whole row.
    pub columns: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            page: 1,
            total_pages: 1,
            per_page: None,
            total_count: None,
            loading: false,
            selected: 0,
            columns: 1,
        }
    }
}

#[derive(Default)]
pub struct DetailState {
    pub movie: Option<MovieDetail>,
    pub loading: bool,
    pub loading_poster: bool,
    pub poster: Option<StatefulProtocol>,
}

pub struct App {
    api: Arc<dyn CatalogApi>,
    picker: Option<Picker>,
    pub route: Route,
    history: Vec<Route>,
    pub searching: bool,
    pub search_input: String,
    pub genres: Vec<Genre>,
    pub loading_genres: bool,
    pub genre_list_state: ListState,
    pub listing: ListingState,
    pub detail: DetailState,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
    pub throbber_state: ThrobberState,
    generation: u64,
    sender: Sender<FetchMessage>,
    receiver: Receiver<FetchMessage>,
}

impl App {
    pub fn new(api: Arc<dyn CatalogApi>, picker: Option<Picker>, route: Route) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            api,
            picker,
            route,
            history: Vec::new(),
            searching: false,
            search_input: String::new(),
            genres: Vec::new(),
            loading_genres: false,
            genre_list_state: ListState::default(),
            listing: ListingState::default(),
            detail: DetailState::default(),
            error: None,
            last_updated: None,
            throbber_state: ThrobberState::default(),
            generation: 0,
            sender,
            receiver,
        }
    }

    /// Kicks off the shell's genre fetch and the first view's requests.
    pub fn start(&mut self) {
        self.fetch_genres();
        self.load_route();
    }

    pub fn current_screen(&self) -> CurrentScreen {
        match self.route {
            Route::Home { .. } => CurrentScreen::Listing,
            Route::Genres => CurrentScreen::Genres,
            Route::Genre { .. } => CurrentScreen::GenreListing,
            Route::Movie { .. } => CurrentScreen::MovieDetail,
        }
    }

    pub fn active_query(&self) -> Option<&str> {
        match &self.route {
            Route::Home { query, .. } => query.as_deref(),
            _ => None,
        }
    }

    pub fn genre_name(&self, id: u32) -> String {
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| format!("Genre #{id}"))
    }

    pub fn is_loading(&self) -> bool {
        match self.current_screen() {
            CurrentScreen::Listing | CurrentScreen::GenreListing => self.listing.loading,
            CurrentScreen::Genres => self.loading_genres,
            CurrentScreen::MovieDetail => self.detail.loading,
        }
    }

    pub fn tick(&mut self) {
        if self.is_loading() || self.detail.loading_poster {
            self.throbber_state.calc_next();
        }
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&dyn CatalogApi) -> FetchMessage + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            // The receiver only goes away when the app is shutting down.
            let _ = sender.send(job(api.as_ref()));
        });
    }

    pub fn fetch_genres(&mut self) {
        if self.loading_genres {
            return;
        }
        self.loading_genres = true;
        self.spawn(|api| FetchMessage::Genres(api.list_genres()));
    }

    /// Issues the requests for the current route. Anything still in flight
    /// for an earlier route will be ignored when it lands.
    pub fn load_route(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.error = None;

        tracing::debug!(route = %self.route, generation, "loading route");

        match self.route.clone() {
            Route::Home { page, query } => {
                self.begin_listing(page);
                self.spawn(move |api| {
                    let result = match query {
                        Some(q) => api.search_movies(&q, page),
                        None => api.list_movies(page),
                    };
                    FetchMessage::Listing { generation, result }
                });
            }
            Route::Genre { id, page } => {
                self.begin_listing(page);
                if self.genres.is_empty() {
                    self.fetch_genres();
                }
                self.spawn(move |api| FetchMessage::Listing {
                    generation,
                    result: api.genre_movies(id, page),
                });
            }
            Route::Genres => {
                if self.genres.is_empty() {
                    self.fetch_genres();
                }
                if self.genre_list_state.selected().is_none() && !self.genres.is_empty() {
                    self.genre_list_state.select(Some(0));
                }
            }
            Route::Movie { id } => {
                self.detail = DetailState {
                    loading: true,
                    ..DetailState::default()
                };
                self.spawn(move |api| FetchMessage::Detail {
                    generation,
                    result: api.movie(id),
                });
            }
        }
    }

    /// The previous page's cards are dropped so nothing hidden behind the
    /// spinner can be selected or opened.
    fn begin_listing(&mut self, page: u32) {
        self.listing.loading = true;
        self.listing.page = page;
        self.listing.movies.clear();
        self.listing.selected = 0;
    }

    /// Applies every message that has arrived since the last tick.
    pub fn drain_messages(&mut self) -> bool {
        let mut applied = false;
        while let Ok(message) = self.receiver.try_recv() {
            self.apply_message(message);
            applied = true;
        }
        applied
    }

    fn record_error(&mut self, what: &str, error: &ApiError) {
        tracing::warn!(error = %error, "{what} failed");
        self.error = Some(format!("{what} failed: {error}"));
    }

    pub fn apply_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Genres(result) => {
                self.loading_genres = false;
                match result {
                    Ok(genres) => {
                        tracing::info!(count = genres.len(), "genre list loaded");
                        self.genres = genres;
                        if !self.genres.is_empty() && self.genre_list_state.selected().is_none() {
                            self.genre_list_state.select(Some(0));
                        }
                    }
                    Err(e) => self.record_error("Loading genres", &e),
                }
            }
            FetchMessage::Listing { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "dropping stale listing");
                    return;
                }
                self.listing.loading = false;
                match result {
                    Ok(page) => {
                        if let Some(served) = page.metadata.as_ref().and_then(|m| m.current_page)
                            && served != self.listing.page
                        {
                            tracing::warn!(
                                requested = self.listing.page,
                                served,
                                "catalog served a different page"
                            );
                        }
                        self.listing.total_pages =
                            total_pages(page.metadata.as_ref(), self.listing.page);
                        self.listing.per_page = page.metadata.as_ref().and_then(|m| m.per_page);
                        self.listing.total_count =
                            page.metadata.as_ref().and_then(|m| m.total_count);
                        self.listing.movies = page.data;
                        self.listing.selected = 0;
                        self.last_updated = Some(Local::now());
                    }
                    Err(e) => {
                        self.listing.movies.clear();
                        self.listing.total_pages = self.listing.page;
                        self.listing.total_count = None;
                        self.record_error("Loading movies", &e);
                    }
                }
            }
            FetchMessage::Detail { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "dropping stale detail");
                    return;
                }
                self.detail.loading = false;
                match result {
                    Ok(movie) => {
                        tracing::info!(id = movie.id, title = %movie.title, "movie loaded");
                        if let Some(url) = movie.poster.clone() {
                            self.fetch_poster(url, generation);
                        }
                        self.detail.movie = Some(movie);
                        self.last_updated = Some(Local::now());
                    }
                    Err(e) => {
                        self.detail.movie = None;
                        self.record_error("Loading movie", &e);
                    }
                }
            }
            FetchMessage::Poster { generation, result } => {
                if generation != self.generation {
                    return;
                }
                self.detail.loading_poster = false;
                match (result, &self.picker) {
                    (Ok(image), Some(picker)) => {
                        self.detail.poster = Some(picker.new_resize_protocol(image));
                    }
                    (Ok(_), None) => {}
                    (Err(e), _) => {
                        tracing::debug!(error = %e, "poster unavailable, showing placeholder");
                    }
                }
            }
        }
    }

    fn fetch_poster(&mut self, url: String, generation: u64) {
        // Without a picker there is nothing to draw the image with.
        if self.picker.is_none() {
            return;
        }
        self.detail.loading_poster = true;
        self.spawn(move |api| {
            let result = api
                .poster(&url)
                .and_then(|bytes| image::load_from_memory(&bytes).map_err(ApiError::from));
            FetchMessage::Poster { generation, result }
        });
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            self.load_route();
            return;
        }
        tracing::info!(from = %self.route, to = %route, "navigating");
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        self.load_route();
    }

    /// Moves to `route` without leaving a history entry; used for paging.
    pub fn replace_route(&mut self, route: Route) {
        tracing::info!(from = %self.route, to = %route, "replacing route");
        self.route = route;
        self.load_route();
    }

    pub fn back(&mut self) {
        match self.history.pop() {
            Some(previous) => {
                tracing::info!(from = %self.route, to = %previous, "going back");
                self.route = previous;
                self.load_route();
            }
            None if self.route != Route::home() => self.replace_route(Route::home()),
            None => {}
        }
    }

    pub fn reload(&mut self) {
        if self.genres.is_empty() {
            self.fetch_genres();
        }
        self.load_route();
    }

    pub fn next_page(&mut self) {
        if !self.route.is_listing() || self.listing.loading {
            return;
        }
        if can_go_next(self.listing.page, self.listing.total_pages) {
            let route = self.route.with_page(self.listing.page + 1);
            self.replace_route(route);
        }
    }

    pub fn previous_page(&mut self) {
        if !self.route.is_listing() || self.listing.loading {
            return;
        }
        if can_go_prev(self.listing.page) {
            let route = self.route.with_page(self.listing.page - 1);
            self.replace_route(route);
        }
    }

    pub fn select_next(&mut self) {
        let count = self.listing.movies.len();
        if count > 0 && self.listing.selected + 1 < count {
            self.listing.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.listing.selected = self.listing.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let count = self.listing.movies.len();
        let target = self.listing.selected + self.listing.columns.max(1);
        if target < count {
            self.listing.selected = target;
        }
    }

    pub fn select_up(&mut self) {
        let columns = self.listing.columns.max(1);
        if self.listing.selected >= columns {
            self.listing.selected -= columns;
        }
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.listing.movies.get(self.listing.selected)
    }

    pub fn next_genre(&mut self) {
        let count = self.genres.len();
        if count == 0 {
            return;
        }
        let next = self
            .genre_list_state
            .selected()
            .map_or(0, |i| (i + 1) % count);
        self.genre_list_state.select(Some(next));
    }

    pub fn previous_genre(&mut self) {
        let count = self.genres.len();
        if count == 0 {
            return;
        }
        let previous = match self.genre_list_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.genre_list_state.select(Some(previous));
    }

    /// Enter on the gallery opens the movie, on the genre menu the genre.
    pub fn open_selected(&mut self) {
        match self.current_screen() {
            CurrentScreen::Listing | CurrentScreen::GenreListing => {
                if let Some(id) = self.selected_movie().map(|m| m.id) {
                    self.navigate(Route::Movie { id });
                }
            }
            CurrentScreen::Genres => {
                let genre = self
                    .genre_list_state
                    .selected()
                    .and_then(|i| self.genres.get(i))
                    .map(|g| g.id);
                if let Some(id) = genre {
                    self.navigate(Route::Genre { id, page: 1 });
                }
            }
            CurrentScreen::MovieDetail => {}
        }
    }

    pub fn start_search(&mut self) {
        self.searching = true;
        self.search_input = self.active_query().unwrap_or_default().to_string();
    }

    pub fn cancel_search(&mut self) {
        self.searching = false;
        self.search_input.clear();
    }

    pub fn submit_search(&mut self) {
        self.searching = false;
        let term = self.search_input.trim().to_string();
        if term.is_empty() {
            self.clear_search();
        } else {
            let route = Route::search(&term);
            self.search_input = term;
            self.navigate(route);
        }
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        if self.active_query().is_some() {
            self.replace_route(Route::home());
        }
    }
}

use std::fmt;
use std::str::FromStr;

/// Where the user is. Every view is reachable from its route string, so a
/// route printed in the header can be passed back in with `--route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home { page: u32, query: Option<String> },
    Genres,
    Genre { id: u32, page: u32 },
    Movie { id: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    UnknownPath(String),

    #[error("invalid id {0:?} in route")]
    BadId(String),
}

impl Route {
    pub fn home() -> Self {
        Route::Home { page: 1, query: None }
    }

    pub fn search(query: &str) -> Self {
        Route::Home {
            page: 1,
            query: Some(query.to_string()),
        }
    }

    /// Same view, different page. Routes without pagination are unchanged.
    pub fn with_page(&self, new_page: u32) -> Self {
        let new_page = new_page.max(1);
        match self {
            Route::Home { query, .. } => Route::Home {
                page: new_page,
                query: query.clone(),
            },
            Route::Genre { id, .. } => Route::Genre { id: *id, page: new_page },
            other => other.clone(),
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, Route::Home { .. } | Route::Genre { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home { page, query } => {
                let mut params = Vec::new();
                if let Some(q) = query {
                    params.push(format!("q={}", urlencoding::encode(q)));
                }
                if *page > 1 {
                    params.push(format!("page={page}"));
                }
                if params.is_empty() {
                    write!(f, "/")
                } else {
                    write!(f, "/?{}", params.join("&"))
                }
            }
            Route::Genres => write!(f, "/genres"),
            Route::Genre { id, page } if *page > 1 => write!(f, "/genres/{id}/movies?page={page}"),
            Route::Genre { id, .. } => write!(f, "/genres/{id}/movies"),
            Route::Movie { id } => write!(f, "/movie/{id}"),
        }
    }
}

fn parse_id(raw: &str) -> Result<u32, RouteError> {
    raw.parse::<u32>()
        .map_err(|_| RouteError::BadId(raw.to_string()))
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (path, query_string) = s.split_once('?').unwrap_or((s, ""));

        let mut page = 1;
        let mut query = None;
        for pair in query_string.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "page" => page = value.parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1),
                "q" => {
                    let decoded = urlencoding::decode(&value.replace('+', " "))
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                    let trimmed = decoded.trim();
                    query = (!trimmed.is_empty()).then(|| trimmed.to_string());
                }
                _ => {}
            }
        }

        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::Home { page, query }),
            ["genres"] => Ok(Route::Genres),
            ["genres", id] | ["genres", id, "movies"] => Ok(Route::Genre {
                id: parse_id(id)?,
                page,
            }),
            ["movie", id] | ["movies", id] => Ok(Route::Movie { id: parse_id(id)? }),
            _ => Err(RouteError::UnknownPath(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Route {
        s.parse().unwrap()
    }

    #[test]
    fn first_page_is_left_out_of_route_strings() {
        assert_eq!(Route::home().to_string(), "/");
        assert_eq!(Route::home().with_page(3).to_string(), "/?page=3");
        assert_eq!(Route::Genre { id: 4, page: 1 }.to_string(), "/genres/4/movies");
        assert_eq!(
            Route::Genre { id: 4, page: 2 }.to_string(),
            "/genres/4/movies?page=2"
        );
    }

    #[test]
    fn search_routes_encode_the_term() {
        let route = Route::search("star wars").with_page(2);
        assert_eq!(route.to_string(), "/?q=star%20wars&page=2");
        assert_eq!(parse("/?q=star%20wars&page=2"), route);
        assert_eq!(parse("/?q=star+wars"), Route::search("star wars"));
    }

    #[test]
    fn parses_every_view() {
        assert_eq!(parse("/"), Route::home());
        assert_eq!(parse(""), Route::home());
        assert_eq!(parse("/genres"), Route::Genres);
        assert_eq!(parse("/genres/"), Route::Genres);
        assert_eq!(parse("genres/7"), Route::Genre { id: 7, page: 1 });
        assert_eq!(parse("/genres/7/movies?page=3"), Route::Genre { id: 7, page: 3 });
        assert_eq!(parse("/movie/42"), Route::Movie { id: 42 });
    }

    #[test]
    fn bad_pages_fall_back_to_first() {
        assert_eq!(parse("/?page=0"), Route::home());
        assert_eq!(parse("/?page=abc"), Route::home());
        assert_eq!(parse("/?q=&page=-2"), Route::home());
    }

    #[test]
    fn rejects_unknown_paths_and_ids() {
        assert_eq!(
            "/actors/3".parse::<Route>(),
            Err(RouteError::UnknownPath("/actors/3".into()))
        );
        assert_eq!(
            "/movie/abc".parse::<Route>(),
            Err(RouteError::BadId("abc".into()))
        );
    }

    #[test]
    fn with_page_keeps_the_search_term() {
        let route = Route::search("heat").with_page(0);
        assert_eq!(route, Route::search("heat"));
        assert_eq!(Route::Movie { id: 1 }.with_page(5), Route::Movie { id: 1 });
    }
}

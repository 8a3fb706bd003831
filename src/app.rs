#[allow(clippy::module_inception)]
mod app;
pub mod catalog;
pub mod error;
pub mod genre_style;
pub mod pagination;
pub mod route;
mod utils;

pub use app::{App, CurrentScreen};

#[cfg(test)]
pub mod testing;

mod footer;
mod genre_menu;
mod header;
mod loading;
mod main_content;
mod movie_detail;
mod pagination;
#[allow(clippy::module_inception)]
mod ui;

pub use ui::ui;

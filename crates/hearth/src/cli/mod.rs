mod app;
mod config;
mod listing;
mod slug;

pub use app::App;

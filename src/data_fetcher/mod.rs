pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{FetchOptions, SportsApi};
pub use models::{GameDetail, League};

//! Core library for the `breeze` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and the OpenWeather implementation
//! - The in-memory favourites store
//! - Formatting of weather records for display
//!
//! It is used by `breeze-cli`, but can also be reused by other binaries.

pub mod config;
pub mod favourites;
pub mod model;
pub mod presenter;
pub mod provider;

pub use config::Config;
pub use favourites::{Favourites, FavouritesError, MAX_FAVOURITES};
pub use model::WeatherRecord;
pub use provider::{FetchError, WeatherProvider, fetch_each};

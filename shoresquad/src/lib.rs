//! ShoreSquad keeps the client-side state of a beach-cleanup board.
//!
//! It holds the cleanups on offer and the person browsing them, and decides
//! what the map, the list, the weather panel and the impact dashboard show
//! after every interaction. Nothing is persisted: a session starts from the
//! seed data and ends when the board is dropped.
//!
//! [`ShoreSquad`] is the entry point. It owns an [`AppState`] and drives a
//! [`ViewRenderer`], so the same logic runs against the HTML view
//! ([`HtmlView`]), a terminal, or a recording double in tests.
//!
//! Weather and geocoding sit behind [`WeatherProvider`] and [`Geocoder`]. Only
//! canned implementations ship with the crate; real services plug in by
//! implementing the traits.
//!
//! Search input is meant to go through a [`Debouncer`], and confirmations
//! are shown through a [`NotificationCenter`] which removes them after a few
//! seconds. Both run their timers on tokio.
//!
//! See `examples/basic_usage.rs` for a short walk through a session.
//!
//! [`ShoreSquad`]: crate::app::ShoreSquad
//! [`AppState`]: crate::state::AppState
//! [`ViewRenderer`]: crate::render::ViewRenderer
//! [`HtmlView`]: crate::render::HtmlView
//! [`WeatherProvider`]: crate::weather::WeatherProvider
//! [`Geocoder`]: crate::map::Geocoder
//! [`Debouncer`]: crate::debounce::Debouncer
//! [`NotificationCenter`]: crate::notification::NotificationCenter

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod map;
/// Cleanups, users, ids and coordinates.
pub mod models;
pub mod notification;
pub mod render;
pub mod share;
pub mod state;
pub mod weather;

pub use error::{Error, Result};

//! Core library for the `weather-guide` CLI.
//!
//! This crate defines:
//! - The Korean city alias table and name resolution
//! - Selection of the readings six hours before and after now
//! - Food and outing recommendations, with map search links
//! - The WeatherAPI.com client and secrets handling
//!
//! Nothing here draws anything; [`Report`] is the data a renderer consumes.

pub mod alias;
pub mod config;
pub mod error;
pub mod forecast;
pub mod guide;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod report;

pub use alias::resolve;
pub use config::Config;
pub use error::WeatherError;
pub use forecast::{HourSlot, HourlyOffsets, select_offset};
pub use guide::WeatherGuide;
pub use model::ForecastPayload;
pub use provider::{WeatherApiProvider, WeatherProvider, provider_from_config};
pub use recommend::{MapLinks, Recommendation, map_links, recommend};
pub use report::Report;

//! Vegetable Price Forecast Backend Library
//!
//! Serves `GET /api/priceforecast`, which accepts a vegetable name and a date
//! range and currently replies with a fixed placeholder message. Also provides:
//! - Environment-based configuration
//! - Best-effort loading of the vegetable price data file
//! - A health check route

pub mod api;
pub mod config;
pub mod services;
pub mod state;

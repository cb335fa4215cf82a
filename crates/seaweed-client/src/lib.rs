/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # seaweed-client
//!
//! A Magic Seaweed API client for Rust.
//!
//! ## Features
//!
//! - **Forecasts**: full multi-day forecast for a spot, or the subsets for
//!   today, tomorrow and the weekend
//! - **Caching**: responses are kept on disk and reused inside a configurable
//!   freshness window
//! - **Tolerant**: the API's HTTP 200 error bodies surface as `Error::Api`
//! - **Testable**: transport, cache and clock are all injectable
//!
//! ## Usage
//!
//! ```rust,no_run
//! use seaweed_client::SeaweedClient;
//! use seaweed_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = SeaweedClient::new(config)?;
//!
//!     // Ocean City, NJ
//!     for forecast in client.weekend("391").await? {
//!         println!("{} {}", forecast.local_timestamp, forecast.solid_rating);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All queries return `Result<Vec<Forecast>, seaweed_core::Error>`. An empty
//! vector means nothing matched; a failed fetch is always an `Err`.

#![warn(clippy::all)]

pub mod cache;
pub mod client;
pub mod endpoints;
pub mod fetcher;
pub mod logging;
pub mod transport;

pub use cache::{CacheKey, CacheStore, FileCache, MemoryCache};
pub use client::{get, SeaweedClient, SeaweedClientBuilder};
pub use fetcher::{FetchSettings, ForecastFetcher};
pub use seaweed_core::{Clock, Config, Error, FixedClock, Result, SystemClock};
pub use seaweed_models::*;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

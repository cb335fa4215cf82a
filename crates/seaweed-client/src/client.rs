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

use crate::cache::{CacheStore, FileCache};
use crate::endpoints::{forecast_url, Redactor};
use crate::fetcher::{FetchSettings, ForecastFetcher};
use crate::transport::{HttpTransport, ReqwestTransport};
use chrono::Days;
use seaweed_core::{Clock, Config, Error, Result, SystemClock};
use seaweed_models::{filter_by_day, filter_weekend, Forecast};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

/// Main Magic Seaweed API client
///
/// Every query funnels through the same cached fetch; `today`, `tomorrow` and
/// `weekend` filter its result and never issue a second request.
///
/// # Examples
///
/// ```ignore
/// use seaweed_client::SeaweedClient;
/// use seaweed_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SeaweedClient::new(Config::from_env()?)?;
///
///     let tomorrow = client.tomorrow("391").await?;
///     println!("{} forecasts for tomorrow", tomorrow.len());
///
///     Ok(())
/// }
/// ```
pub struct SeaweedClient {
  config: Config,
  fetcher: ForecastFetcher,
}

impl SeaweedClient {
  /// Create a client with the reqwest transport, a file cache in
  /// `config.cache_dir` and the system clock
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use seaweed_client::SeaweedClient;
  /// use seaweed_core::Config;
  ///
  /// let config = Config::from_env().expect("Missing API key");
  /// let client = SeaweedClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    Self::builder(config).build()
  }

  /// Start a builder to swap the transport, cache or clock
  pub fn builder(config: Config) -> SeaweedClientBuilder {
    SeaweedClientBuilder { config, transport: None, cache: None, clock: None }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Request URL for a spot. Contains the API key; do not log it.
  pub fn forecast_url(&self, spot: &str) -> Result<Url> {
    forecast_url(&self.config.base_url, &self.config.api_key, spot)
  }

  /// Full multi-day forecast for a spot.
  ///
  /// A spot's ID appears in its Magic Seaweed URL; Ocean City, NJ is 391:
  /// `https://magicseaweed.com/Ocean-City-NJ-Surf-Report/391/`
  #[instrument(skip(self))]
  pub async fn forecast(&self, spot: &str) -> Result<Vec<Forecast>> {
    self.fetcher.fetch(&self.forecast_url(spot)?, None).await
  }

  /// Like [`forecast`](Self::forecast), giving up with `Error::Cancelled` when
  /// the API has not answered within `deadline`
  #[instrument(skip(self))]
  pub async fn forecast_with_deadline(&self, spot: &str, deadline: Duration) -> Result<Vec<Forecast>> {
    self.fetcher.fetch(&self.forecast_url(spot)?, Some(deadline)).await
  }

  /// Forecasts for the current UTC date
  #[instrument(skip(self))]
  pub async fn today(&self, spot: &str) -> Result<Vec<Forecast>> {
    let now = self.fetcher.clock().now();
    let forecasts = self.forecast(spot).await?;

    Ok(filter_by_day(forecasts, &now))
  }

  /// Forecasts for the next UTC calendar date
  #[instrument(skip(self))]
  pub async fn tomorrow(&self, spot: &str) -> Result<Vec<Forecast>> {
    let now = self.fetcher.clock().now();
    let tomorrow = now
      .checked_add_days(Days::new(1))
      .ok_or_else(|| Error::Unexpected(format!("no calendar day after {}", now)))?;
    let forecasts = self.forecast(spot).await?;

    Ok(filter_by_day(forecasts, &tomorrow))
  }

  /// Saturday and Sunday forecasts
  #[instrument(skip(self))]
  pub async fn weekend(&self, spot: &str) -> Result<Vec<Forecast>> {
    let forecasts = self.forecast(spot).await?;

    Ok(filter_weekend(forecasts))
  }
}

impl std::fmt::Debug for SeaweedClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SeaweedClient")
      .field("config", &self.config)
      .field("fetcher", &self.fetcher)
      .finish()
  }
}

/// Builder for [`SeaweedClient`]
pub struct SeaweedClientBuilder {
  config: Config,
  transport: Option<Arc<dyn HttpTransport>>,
  cache: Option<Arc<dyn CacheStore>>,
  clock: Option<Arc<dyn Clock>>,
}

impl SeaweedClientBuilder {
  pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
    self.transport = Some(transport);
    self
  }

  pub fn cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
    self.cache = Some(cache);
    self
  }

  pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = Some(clock);
    self
  }

  pub fn build(self) -> Result<SeaweedClient> {
    let transport: Arc<dyn HttpTransport> = match self.transport {
      Some(transport) => transport,
      None => Arc::new(ReqwestTransport::new(&self.config)?),
    };
    let cache: Arc<dyn CacheStore> = match self.cache {
      Some(cache) => cache,
      None => Arc::new(FileCache::new(self.config.cache_dir.clone())),
    };
    let clock: Arc<dyn Clock> = match self.clock {
      Some(clock) => clock,
      None => Arc::new(SystemClock),
    };

    let fetcher = ForecastFetcher::new(
      transport,
      cache,
      clock,
      FetchSettings::from(&self.config),
      Redactor::new(&self.config.api_key, &self.config.base_url),
    );

    Ok(SeaweedClient { config: self.config, fetcher })
  }
}

/// One-shot forecast for `spot` with a default client
pub async fn get(api_key: &str, spot: &str) -> Result<Vec<Forecast>> {
  SeaweedClient::new(Config::default_with_key(api_key.to_string()))?.forecast(spot).await
}

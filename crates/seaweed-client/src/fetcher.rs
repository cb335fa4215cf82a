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

//! The single fetch path behind every public query.
//!
//! A fresh cache entry is decoded and returned. Otherwise the forecast is
//! fetched, checked for a non-200 status and for the API's HTTP 200 error
//! body, decoded, and only then written through to the cache.

use crate::cache::{CacheKey, CacheStore};
use crate::endpoints::Redactor;
use crate::transport::{HttpResponse, HttpTransport};
use chrono::{DateTime, Utc};
use seaweed_core::{Clock, Config, Error, Result, ERROR_ENVELOPE_MARKER};
use seaweed_models::{ApiErrorEnvelope, Forecast};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Cache and logging behaviour of a fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
  /// Freshness window for cached bodies
  pub max_age: Duration,
  /// Skip the cache entirely: always fetch, never write
  pub cache_disabled: bool,
  /// Log request URLs and response bodies at info instead of debug
  pub log_requests: bool,
}

impl From<&Config> for FetchSettings {
  fn from(config: &Config) -> Self {
    Self {
      max_age: config.cache_max_age(),
      cache_disabled: config.cache_disabled,
      log_requests: config.log_requests,
    }
  }
}

#[derive(Debug, Clone)]
pub struct ForecastFetcher {
  transport: Arc<dyn HttpTransport>,
  cache: Arc<dyn CacheStore>,
  clock: Arc<dyn Clock>,
  settings: FetchSettings,
  redactor: Redactor,
}

impl ForecastFetcher {
  pub fn new(
    transport: Arc<dyn HttpTransport>,
    cache: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    settings: FetchSettings,
    redactor: Redactor,
  ) -> Self {
    Self { transport, cache, clock, settings, redactor }
  }

  pub fn clock(&self) -> &Arc<dyn Clock> {
    &self.clock
  }

  /// Forecasts behind `url`, from the cache when fresh.
  ///
  /// `deadline` bounds the network call only; when it elapses the result is
  /// `Error::Cancelled`.
  #[instrument(skip_all)]
  pub async fn fetch(&self, url: &Url, deadline: Option<Duration>) -> Result<Vec<Forecast>> {
    let key = CacheKey::from_url(url)?;
    let now = self.clock.now();

    if self.settings.cache_disabled {
      debug!(key = %key, "Cache disabled, fetching");
    } else if self.cache.is_stale(&key, self.settings.max_age, now).await {
      debug!(key = %key, "Cache stale or missing, fetching");
    } else if let Some(forecasts) = self.read_cached(&key).await {
      return Ok(forecasts);
    }

    let body = self.fetch_remote(url, deadline).await?;
    let forecasts = decode_forecasts(&body)?;

    if !self.settings.cache_disabled {
      self.write_through(&key, &body, now).await;
    }

    Ok(forecasts)
  }

  // None sends the caller to the network.
  async fn read_cached(&self, key: &CacheKey) -> Option<Vec<Forecast>> {
    let body = match self.cache.get(key).await {
      Ok(body) => body,
      Err(e) => {
        warn!(key = %key, error = %e, "Fresh cache entry unreadable, refetching");
        return None;
      }
    };

    match decode_forecasts(&body) {
      Ok(forecasts) => {
        if self.settings.log_requests {
          info!(key = %key, "Reading cached forecast");
        } else {
          debug!(key = %key, count = forecasts.len(), "Cache hit");
        }
        Some(forecasts)
      }
      Err(e) => {
        warn!(key = %key, error = %e, "Cached forecast does not decode, refetching");
        None
      }
    }
  }

  async fn write_through(&self, key: &CacheKey, body: &[u8], now: DateTime<Utc>) {
    match self.cache.put(key, body, now).await {
      Ok(()) => debug!(key = %key, bytes = body.len(), "Cached forecast"),
      Err(e) => warn!(key = %key, error = %e, "Failed to write forecast cache"),
    }
  }

  async fn fetch_remote(&self, url: &Url, deadline: Option<Duration>) -> Result<Vec<u8>> {
    let sanitized = self.redactor.sanitize_url(url);
    if self.settings.log_requests {
      info!(url = %sanitized, "Request url");
    } else {
      debug!(url = %sanitized, "Making request");
    }

    let response = self.send(url, deadline).await.map_err(|e| match e {
      Error::Transport(msg) => Error::Transport(self.redactor.redact(&msg)),
      other => other,
    })?;

    self.log_response(&sanitized, &response);

    if !response.is_ok() {
      error!(url = %sanitized, http_status = response.status, "Unexpected HTTP status");
      return Err(Error::UnexpectedStatus { status: response.status, url: sanitized });
    }

    check_api_error(&response.body)?;

    Ok(response.body)
  }

  async fn send(&self, url: &Url, deadline: Option<Duration>) -> Result<HttpResponse> {
    match deadline {
      Some(deadline) => tokio::time::timeout(deadline, self.transport.get(url))
        .await
        .map_err(|_| Error::Cancelled { deadline })?,
      None => self.transport.get(url).await,
    }
  }

  fn log_response(&self, sanitized: &str, response: &HttpResponse) {
    let body = response.text();
    if self.settings.log_requests {
      info!(url = %sanitized, http_status = response.status, body = %body, "Magic Seaweed API response");
    } else {
      debug!(url = %sanitized, http_status = response.status, bytes = response.body.len(), "Magic Seaweed API response");
    }
  }
}

/// Turn an HTTP 200 error body into `Error::Api`.
///
/// Only bodies containing the `error_response` marker are inspected, and only
/// those that actually decode as the envelope are treated as errors. A forecast
/// array that merely mentions the marker passes through.
pub fn check_api_error(body: &[u8]) -> Result<()> {
  let marker = ERROR_ENVELOPE_MARKER.as_bytes();
  if !body.windows(marker.len()).any(|window| window == marker) {
    return Ok(());
  }

  match serde_json::from_slice::<ApiErrorEnvelope>(body) {
    Ok(envelope) => Err(Error::Api(envelope.message().to_string())),
    Err(_) => Ok(()),
  }
}

/// Decode a forecast body, keeping the raw text on failure
pub fn decode_forecasts(body: &[u8]) -> Result<Vec<Forecast>> {
  serde_json::from_slice(body)
    .map_err(|source| Error::Decode { body: String::from_utf8_lossy(body).into_owned(), source })
}

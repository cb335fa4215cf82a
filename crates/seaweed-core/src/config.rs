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

//! Configuration management for the Magic Seaweed client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "MAGIC_SEAWEED_API_KEY";
/// Overrides the API base URL
pub const BASE_URL_VAR: &str = "SEAWEED_BASE_URL";
/// Directory for cached responses
pub const CACHE_DIR_VAR: &str = "SEAWEED_CACHE_DIR";
/// Cache freshness window in seconds
pub const CACHE_MAX_AGE_VAR: &str = "SEAWEED_CACHE_MAX_AGE_SECS";
/// Presence disables the response cache
pub const DISABLE_CACHE_VAR: &str = "SEAWEED_DISABLE_CACHE";
/// Presence turns on request/response logging at info level
pub const LOG_REQUESTS_VAR: &str = "SEAWEED_LOG_REQUESTS";
/// Request timeout in seconds
pub const TIMEOUT_VAR: &str = "SEAWEED_TIMEOUT_SECS";

/// Main configuration struct for the Magic Seaweed client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Magic Seaweed API key. Never serialized.
  #[serde(skip_serializing)]
  pub api_key: String,

  /// Base URL for the Magic Seaweed API
  pub base_url: String,

  /// Directory holding cached responses
  pub cache_dir: PathBuf,

  /// Maximum age of a cached response before it is refetched
  pub cache_max_age_secs: u64,

  /// Bypass the cache entirely (no reads, no writes)
  pub cache_disabled: bool,

  /// Log request URLs, statuses and bodies at info level
  pub log_requests: bool,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables, reading `.env` first if present
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_vars(|name| env::var(name).ok())
  }

  /// Build a configuration from an arbitrary variable lookup
  pub fn from_vars<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key =
      lookup(API_KEY_VAR).ok_or_else(|| Error::ApiKey(format!("{} not set", API_KEY_VAR)))?;

    let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| crate::MAGIC_SEAWEED_BASE_URL.to_string());

    let cache_dir = lookup(CACHE_DIR_VAR).map(PathBuf::from).unwrap_or_else(env::temp_dir);

    let cache_max_age_secs = parse_u64(&lookup, CACHE_MAX_AGE_VAR, crate::DEFAULT_CACHE_MAX_AGE_SECS)?;
    let timeout_secs = parse_u64(&lookup, TIMEOUT_VAR, crate::DEFAULT_TIMEOUT_SECS)?;

    Ok(Config {
      api_key,
      base_url,
      cache_dir,
      cache_max_age_secs,
      cache_disabled: lookup(DISABLE_CACHE_VAR).is_some(),
      log_requests: lookup(LOG_REQUESTS_VAR).is_some(),
      timeout_secs,
    })
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::MAGIC_SEAWEED_BASE_URL.to_string(),
      cache_dir: env::temp_dir(),
      cache_max_age_secs: crate::DEFAULT_CACHE_MAX_AGE_SECS,
      cache_disabled: false,
      log_requests: false,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Builder: set base_url
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Builder: set cache_dir
  pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cache_dir = dir.into();
    self
  }

  /// Builder: set the cache freshness window
  pub fn with_cache_max_age(mut self, max_age: Duration) -> Self {
    self.cache_max_age_secs = max_age.as_secs();
    self
  }

  /// Builder: set cache_disabled
  pub fn with_cache_disabled(mut self, disabled: bool) -> Self {
    self.cache_disabled = disabled;
    self
  }

  /// Builder: set log_requests
  pub fn with_log_requests(mut self, enabled: bool) -> Self {
    self.log_requests = enabled;
    self
  }

  /// Builder: set timeout_secs
  pub fn with_timeout_secs(mut self, secs: u64) -> Self {
    self.timeout_secs = secs;
    self
  }

  pub fn cache_max_age(&self) -> Duration {
    Duration::from_secs(self.cache_max_age_secs)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

fn parse_u64<F>(lookup: &F, name: &str, default: u64) -> Result<u64>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(name) {
    Some(raw) => raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}", name))),
    None => Ok(default),
  }
}

// The key never goes through Debug.
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &crate::REDACTED)
      .field("base_url", &self.base_url)
      .field("cache_dir", &self.cache_dir)
      .field("cache_max_age_secs", &self.cache_max_age_secs)
      .field("cache_disabled", &self.cache_disabled)
      .field("log_requests", &self.log_requests)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

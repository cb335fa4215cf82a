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

//! Forecast endpoint construction and URL redaction
//!
//! The API key travels in the request path, so every URL that reaches a log
//! line or an error message goes through [`Redactor`] first.

use seaweed_core::{Error, Result, REDACTED};
use url::Url;

/// Query parameter naming the spot
pub const SPOT_ID_PARAM: &str = "spot_id";

/// `{base_url}/api/{api_key}/forecast/?spot_id={spot_id}`
pub fn forecast_url(base_url: &str, api_key: &str, spot_id: &str) -> Result<Url> {
  if spot_id.is_empty() {
    return Err(Error::InvalidUrl("spot id must not be empty".to_string()));
  }

  let mut url = Url::parse(base_url)
    .map_err(|e| Error::InvalidUrl(format!("Invalid base URL {}: {}", base_url, e)))?;

  url
    .path_segments_mut()
    .map_err(|_| Error::InvalidUrl(format!("Base URL {} cannot carry a path", base_url)))?
    .pop_if_empty()
    .extend(["api", api_key, "forecast", ""]);

  url.set_query(None);
  url.query_pairs_mut().append_pair(SPOT_ID_PARAM, spot_id);

  Ok(url)
}

/// Strips secrets and the base URL from request URLs
#[derive(Clone)]
pub struct Redactor {
  secrets: Vec<String>,
  base_prefix: String,
}

impl Redactor {
  pub fn new(api_key: &str, base_url: &str) -> Self {
    let mut secrets = Vec::new();
    if !api_key.is_empty() {
      secrets.push(api_key.to_string());
      let encoded = encode_path_segment(api_key);
      if encoded != api_key {
        secrets.push(encoded);
      }
    }

    let base_prefix = Url::parse(base_url)
      .map(|u| u.as_str().trim_end_matches('/').to_string())
      .unwrap_or_else(|_| base_url.trim_end_matches('/').to_string());

    Self { secrets, base_prefix }
  }

  /// Replace every occurrence of the API key with `<REDACTED>`
  pub fn redact(&self, text: &str) -> String {
    self.secrets.iter().fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), REDACTED))
  }

  /// Request path and query with the key redacted, e.g. `/api/<REDACTED>/forecast/?spot_id=391`
  pub fn sanitize_url(&self, url: &Url) -> String {
    let full = url.as_str();
    let relative = if self.base_prefix.is_empty() {
      full
    } else {
      full.strip_prefix(self.base_prefix.as_str()).unwrap_or(full)
    };
    self.redact(relative)
  }
}

impl std::fmt::Debug for Redactor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Redactor")
      .field("secrets", &self.secrets.len())
      .field("base_prefix", &self.base_prefix)
      .finish()
  }
}

// Percent-encoded form of `segment` as it appears in a URL path.
fn encode_path_segment(segment: &str) -> String {
  match Url::parse("http://localhost/") {
    Ok(mut url) => {
      if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(segment);
      }
      url.path().trim_start_matches('/').to_string()
    }
    Err(_) => segment.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_forecast_url() {
    let url = forecast_url("http://magicseaweed.com", "fakeKey", "123").unwrap();
    assert_eq!(url.as_str(), "http://magicseaweed.com/api/fakeKey/forecast/?spot_id=123");
  }

  #[test]
  fn test_forecast_url_trailing_slash_and_prefix() {
    let url = forecast_url("http://127.0.0.1:8080/", "k", "391").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/k/forecast/?spot_id=391");

    let url = forecast_url("https://proxy.example/msw", "k", "391").unwrap();
    assert_eq!(url.as_str(), "https://proxy.example/msw/api/k/forecast/?spot_id=391");
  }

  #[test]
  fn test_forecast_url_encodes_spot() {
    let url = forecast_url("https://magicseaweed.com", "k", "39 1&x=2").unwrap();
    let spot: Vec<_> = url.query_pairs().filter(|(k, _)| k == SPOT_ID_PARAM).collect();
    assert_eq!(spot.len(), 1);
    assert_eq!(spot[0].1, "39 1&x=2");
  }

  #[test]
  fn test_forecast_url_rejects_bad_input() {
    assert!(matches!(forecast_url("not a url", "k", "391"), Err(Error::InvalidUrl(_))));
    assert!(matches!(forecast_url("https://magicseaweed.com", "k", ""), Err(Error::InvalidUrl(_))));
  }

  #[test]
  fn test_sanitize_url() {
    let redactor = Redactor::new("secret", "https://magicseaweed.com");
    let url = forecast_url("https://magicseaweed.com", "secret", "391").unwrap();
    assert_eq!(redactor.sanitize_url(&url), "/api/<REDACTED>/forecast/?spot_id=391");
  }

  #[test]
  fn test_sanitize_url_encoded_key() {
    let redactor = Redactor::new("a b/c", "https://magicseaweed.com");
    let url = forecast_url("https://magicseaweed.com", "a b/c", "391").unwrap();
    let sanitized = redactor.sanitize_url(&url);
    assert_eq!(sanitized, "/api/<REDACTED>/forecast/?spot_id=391");
  }

  #[test]
  fn test_empty_key_redacts_nothing() {
    let redactor = Redactor::new("", "https://magicseaweed.com");
    assert_eq!(redactor.redact("/api//forecast/?spot_id=391"), "/api//forecast/?spot_id=391");
  }

  #[test]
  fn test_redact_free_text() {
    let redactor = Redactor::new("k3y", "https://magicseaweed.com");
    assert_eq!(redactor.redact("error near k3y and k3y"), "error near <REDACTED> and <REDACTED>");
  }
}

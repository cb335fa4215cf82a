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

use std::time::Duration;
use thiserror::Error;

/// The main error type for seaweed-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// A request URL could not be built or lacks a spot identifier
  #[error("Invalid URL: {0}")]
  InvalidUrl(String),

  /// Network, DNS or connection failure
  #[error("Transport error: {0}")]
  Transport(String),

  /// The caller's deadline elapsed before the transport answered
  #[error("Request cancelled: no response within {deadline:?}")]
  Cancelled { deadline: Duration },

  /// Non-200 response. `url` is always sanitized.
  #[error("GET {url} returned HTTP status code {status}")]
  UnexpectedStatus { status: u16, url: String },

  /// Error envelope delivered with HTTP 200; displays the upstream message verbatim
  #[error("{0}")]
  Api(String),

  /// Response body is not a forecast payload
  #[error("Failed to decode forecast response: {source}. Response body: {body}")]
  Decode {
    body: String,
    #[source]
    source: serde_json::Error,
  },

  /// No cache entry for the key
  #[error("Cache entry not found: {0}")]
  CacheNotFound(String),

  /// Cache entry present but unreadable
  #[error("Cache read error: {0}")]
  CacheRead(String),

  /// Cache entry could not be written
  #[error("Cache write error: {0}")]
  CacheWrite(String),

  /// General unexpected error
  #[error("Unexpected error: {0}")]
  Unexpected(String),
}

/// Result type alias for seaweed-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_displays_upstream_message_verbatim() {
    let msg = "Unable to authenticate request: Ensure your API key is passed correctly. Refer to the API docs.";
    let err = Error::Api(msg.to_string());
    assert_eq!(err.to_string(), msg);
  }

  #[test]
  fn test_unexpected_status_display() {
    let err = Error::UnexpectedStatus {
      status: 500,
      url: "/api/<REDACTED>/forecast/?spot_id=391".to_string(),
    };
    assert_eq!(
      err.to_string(),
      "GET /api/<REDACTED>/forecast/?spot_id=391 returned HTTP status code 500"
    );
  }

  #[test]
  fn test_decode_error_includes_raw_body() {
    let source = serde_json::from_str::<serde_json::Value>("{foo:").unwrap_err();
    let err = Error::Decode { body: "{foo:".to_string(), source };
    assert!(err.to_string().contains("{foo:"));
    assert!(std::error::Error::source(&err).is_some());
  }

  #[test]
  fn test_cancelled_display() {
    let err = Error::Cancelled { deadline: Duration::from_millis(250) };
    assert_eq!(err.to_string(), "Request cancelled: no response within 250ms");
  }
}

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

//! HTTP transport layer for Magic Seaweed API requests

use async_trait::async_trait;
use reqwest::Client;
use seaweed_core::{Config, Error, Result};
use std::borrow::Cow;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("seaweed-client/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: u16,
  pub body: Vec<u8>,
}

impl HttpResponse {
  pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
    Self { status, body: body.into() }
  }

  pub fn is_ok(&self) -> bool {
    self.status == 200
  }

  pub fn text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.body)
  }
}

/// Fetches the bytes behind a URL.
///
/// Any HTTP status is a successful fetch; only failures to get a response at
/// all are errors, reported as `Error::Transport`.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
  async fn get(&self, url: &Url) -> Result<HttpResponse>;
}

/// `reqwest` backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  client: Client,
  timeout: Duration,
}

impl ReqwestTransport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout())
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout: config.timeout() })
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  // reqwest errors carry the request URL, and with it the API key
  async fn get(&self, url: &Url) -> Result<HttpResponse> {
    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| Error::Transport(format!("Request failed: {}", e.without_url())))?;

    let status = response.status().as_u16();
    let body = response
      .bytes()
      .await
      .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e.without_url())))?;

    Ok(HttpResponse::new(status, body.to_vec()))
  }
}

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

//! Core types shared by the seaweed-* crates: configuration, the error type
//! and the clock capability used for every "now" in the client.

pub mod clock;
pub mod config;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the Magic Seaweed API
pub const MAGIC_SEAWEED_BASE_URL: &str = "https://magicseaweed.com";

/// Default freshness window for cached forecast responses, in seconds
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 900;

/// Default HTTP request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Marker key the API uses for error payloads delivered with HTTP 200
pub const ERROR_ENVELOPE_MARKER: &str = "error_response";

/// Replacement text for secrets in logs and error messages
pub const REDACTED: &str = "<REDACTED>";

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

//! # seaweed-models
//!
//! Data models for Magic Seaweed API responses.
//!
//! A forecast response is a JSON array of [`Forecast`] entries, one per
//! forecast interval, in chronological order. The API also reports some
//! failures with HTTP 200 and an [`ApiErrorEnvelope`] body.
//!
//! ## Usage
//!
//! ```ignore
//! use seaweed_models::{Forecast, filter_weekend};
//!
//! let forecasts: Vec<Forecast> = serde_json::from_str(&response_json)?;
//! let weekend = filter_weekend(forecasts);
//! ```

#![warn(clippy::all)]

pub mod envelope;
pub mod filter;
pub mod forecast;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use envelope::{ApiErrorEnvelope, ErrorResponse};
pub use filter::{filter_by_day, filter_weekend};
pub use forecast::*;

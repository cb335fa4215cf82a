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

//! Day and weekend subsets of a forecast sequence. Order is preserved and no
//! match is an empty vector, never an error.

use crate::forecast::Forecast;
use chrono::{DateTime, TimeZone};

/// Forecasts falling on the UTC calendar date of `reference`
pub fn filter_by_day<Tz: TimeZone>(forecasts: Vec<Forecast>, reference: &DateTime<Tz>) -> Vec<Forecast> {
  forecasts.into_iter().filter(|f| f.is_day(reference)).collect()
}

/// Forecasts falling on a Saturday or Sunday
pub fn filter_weekend(forecasts: Vec<Forecast>) -> Vec<Forecast> {
  forecasts.into_iter().filter(Forecast::is_weekend).collect()
}

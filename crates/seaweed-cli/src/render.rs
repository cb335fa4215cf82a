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

//! Plain-text rendering of forecasts.

use seaweed_models::Forecast;
use std::fmt::Write;

const MAX_STARS: i64 = 5;

/// One line per forecast, or "No forecasts" when empty
pub fn render_table(forecasts: &[Forecast]) -> String {
  if forecasts.is_empty() {
    return "No forecasts\n".to_string();
  }

  let mut out = String::new();
  for forecast in forecasts {
    let _ = writeln!(out, "{}", render_line(forecast));
  }
  out
}

/// `Sat 04 Mar 12:00  ★★☆☆☆  2-3ft  8mph E`
pub fn render_line(f: &Forecast) -> String {
  let when = match f.local_time() {
    Some(t) => t.format("%a %d %b %H:%M").to_string(),
    None => format!("@{}", f.local_timestamp),
  };

  format!(
    "{}  {}  {}-{}{}  {}{} {}",
    when,
    stars(f.solid_rating, f.faded_rating),
    f.swell.min_breaking_height,
    f.swell.max_breaking_height,
    f.swell.unit,
    f.wind.speed,
    f.wind.unit,
    f.wind.compass_direction
  )
}

// Solid stars first, then faded, padded to five.
fn stars(solid: i64, faded: i64) -> String {
  let solid = solid.clamp(0, MAX_STARS);
  let faded = faded.clamp(0, MAX_STARS - solid);
  let empty = MAX_STARS - solid - faded;

  let mut s = String::new();
  s.push_str(&"★".repeat(solid as usize));
  s.push_str(&"☆".repeat(faded as usize));
  s.push_str(&"·".repeat(empty as usize));
  s
}

#[cfg(test)]
mod tests {
  use super::*;
  use seaweed_models::{Swell, Wind};

  fn forecast() -> Forecast {
    Forecast {
      local_timestamp: 1677931200,
      solid_rating: 2,
      faded_rating: 1,
      swell: Swell {
        min_breaking_height: 2,
        max_breaking_height: 3,
        unit: "ft".to_string(),
        ..Default::default()
      },
      wind: Wind { speed: 8, unit: "mph".to_string(), compass_direction: "E".to_string(), ..Default::default() },
      ..Default::default()
    }
  }

  #[test]
  fn test_render_line() {
    assert_eq!(render_line(&forecast()), "Sat 04 Mar 12:00  ★★☆··  2-3ft  8mph E");
  }

  #[test]
  fn test_stars_are_bounded() {
    assert_eq!(stars(9, 9), "★★★★★");
    assert_eq!(stars(-1, 0), "·····");
    assert_eq!(stars(3, 4), "★★★☆☆");
  }

  #[test]
  fn test_render_empty() {
    assert_eq!(render_table(&[]), "No forecasts\n");
  }

  #[test]
  fn test_render_table_one_line_per_forecast() {
    let table = render_table(&[forecast(), forecast()]);
    assert_eq!(table.lines().count(), 2);
  }
}

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

//! Forecast entries as returned by `GET /api/{key}/forecast/?spot_id={spot}`
//!
//! Every nested structure defaults its missing fields; the API omits fields
//! freely depending on the spot and the forecast interval.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// One time-stamped forecast reading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Forecast {
  /// Issue time, Unix seconds
  pub timestamp: i64,

  /// Forecast time in the spot's local time, Unix seconds. All day matching keys on this.
  pub local_timestamp: i64,

  /// Time the forecast model run was issued, Unix seconds
  pub issue_timestamp: i64,

  /// Star rating discounted for wind (0-5)
  #[serde(alias = "FadedRating")]
  pub faded_rating: i64,

  /// Star rating from swell alone (0-5)
  #[serde(alias = "SolidRating")]
  pub solid_rating: i64,

  pub swell: Swell,

  pub wind: Wind,

  pub condition: Condition,

  /// Chart image URLs
  #[serde(skip_serializing_if = "Option::is_none")]
  pub charts: Option<Charts>,
}

/// Breaking wave heights and swell trains
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Swell {
  pub min_breaking_height: i64,
  pub abs_min_breaking_height: f64,
  pub max_breaking_height: i64,
  pub abs_max_breaking_height: f64,
  /// "ft" or "m"
  pub unit: String,
  pub components: Components,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
  pub combined: Component,
  pub primary: Component,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub secondary: Option<Component>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tertiary: Option<Component>,
}

/// A single swell train
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Component {
  pub height: f64,
  /// Seconds
  pub period: i64,
  /// Degrees
  pub direction: f64,
  pub compass_direction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wind {
  pub speed: i64,
  pub direction: i64,
  pub compass_direction: String,
  pub chill: i64,
  pub gusts: i64,
  /// "mph", "kph" or "kts"
  pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Condition {
  pub pressure: i64,
  pub temperature: i64,
  /// Weather icon code
  pub weather: String,
  /// Temperature unit, "f" or "c"
  pub unit: String,
  pub unit_pressure: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charts {
  pub swell: String,
  pub period: String,
  pub wind: String,
  pub pressure: String,
  pub sst: String,
}

impl Forecast {
  /// `local_timestamp` as a UTC instant; `None` when out of chrono's range
  pub fn local_time(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.local_timestamp, 0)
  }

  /// Calendar date of `local_timestamp` read as UTC
  pub fn local_date(&self) -> Option<NaiveDate> {
    self.local_time().map(|t| t.date_naive())
  }

  /// True if the forecast falls on `date`
  pub fn is_on(&self, date: NaiveDate) -> bool {
    self.local_date() == Some(date)
  }

  /// True if the forecast falls on the same UTC calendar date as `reference`.
  ///
  /// Year, month and day are all compared; the reference is converted to UTC first.
  pub fn is_day<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> bool {
    self.is_on(reference.with_timezone(&Utc).date_naive())
  }

  /// True if the forecast falls on a Saturday or Sunday (UTC)
  pub fn is_weekend(&self) -> bool {
    matches!(self.local_time().map(|t| t.weekday()), Some(Weekday::Sat | Weekday::Sun))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixtures;
  use chrono::{Days, FixedOffset};

  #[test]
  fn test_forecast_parsing() {
    let forecasts: Vec<Forecast> = serde_json::from_str(fixtures::SINGLE_FORECAST_JSON).unwrap();
    assert_eq!(forecasts.len(), 1);

    let f = &forecasts[0];
    assert_eq!(f.timestamp, 1443592800);
    assert_eq!(f.local_timestamp, 1443571200);
    assert_eq!(f.faded_rating, 3);
    assert_eq!(f.solid_rating, 0);
    assert_eq!(f.swell.max_breaking_height, 8);
    assert_eq!(f.swell.abs_min_breaking_height, 4.88);
    assert_eq!(f.swell.unit, "ft");
    assert_eq!(f.swell.components.primary.direction, 309.5);
    assert_eq!(f.swell.components.combined.compass_direction, "SE");
    assert!(f.swell.components.secondary.is_none());
    assert_eq!(f.wind.speed, 13);
    assert_eq!(f.wind.compass_direction, "SSE");
    assert_eq!(f.wind.gusts, 27);
    assert_eq!(f.condition.pressure, 1008);
    assert_eq!(f.condition.weather, "22");
    assert_eq!(f.condition.unit, "f");
    assert_eq!(f.condition.unit_pressure, "mb");
    let charts = f.charts.as_ref().unwrap();
    assert!(charts.sst.ends_with("20-1443592800-10.gif"));
  }

  #[test]
  fn test_capitalised_rating_keys() {
    let f: Forecast =
      serde_json::from_str(r#"{"localTimestamp":1,"FadedRating":2,"SolidRating":4}"#).unwrap();
    assert_eq!(f.faded_rating, 2);
    assert_eq!(f.solid_rating, 4);
    assert_eq!(f.swell, Swell::default());
  }

  #[test]
  fn test_cached_body_round_trip() {
    let original: Vec<Forecast> = serde_json::from_str(&fixtures::three_day_json()).unwrap();
    let cached = serde_json::to_vec(&original).unwrap();
    let restored: Vec<Forecast> = serde_json::from_slice(&cached).unwrap();
    assert_eq!(restored, original);
  }

  #[test]
  fn test_forecast_is_weekend() {
    let saturday = Forecast { local_timestamp: 1677973254, ..Default::default() };
    assert!(saturday.is_weekend());

    let sunday = Forecast { local_timestamp: 1678059654, ..Default::default() };
    assert!(sunday.is_weekend());

    let friday = Forecast { local_timestamp: 1677886854, ..Default::default() };
    assert!(!friday.is_weekend());
  }

  #[test]
  fn test_forecast_is_day() {
    let ts = 1677973254;
    let f = Forecast { local_timestamp: ts, ..Default::default() };

    let today = DateTime::from_timestamp(ts, 0).unwrap();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

    assert!(f.is_day(&today));
    assert_eq!(f.is_day(&today), f.is_day(&today));
    assert!(!f.is_day(&tomorrow));
  }

  #[test]
  fn test_is_day_compares_full_date() {
    // 4 March 2023 against 4 February and 4 March 2022
    let f = Forecast { local_timestamp: 1677931200, ..Default::default() };
    let other_month = Utc.with_ymd_and_hms(2023, 2, 4, 12, 0, 0).unwrap();
    let other_year = Utc.with_ymd_and_hms(2022, 3, 4, 12, 0, 0).unwrap();
    assert!(!f.is_day(&other_month));
    assert!(!f.is_day(&other_year));
  }

  #[test]
  fn test_is_day_projects_reference_to_utc() {
    // 2023-03-05 01:00 at UTC+02:00 is 2023-03-04 23:00 UTC
    let f = Forecast { local_timestamp: 1677931200, ..Default::default() };
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let reference = offset.with_ymd_and_hms(2023, 3, 5, 1, 0, 0).unwrap();
    assert!(f.is_day(&reference));
  }

  #[test]
  fn test_out_of_range_timestamp_never_matches() {
    let f = Forecast { local_timestamp: i64::MAX, ..Default::default() };
    assert!(f.local_time().is_none());
    assert!(!f.is_weekend());
    assert!(!f.is_day(&Utc::now()));
  }
}

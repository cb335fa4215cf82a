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

//! Canned API payloads for tests.

use serde_json::json;

/// Friday 3 March 2023, 12:00 UTC
pub const FRIDAY_NOON: i64 = 1677844800;
/// Saturday 4 March 2023, 12:00 UTC
pub const SATURDAY_NOON: i64 = 1677931200;
/// Sunday 5 March 2023, 12:00 UTC
pub const SUNDAY_NOON: i64 = 1678017600;

/// A real single-entry response for spot 391
pub const SINGLE_FORECAST_JSON: &str = r#"
  [{
    "timestamp":1443592800,
    "localTimestamp":1443571200,
    "issueTimestamp":1443592800,
    "fadedRating":3,
    "solidRating":0,
    "swell":{
      "minBreakingHeight":5,
      "absMinBreakingHeight":4.88,
      "maxBreakingHeight":8,
      "absMaxBreakingHeight":7.63,
      "unit":"ft",
      "components":{
        "combined":{
          "height":7.5,
          "period":10,
          "direction":305.22,
          "compassDirection":"SE"
        },
        "primary":{
          "height":7.5,
          "period":10,
          "direction":309.5,
          "compassDirection":"SE"
        }
      }
    },
    "wind":{
      "speed":13,
      "direction":337,
      "compassDirection":"SSE",
      "chill":74,
      "gusts":27,
      "unit":"mph"
    },
    "condition":{
      "pressure":1008,
      "temperature":73,
      "weather":"22",
      "unitPressure":"mb",
      "unit":"f"
    },
    "charts":{
      "swell":"http:\/\/hist-2.msw.ms\/wave\/750\/20-1443592800-1.gif",
      "period":"http:\/\/hist-2.msw.ms\/wave\/750\/20-1443592800-2.gif",
      "wind":"http:\/\/hist-2.msw.ms\/gfs\/750\/20-1443592800-4.gif",
      "pressure":"http:\/\/hist-2.msw.ms\/gfs\/750\/20-1443592800-3.gif",
      "sst":"http:\/\/hist-2.msw.ms\/sst\/750\/20-1443592800-10.gif"
    }
  }]"#;

/// The upstream's reply to a missing or wrong API key
pub const AUTH_ERROR_MESSAGE: &str =
  "Unable to authenticate request: Ensure your API key is passed correctly. Refer to the API docs.";

/// Error envelope carrying [`AUTH_ERROR_MESSAGE`]
pub fn auth_error_json() -> String {
  json!({ "error_response": { "code": 501, "error_msg": AUTH_ERROR_MESSAGE } }).to_string()
}

/// A response with one entry per local timestamp, in the order given
pub fn forecast_json(local_timestamps: &[i64]) -> String {
  let entries: Vec<_> = local_timestamps
    .iter()
    .enumerate()
    .map(|(i, ts)| {
      json!({
        "timestamp": ts + 18000,
        "localTimestamp": ts,
        "issueTimestamp": 1677823200,
        "fadedRating": i % 4,
        "solidRating": (i + 1) % 5,
        "swell": {
          "minBreakingHeight": 2,
          "absMinBreakingHeight": 2.1,
          "maxBreakingHeight": 3,
          "absMaxBreakingHeight": 3.4,
          "unit": "ft",
          "components": {
            "combined": { "height": 4.5, "period": 9, "direction": 120.5, "compassDirection": "NW" },
            "primary": { "height": 4.0, "period": 9, "direction": 118.0, "compassDirection": "NW" },
            "secondary": { "height": 1.5, "period": 6, "direction": 80.0, "compassDirection": "W" }
          }
        },
        "wind": {
          "speed": 8 + i,
          "direction": 270,
          "compassDirection": "E",
          "chill": 41,
          "gusts": 14,
          "unit": "mph"
        },
        "condition": {
          "pressure": 1016,
          "temperature": 45,
          "weather": "10",
          "unit": "f",
          "unitPressure": "mb"
        }
      })
    })
    .collect();
  serde_json::Value::Array(entries).to_string()
}

/// Friday, Saturday and Sunday noon
pub fn three_day_json() -> String {
  forecast_json(&[FRIDAY_NOON, SATURDAY_NOON, SUNDAY_NOON])
}

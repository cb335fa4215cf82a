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

//! The error body the API sends with HTTP 200.

use serde::{Deserialize, Serialize};

/// `{"error_response": {"code": 501, "error_msg": "..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
  pub error_response: ErrorResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Upstream error code
  pub code: i64,
  /// Human readable message, surfaced to callers unchanged
  pub error_msg: String,
}

impl ApiErrorEnvelope {
  pub fn message(&self) -> &str {
    &self.error_response.error_msg
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_envelope_parsing() {
    let body = r#"{"error_response":{"code":501,"error_msg":"Unable to authenticate request: Ensure your API key is passed correctly. Refer to the API docs."}}"#;
    let envelope: ApiErrorEnvelope = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.error_response.code, 501);
    assert_eq!(
      envelope.message(),
      "Unable to authenticate request: Ensure your API key is passed correctly. Refer to the API docs."
    );
  }

  #[test]
  fn test_forecast_array_is_not_an_envelope() {
    let body = r#"[{"localTimestamp":1,"condition":{"weather":"error_response"}}]"#;
    assert!(serde_json::from_str::<ApiErrorEnvelope>(body).is_err());
  }
}

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

//! Subscriber setup for binaries and examples.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset: `debug` when verbose, `info` when
/// request logging is on, `warn` otherwise.
pub fn default_level(verbose: bool, log_requests: bool) -> &'static str {
  if verbose {
    "debug"
  } else if log_requests {
    "info"
  } else {
    "warn"
  }
}

/// Install a fmt subscriber writing to stderr. `RUST_LOG` wins over
/// [`default_level`].
///
/// Returns false if a global subscriber was already set.
pub fn init_logging(verbose: bool, log_requests: bool) -> bool {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, log_requests)));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_writer(std::io::stderr)
    .try_init()
    .is_ok()
}

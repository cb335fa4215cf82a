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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seaweed_client::{logging::init_logging, SeaweedClient};
use seaweed_models::Forecast;
use std::path::PathBuf;
use tracing::debug;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "seaweed")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Bypass the response cache
  #[arg(long, global = true)]
  no_cache: bool,

  /// Print raw forecasts as JSON
  #[arg(long, global = true)]
  json: bool,

  /// API base URL
  #[arg(long, global = true, env = "SEAWEED_BASE_URL")]
  base_url: Option<String>,

  /// Directory for cached responses
  #[arg(long, global = true, env = "SEAWEED_CACHE_DIR")]
  cache_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Full multi-day forecast
  Forecast { spot: String },
  /// Today's forecasts (UTC)
  Today { spot: String },
  /// Tomorrow's forecasts (UTC)
  Tomorrow { spot: String },
  /// Saturday and Sunday forecasts
  Weekend { spot: String },
}

#[tokio::main]
async fn main() -> Result<()> {
  // Parse CLI arguments
  let cli = Cli::parse();

  // Load configuration (.env first), flags win over the environment
  let mut config = seaweed_core::Config::from_env().context("Failed to load configuration")?;
  if let Some(base_url) = cli.base_url {
    config = config.with_base_url(base_url);
  }
  if let Some(cache_dir) = cli.cache_dir {
    config = config.with_cache_dir(cache_dir);
  }
  if cli.no_cache {
    config = config.with_cache_disabled(true);
  }
  if cli.verbose {
    config = config.with_log_requests(true);
  }

  // Initialize logging
  init_logging(cli.verbose, config.log_requests);
  debug!(?config, "Loaded configuration");

  // Execute command
  let client = SeaweedClient::new(config).context("Failed to create client")?;

  let (spot, forecasts) = match &cli.command {
    Commands::Forecast { spot } => (spot, client.forecast(spot).await),
    Commands::Today { spot } => (spot, client.today(spot).await),
    Commands::Tomorrow { spot } => (spot, client.tomorrow(spot).await),
    Commands::Weekend { spot } => (spot, client.weekend(spot).await),
  };
  let forecasts: Vec<Forecast> =
    forecasts.with_context(|| format!("Failed to fetch forecast for spot {}", spot))?;

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&forecasts)?);
  } else {
    print!("{}", render::render_table(&forecasts));
  }

  Ok(())
}

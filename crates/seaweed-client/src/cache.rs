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

//! Response cache for forecast bodies.
//!
//! One entry per request, no size bound and no eviction. An entry is replaced
//! whenever a fresh response is fetched; its age is the only invalidation
//! signal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seaweed_client::cache::{CacheKey, CacheStore, FileCache};
//!
//! let cache = FileCache::new(std::env::temp_dir());
//! let key = CacheKey::from_url(&url)?;
//!
//! if cache.is_stale(&key, max_age, now).await {
//!     cache.put(&key, &body, now).await?;
//! }
//! let body = cache.get(&key).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use seaweed_core::{Error, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{Duration, SystemTime};
use tempfile::NamedTempFile;
use url::Url;

use crate::endpoints::SPOT_ID_PARAM;

const KEY_PREFIX: &str = "seaweed";
const MAX_SPOT_CHARS: usize = 64;

/// Identifies one cached response.
///
/// Built from the request URL: the readable part is the spot identifier, the
/// suffix is a SHA-256 digest of the whole URL. Two clients sharing a cache
/// directory with different API keys or base URLs therefore never share an
/// entry, and the key itself never reveals the API key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
  pub fn from_url(url: &Url) -> Result<Self> {
    let spot = url
      .query_pairs()
      .find(|(name, _)| name == SPOT_ID_PARAM)
      .map(|(_, value)| value.into_owned())
      .ok_or_else(|| Error::InvalidUrl(format!("request URL has no {} parameter", SPOT_ID_PARAM)))?;

    let readable: String = spot
      .chars()
      .take(MAX_SPOT_CHARS)
      .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
      .collect();

    let digest = Sha256::digest(url.as_str().as_bytes());

    Ok(CacheKey(format!("{}_{}_{}", KEY_PREFIX, readable, hex::encode(&digest[..8]))))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for CacheKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

/// Storage for raw response bodies.
#[async_trait]
pub trait CacheStore: Send + Sync + std::fmt::Debug {
  /// Body stored under `key`, fresh or not. `Error::CacheNotFound` when absent.
  async fn get(&self, key: &CacheKey) -> Result<Vec<u8>>;

  /// Replace the entry under `key`, recording `modified` as its modification time.
  async fn put(&self, key: &CacheKey, body: &[u8], modified: DateTime<Utc>) -> Result<()>;

  /// True when there is no entry or it was modified more than `max_age` before `now`.
  async fn is_stale(&self, key: &CacheKey, max_age: Duration, now: DateTime<Utc>) -> bool;
}

/// Age check shared by the stores. An mtime ahead of `now` counts as fresh.
pub fn is_expired(modified: DateTime<Utc>, max_age: Duration, now: DateTime<Utc>) -> bool {
  match now.signed_duration_since(modified).to_std() {
    Ok(age) => age > max_age,
    Err(_) => false,
  }
}

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FileCache {
  dir: PathBuf,
}

impl FileCache {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// `{dir}/{key}.json`
  pub fn path_for(&self, key: &CacheKey) -> PathBuf {
    self.dir.join(format!("{}.json", key))
  }
}

#[async_trait]
impl CacheStore for FileCache {
  async fn get(&self, key: &CacheKey) -> Result<Vec<u8>> {
    let path = self.path_for(key);
    tokio::fs::read(&path).await.map_err(|e| match e.kind() {
      std::io::ErrorKind::NotFound => Error::CacheNotFound(path.display().to_string()),
      _ => Error::CacheRead(format!("{}: {}", path.display(), e)),
    })
  }

  async fn put(&self, key: &CacheKey, body: &[u8], modified: DateTime<Utc>) -> Result<()> {
    let dir = self.dir.clone();
    let path = self.path_for(key);
    let body = body.to_vec();

    tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &body, modified))
      .await
      .map_err(|e| Error::CacheWrite(format!("cache write task failed: {}", e)))?
  }

  async fn is_stale(&self, key: &CacheKey, max_age: Duration, now: DateTime<Utc>) -> bool {
    match tokio::fs::metadata(self.path_for(key)).await.and_then(|m| m.modified()) {
      Ok(mtime) => is_expired(DateTime::<Utc>::from(mtime), max_age, now),
      Err(_) => true,
    }
  }
}

// Temp file in the target directory, then rename over the entry: readers see
// the old body or the new one, never a partial write.
fn write_atomically(dir: &Path, path: &Path, body: &[u8], modified: DateTime<Utc>) -> Result<()> {
  let fail = |e: std::io::Error| Error::CacheWrite(format!("{}: {}", path.display(), e));

  std::fs::create_dir_all(dir).map_err(fail)?;

  let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
  tmp.write_all(body).map_err(fail)?;
  tmp.as_file().set_modified(SystemTime::from(modified)).map_err(fail)?;
  tmp.persist(path).map_err(|e| fail(e.error))?;

  Ok(())
}

/// In-process store, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryCache {
  entries: RwLock<HashMap<CacheKey, (Vec<u8>, DateTime<Utc>)>>,
}

impl MemoryCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.read().map(|e| e.len()).unwrap_or(0)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Modification time recorded for `key`
  pub fn modified(&self, key: &CacheKey) -> Option<DateTime<Utc>> {
    self.entries.read().ok()?.get(key).map(|(_, modified)| *modified)
  }
}

#[async_trait]
impl CacheStore for MemoryCache {
  async fn get(&self, key: &CacheKey) -> Result<Vec<u8>> {
    let entries = self.entries.read().map_err(|_| Error::CacheRead("cache lock poisoned".to_string()))?;
    entries
      .get(key)
      .map(|(body, _)| body.clone())
      .ok_or_else(|| Error::CacheNotFound(key.to_string()))
  }

  async fn put(&self, key: &CacheKey, body: &[u8], modified: DateTime<Utc>) -> Result<()> {
    let mut entries =
      self.entries.write().map_err(|_| Error::CacheWrite("cache lock poisoned".to_string()))?;
    entries.insert(key.clone(), (body.to_vec(), modified));
    Ok(())
  }

  async fn is_stale(&self, key: &CacheKey, max_age: Duration, now: DateTime<Utc>) -> bool {
    match self.modified(key) {
      Some(modified) => is_expired(modified, max_age, now),
      None => true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::forecast_url;
  use chrono::TimeZone;

  const MAX_AGE: Duration = Duration::from_secs(300);

  fn key(api_key: &str, spot: &str) -> CacheKey {
    CacheKey::from_url(&forecast_url("https://magicseaweed.com", api_key, spot).unwrap()).unwrap()
  }

  fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 3, 4, 12, 0, 0).unwrap()
  }

  #[test]
  fn test_key_is_stable() {
    assert_eq!(key("k", "391"), key("k", "391"));
    assert!(key("k", "391").as_str().starts_with("seaweed_391_"));
  }

  #[test]
  fn test_key_distinguishes_spots_and_api_keys() {
    assert_ne!(key("k", "391"), key("k", "392"));
    assert_ne!(key("k1", "391"), key("k2", "391"));
    // same readable part after sanitising
    assert_ne!(key("k", "a/b"), key("k", "a-b"));
  }

  #[test]
  fn test_key_is_filesystem_safe_and_hides_api_key() {
    let k = key("my_secret_key", "../etc/passwd");
    assert!(k.as_str().chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert!(!k.as_str().contains("my_secret_key"));
  }

  #[test]
  fn test_key_requires_spot_id() {
    let url = Url::parse("https://magicseaweed.com/api/k/forecast/").unwrap();
    assert!(matches!(CacheKey::from_url(&url), Err(Error::InvalidUrl(_))));
  }

  #[test]
  fn test_is_expired_monotonic_in_age() {
    let now = noon();
    let ages = [0, 60, 299, 300, 301, 600, 86_400];
    let stale: Vec<bool> = ages
      .iter()
      .map(|secs| is_expired(now - chrono::Duration::seconds(*secs), MAX_AGE, now))
      .collect();
    assert_eq!(stale, vec![false, false, false, false, true, true, true]);
  }

  #[test]
  fn test_future_mtime_is_fresh() {
    let now = noon();
    assert!(!is_expired(now + chrono::Duration::seconds(30), MAX_AGE, now));
  }

  #[tokio::test]
  async fn test_memory_cache_round_trip() {
    let cache = MemoryCache::new();
    let k = key("k", "391");

    assert!(cache.is_stale(&k, MAX_AGE, noon()).await);
    assert!(matches!(cache.get(&k).await, Err(Error::CacheNotFound(_))));

    cache.put(&k, b"[]", noon()).await.unwrap();
    assert_eq!(cache.get(&k).await.unwrap(), b"[]".to_vec());
    assert_eq!(cache.len(), 1);
    assert!(!cache.is_stale(&k, MAX_AGE, noon() + chrono::Duration::seconds(299)).await);
    assert!(cache.is_stale(&k, MAX_AGE, noon() + chrono::Duration::seconds(301)).await);
  }

  #[tokio::test]
  async fn test_memory_cache_stale_entry_still_readable() {
    let cache = MemoryCache::new();
    let k = key("k", "391");
    cache.put(&k, b"[1]", noon()).await.unwrap();

    let much_later = noon() + chrono::Duration::days(3);
    assert!(cache.is_stale(&k, MAX_AGE, much_later).await);
    assert_eq!(cache.get(&k).await.unwrap(), b"[1]".to_vec());
  }

  #[tokio::test]
  async fn test_file_cache_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());
    let k = key("k", "391");

    assert!(cache.is_stale(&k, MAX_AGE, noon()).await);
    assert!(matches!(cache.get(&k).await, Err(Error::CacheNotFound(_))));

    cache.put(&k, b"[{\"localTimestamp\":1}]", noon()).await.unwrap();
    assert!(cache.path_for(&k).exists());
    assert_eq!(cache.get(&k).await.unwrap(), b"[{\"localTimestamp\":1}]".to_vec());
  }

  #[tokio::test]
  async fn test_file_cache_uses_supplied_mtime() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());
    let k = key("k", "391");

    cache.put(&k, b"[]", noon()).await.unwrap();

    assert!(!cache.is_stale(&k, MAX_AGE, noon() + chrono::Duration::seconds(10)).await);
    assert!(cache.is_stale(&k, MAX_AGE, noon() + chrono::Duration::seconds(301)).await);
  }

  #[tokio::test]
  async fn test_file_cache_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());
    let k = key("k", "391");

    cache.put(&k, b"[1]", noon()).await.unwrap();
    cache.put(&k, b"[2]", noon() + chrono::Duration::minutes(10)).await.unwrap();

    assert_eq!(cache.get(&k).await.unwrap(), b"[2]".to_vec());
    assert!(!cache.is_stale(&k, MAX_AGE, noon() + chrono::Duration::minutes(11)).await);
    // only the entry itself is left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_file_cache_reads_during_writes_see_whole_bodies() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path());
    let k = key("k", "391");

    let small = vec![b'a'; 16 * 1024];
    let large = vec![b'b'; 512 * 1024];
    cache.put(&k, &small, noon()).await.unwrap();

    let writes = async {
      for i in 0..40 {
        let body = if i % 2 == 0 { &large } else { &small };
        cache.put(&k, body, noon()).await.unwrap();
      }
    };
    let reads = async {
      for _ in 0..200 {
        let body = cache.get(&k).await.unwrap();
        assert!(body == small || body == large, "torn read of {} bytes", body.len());
      }
    };

    tokio::join!(writes, reads);
  }

  #[tokio::test]
  async fn test_file_cache_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let cache = FileCache::new(dir.path().join("nested").join("cache"));
    let k = key("k", "391");

    cache.put(&k, b"[]", noon()).await.unwrap();
    assert_eq!(cache.get(&k).await.unwrap(), b"[]".to_vec());
  }

  #[tokio::test]
  async fn test_file_cache_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();
    let cache = FileCache::new(&blocker);

    let result = cache.put(&key("k", "391"), b"[]", noon()).await;
    assert!(matches!(result, Err(Error::CacheWrite(_))));
  }
}

//! Persistent font payload cache
//!
//! String keys to binary payloads. Entries are never evicted or expired;
//! writing a key twice with the same payload is a no-op in effect.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Cache error
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid cache key: '{0}'")]
    InvalidKey(String),
}

/// Key-value store for font payloads.
///
/// Implementations must make `set` idempotent and order-independent for
/// identical keys: concurrent loads may race on the same key.
pub trait FontCache: Send + Sync {
    /// Stored payload, or `None` when the key was never written
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>, CacheError>> + Send;

    /// Store a payload and hand it back
    fn set(&self, key: &str, payload: Vec<u8>) -> impl Future<Output = Result<Vec<u8>, CacheError>> + Send;
}

impl<T: FontCache> FontCache for Arc<T> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>, CacheError>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, payload: Vec<u8>) -> impl Future<Output = Result<Vec<u8>, CacheError>> + Send {
        (**self).set(key, payload)
    }
}

// ============================================================================
// In-memory cache
// ============================================================================

/// Process-local cache. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FontCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, payload: Vec<u8>) -> Result<Vec<u8>, CacheError> {
        self.lock().insert(key.to_string(), payload.clone());
        Ok(payload)
    }
}

// ============================================================================
// On-disk cache
// ============================================================================

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One file per key under a root directory. Survives restarts.
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    /// Use `root` as the cache directory. Created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(cache_file_name(key)))
    }
}

/// File name for a cache key. Bytes outside `[A-Za-z0-9_-]` are
/// percent-escaped so keys never leave the cache directory.
pub fn cache_file_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 5);
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            name.push(byte as char);
        } else {
            name.push_str(&format!("%{byte:02X}"));
        }
    }
    name.push_str(".font");
    name
}

impl FontCache for DiskCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key)?;
        match smol::fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Io { key: key.to_string(), source }),
        }
    }

    async fn set(&self, key: &str, payload: Vec<u8>) -> Result<Vec<u8>, CacheError> {
        let path = self.path_for(key)?;
        let io_err = |source| CacheError::Io { key: key.to_string(), source };

        smol::fs::create_dir_all(&self.root).await.map_err(io_err)?;

        // Write aside then rename, so readers never see a partial file
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp = path.with_extension(format!("tmp{}-{n}", std::process::id()));
        smol::fs::write(&tmp, &payload).await.map_err(io_err)?;
        if let Err(source) = smol::fs::rename(&tmp, &path).await {
            let _ = smol::fs::remove_file(&tmp).await;
            return Err(io_err(source));
        }

        tracing::debug!(key, bytes = payload.len(), "cached font payload");
        Ok(payload)
    }
}

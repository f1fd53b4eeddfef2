//! Font loading session
//!
//! A `Session` owns the injection registry and handles to the cache, the
//! fetcher and the render target. One batch runs in three phases:
//!
//! 1. Sequential scan in input order: record every weight that has a file
//!    URL and queue the ones whose family is not injected yet.
//! 2. Cache-or-fetch for every queued weight, concurrently.
//! 3. Finalize every face concurrently, then register it.
//!
//! The registry is consulted during the scan only, so a family that is not
//! injected yet gets all of its weights loaded within one batch.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use fdk_catalog::Weight;
use fdk_net::{FontCache, FontFetcher};
use fdk_text::{FontFaceDescriptor, FontWeight, RenderTarget};
use futures::future::try_join_all;

use crate::{ExplorerFont, LoadError, Result};

/// Cache key for a family and weight, e.g. `Noto_Sans_400`
pub fn cache_key(family: &str, weight: Weight) -> String {
    format!("{family}_{}", weight.label())
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Identifier a family is injected under. Some targets only match
/// multi-word names when quoted; those get every name quoted.
pub fn family_identifier(family: &str, quoted: bool) -> String {
    if quoted {
        format!("\"{family}\"")
    } else {
        family.to_string()
    }
}

/// Cumulative payload counters. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Payloads fetched from the network
    pub fetched: usize,
    /// Payloads served from the cache
    pub cache_hits: usize,
}

/// One weight queued during the scan
struct PendingFace {
    family: String,
    weight: Weight,
    url: String,
    key: String,
}

#[derive(Clone, Copy)]
enum PayloadSource {
    Cache,
    Network,
}

/// Caller-owned loading context
pub struct Session<C, F, R> {
    cache: C,
    fetcher: F,
    target: R,
    injected: Mutex<HashSet<String>>,
    fetched: AtomicUsize,
    cache_hits: AtomicUsize,
}

impl<C, F, R> Session<C, F, R>
where
    C: FontCache,
    F: FontFetcher,
    R: RenderTarget,
{
    /// Start a session with an empty injection registry
    pub fn new(cache: C, fetcher: F, target: R) -> Self {
        Self {
            cache,
            fetcher,
            target,
            injected: Mutex::new(HashSet::new()),
            fetched: AtomicUsize::new(0),
            cache_hits: AtomicUsize::new(0),
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    fn registry(&self) -> MutexGuard<'_, HashSet<String>> {
        self.injected.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a family identifier has been injected in this session
    pub fn is_injected(&self, identifier: &str) -> bool {
        self.registry().contains(identifier)
    }

    /// Number of injected family identifiers
    pub fn injected_count(&self) -> usize {
        self.registry().len()
    }

    pub fn stats(&self) -> LoadStats {
        LoadStats {
            fetched: self.fetched.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }

    /// Load a batch and collapse any failure into an empty result.
    ///
    /// Callers can only tell "nothing requested" from "batch failed" through
    /// the error log. Use [`Session::try_load_fonts`] to get the error.
    pub async fn load_fonts(&self, fonts: Vec<ExplorerFont>) -> Vec<ExplorerFont> {
        collapse_batch_failure(self.try_load_fonts(fonts).await)
    }

    /// Load a batch. Returns the fonts in input order with `loaded_weights`
    /// filled in, or the first error hit by any weight.
    pub async fn try_load_fonts(&self, mut fonts: Vec<ExplorerFont>) -> Result<Vec<ExplorerFont>> {
        let started = Instant::now();
        let quoted = self.target.quotes_family_names();

        let mut pending = Vec::new();
        for font in &mut fonts {
            let family = family_identifier(&font.font.family, quoted);
            for weight in Weight::ALL {
                let Some(url) = font.font.url(weight).map(str::to_string) else {
                    continue;
                };

                font.loaded_weights.push(weight);

                if self.is_injected(&family) {
                    continue;
                }

                pending.push(PendingFace {
                    family: family.clone(),
                    weight,
                    key: cache_key(&font.font.family, weight),
                    url,
                });
            }
        }

        let prepared = try_join_all(pending.iter().map(|p| self.prepare(p))).await?;

        let mut fetched = 0;
        let mut cache_hits = 0;
        let mut faces = Vec::with_capacity(prepared.len());
        for (face, source) in prepared {
            match source {
                PayloadSource::Network => fetched += 1,
                PayloadSource::Cache => cache_hits += 1,
            }
            faces.push(face);
        }
        self.fetched.fetch_add(fetched, Ordering::Relaxed);
        self.cache_hits.fetch_add(cache_hits, Ordering::Relaxed);

        try_join_all(faces.into_iter().map(|face| self.inject(face))).await?;

        tracing::debug!(
            fonts = fonts.len(),
            fetched,
            cache_hits,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "font batch loaded"
        );

        Ok(fonts)
    }

    /// Cache-or-fetch one payload and wrap it in a face descriptor
    async fn prepare(&self, pending: &PendingFace) -> Result<(FontFaceDescriptor, PayloadSource)> {
        let cache_err = |source| LoadError::Cache {
            key: pending.key.clone(),
            source,
        };

        let cached = self.cache.get(&pending.key).await.map_err(cache_err)?;

        let (data, source) = match cached {
            Some(data) => (data, PayloadSource::Cache),
            None => {
                let body = self
                    .fetcher
                    .fetch(&pending.url)
                    .await
                    .map_err(|source| LoadError::Fetch {
                        url: pending.url.clone(),
                        source,
                    })?;
                let data = self.cache.set(&pending.key, body).await.map_err(cache_err)?;
                (data, PayloadSource::Network)
            }
        };

        let weight = FontWeight(pending.weight.value());
        Ok((FontFaceDescriptor::new(pending.family.clone(), weight, data), source))
    }

    /// Finalize a face, record its family and hand it to the target
    async fn inject(&self, face: FontFaceDescriptor) -> Result<()> {
        let family = face.family.clone();
        let weight = face.weight.0;

        let face = self
            .target
            .finalize(face)
            .await
            .map_err(|source| LoadError::Finalize { family, weight, source })?;

        self.registry().insert(face.family.clone());
        self.target.add(face);
        Ok(())
    }
}

/// All-or-nothing batch policy: a failed batch yields no fonts, even the
/// ones that loaded.
fn collapse_batch_failure(result: Result<Vec<ExplorerFont>>) -> Vec<ExplorerFont> {
    match result {
        Ok(fonts) => fonts,
        Err(e) => {
            tracing::error!(error = %e, "could not load fonts, discarding batch");
            Vec::new()
        }
    }
}

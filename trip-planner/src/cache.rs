//! Memoised itinerary analysis.
//!
//! Analysis is cheap for trips of a few dozen items, so callers normally
//! just re-run the detector after each change. When the same unchanged trip
//! is analysed over and over (every page load, say), `CachedDetector`
//! returns the previous result for an identical input instead.
//!
//! Entries are keyed by a fingerprint of the full item set and the detector
//! configuration, so any edit to any item produces a fresh analysis. Each
//! entry keeps the items it was computed from and a hit is only served when
//! they match the request exactly.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::{debug, trace};

use crate::domain::ItineraryItem;
use crate::planner::{DetectError, Detector, DetectorConfig, ItineraryAnalysis};

/// Cache key: hash of (config, items in input order).
type AnalysisKey = u64;

/// Cached analysis together with the input it was computed from.
#[derive(Debug)]
pub struct AnalysisEntry {
    items: Vec<ItineraryItem>,
    analysis: Arc<ItineraryAnalysis>,
}

impl AnalysisEntry {
    fn new(items: &[ItineraryItem], analysis: Arc<ItineraryAnalysis>) -> Self {
        Self {
            items: items.to_vec(),
            analysis,
        }
    }

    /// Returns true if this entry was computed from exactly `items`.
    ///
    /// `DateTime` equality ignores the offset, so offsets are compared too.
    fn matches(&self, items: &[ItineraryItem]) -> bool {
        self.items.len() == items.len()
            && self.items.iter().zip(items).all(|(a, b)| {
                a == b
                    && a.start_date_time.offset() == b.start_date_time.offset()
                    && a.end_date_time.offset() == b.end_date_time.offset()
            })
    }
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache of analyses keyed by input fingerprint.
pub struct AnalysisCache {
    entries: MokaCache<AnalysisKey, Arc<AnalysisEntry>>,
}

impl AnalysisCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Get a cached analysis.
    pub fn get(&self, key: &AnalysisKey) -> Option<Arc<AnalysisEntry>> {
        self.entries.get(key)
    }

    /// Insert an analysis into the cache.
    pub fn insert(&self, key: AnalysisKey, entry: Arc<AnalysisEntry>) {
        self.entries.insert(key, entry);
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

/// Detector with memoised results.
///
/// Wraps a `Detector` and caches its output per distinct input.
pub struct CachedDetector {
    detector: Detector,
    cache: AnalysisCache,
}

impl CachedDetector {
    /// Create a new cached detector.
    pub fn new(detector: Detector, cache_config: &CacheConfig) -> Self {
        Self {
            detector,
            cache: AnalysisCache::new(cache_config),
        }
    }

    /// Analyse items, reusing a cached result for identical input.
    ///
    /// Errors are not cached.
    pub fn analyze(
        &self,
        items: &[ItineraryItem],
    ) -> Result<Arc<ItineraryAnalysis>, DetectError> {
        let key = fingerprint(self.detector.config(), items);

        if let Some(cached) = self.cache.get(&key) {
            if cached.matches(items) {
                trace!(key, "analysis cache hit");
                return Ok(cached.analysis.clone());
            }
            debug!(key, "analysis cache key collision, recomputing");
        }

        let analysis = Arc::new(self.detector.analyze(items)?);
        self.cache
            .insert(key, Arc::new(AnalysisEntry::new(items, analysis.clone())));

        Ok(analysis)
    }

    /// Access the underlying detector, bypassing the cache.
    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

/// Fingerprint a detector input.
///
/// `DateTime` hashes only the instant, so offsets are hashed separately:
/// the same instant in another offset can land on a different local date
/// and change the suggested remedy.
fn fingerprint(config: &DetectorConfig, items: &[ItineraryItem]) -> AnalysisKey {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    items.len().hash(&mut hasher);
    for item in items {
        item.hash(&mut hasher);
        item.start_date_time.offset().local_minus_utc().hash(&mut hasher);
        item.end_date_time.offset().local_minus_utc().hash(&mut hasher);
    }
    hasher.finish()
}

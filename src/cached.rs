//! Cached host decomposer with hot reload support.
//!
//! This module provides a decomposer for long-running services with:
//! - LRU cache for decomposition results
//! - Atomic rule-set replacement without blocking readers
//! - Thread-safe concurrent access

use arc_swap::ArcSwap;
use quick_cache::sync::Cache;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::decompose::{decompose_with_options, Decomposition, HostDecomposer};
use crate::rule::MatchOptions;
use crate::ruleset::LoadOptions;
use crate::{Result, RuleSet};

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Configuration for the cached decomposer.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache.
    pub capacity: usize,
    /// Whether to enable caching.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            enabled: true,
        }
    }
}

impl CacheConfig {
    /// Create a new configuration with the specified cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            enabled: true,
        }
    }

    /// Create a configuration with caching disabled.
    pub fn no_cache() -> Self {
        Self {
            capacity: 0,
            enabled: false,
        }
    }
}

/// Cached decomposer with hot reload support.
///
/// Results are identical to [`Decomposer`](crate::Decomposer); repeated
/// hosts are served from an LRU cache keyed by the lower-cased host.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tldurl::{CacheConfig, CachedDecomposer, RuleSet};
///
/// let rules = Arc::new(RuleSet::parse("com\n").unwrap());
/// let decomposer = CachedDecomposer::new(rules, CacheConfig::default());
/// assert_eq!(decomposer.decompose("www.example.com").domain, "example.com");
///
/// // Swap in a new list; cached results are dropped.
/// decomposer.reload(Arc::new(RuleSet::parse("example.com\n").unwrap()));
/// assert_eq!(decomposer.decompose("www.example.com").tld, "example.com");
/// ```
pub struct CachedDecomposer {
    /// The rule set, wrapped in ArcSwap for atomic replacement.
    rules: ArcSwap<RuleSet>,
    /// LRU cache for decomposition results.
    cache: Option<Cache<String, Decomposition>>,
    options: MatchOptions,
    config: CacheConfig,
    /// Generation counter, bumped on every reload.
    generation: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedDecomposer {
    /// Create a cached decomposer with default match options.
    pub fn new(rules: Arc<RuleSet>, config: CacheConfig) -> Self {
        Self::with_options(rules, config, MatchOptions::default())
    }

    /// Create a cached decomposer with explicit match options.
    pub fn with_options(rules: Arc<RuleSet>, config: CacheConfig, options: MatchOptions) -> Self {
        let cache = if config.enabled && config.capacity > 0 {
            Some(Cache::new(config.capacity))
        } else {
            None
        };

        Self {
            rules: ArcSwap::new(rules),
            cache,
            options,
            config,
            generation: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Open a suffix-list file.
    pub fn open(path: &Path, config: CacheConfig) -> Result<Self> {
        let rules = RuleSet::from_path(path, &LoadOptions::default())?;
        Ok(Self::new(Arc::new(rules), config))
    }

    /// Atomically replace the rule set and clear the cache.
    ///
    /// In-flight lookups complete with the old rules, new lookups use the
    /// new rules. Results computed against the old rules are not cached.
    pub fn reload(&self, rules: Arc<RuleSet>) {
        let len = rules.len();
        self.rules.store(rules);
        self.generation.fetch_add(1, Ordering::SeqCst);

        if let Some(ref cache) = self.cache {
            cache.clear();
        }

        log::info!("Hot reloaded suffix list ({} rules)", len);
    }

    /// Hot reload rules from a suffix-list file.
    ///
    /// On error the current rule set stays in place.
    pub fn reload_from_path(&self, path: &Path, options: &LoadOptions) -> Result<()> {
        let rules = RuleSet::from_path(path, options)?;
        self.reload(Arc::new(rules));
        Ok(())
    }

    /// Decompose a bare host with caching.
    pub fn decompose(&self, host: &str) -> Decomposition {
        if host.is_empty() {
            return Decomposition::default();
        }

        let key = host.to_lowercase();

        if let Some(ref cache) = self.cache {
            if let Some(result) = cache.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return result;
            }
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        // Store happens before the generation bump in `reload`, so an
        // unchanged generation means `rules` is still current.
        let generation = self.generation();
        let rules = self.rules.load();
        let result = decompose_with_options(&rules, &key, self.options);
        self.insert_if_current(generation, key, &result);

        result
    }

    /// Cache a result computed under `generation`, unless a reload has
    /// happened since.
    fn insert_if_current(&self, generation: u64, key: String, result: &Decomposition) {
        let cache = match self.cache {
            Some(ref cache) => cache,
            None => return,
        };
        if self.generation() != generation {
            return;
        }
        cache.insert(key.clone(), result.clone());
        // A reload may have cleared the cache between the check and the insert.
        if self.generation() != generation {
            cache.remove(&key);
        }
    }

    /// Clear the cache.
    pub fn clear_cache(&self) {
        if let Some(ref cache) = self.cache {
            cache.clear();
        }
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        match self.cache {
            Some(ref cache) => CacheStats {
                capacity: self.config.capacity,
                len: cache.len(),
                hits: self.hits.load(Ordering::Relaxed),
                misses: self.misses.load(Ordering::Relaxed),
                enabled: true,
            },
            None => CacheStats::default(),
        }
    }

    /// Get the current generation (incremented on each reload).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Get the match options.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Get the current rule set.
    ///
    /// The returned Arc may become stale after a hot reload.
    pub fn rules(&self) -> Arc<RuleSet> {
        self.rules.load_full()
    }
}

impl HostDecomposer for CachedDecomposer {
    fn decompose(&self, host: &str) -> Decomposition {
        CachedDecomposer::decompose(self, host)
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Configured capacity
    pub capacity: usize,
    /// Current number of entries
    pub len: usize,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that had to run the matcher
    pub misses: u64,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl CacheStats {
    /// Fraction of lookups served from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

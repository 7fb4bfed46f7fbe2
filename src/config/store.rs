//! Memoized global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is loaded once per
//! process and cached; [`clear_cache`] resets the memoization for tests
//! and multi-project runs. Components never read this directly - the CLI
//! layer loads once and passes `&K2Config` down.

use super::K2Config;
use arc_swap::ArcSwapOption;
use std::{path::Path, sync::Arc};

/// Global config storage. Empty until the first [`load`].
static CONFIG: ArcSwapOption<K2Config> = ArcSwapOption::const_empty();

/// Load the configuration, memoized process-wide.
///
/// The first call resolves `path` (or `./k2.config.yaml`) and caches the
/// result; later calls return the cached config unchanged regardless of
/// `path`.
pub fn load(path: Option<&Path>) -> Arc<K2Config> {
    if let Some(config) = CONFIG.load_full() {
        return config;
    }

    let config = Arc::new(K2Config::load_or_default(path));
    CONFIG.store(Some(Arc::clone(&config)));
    config
}

/// Return the cached config, loading it from the default path if needed.
pub fn get() -> Arc<K2Config> {
    load(None)
}

/// Reset the memoized config so the next [`load`] re-reads from disk.
pub fn clear_cache() {
    CONFIG.store(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test for the global cell to avoid cross-test interference.
    #[test]
    fn test_memoization_and_clear() {
        clear_cache();

        let first = load(Some(Path::new("/nonexistent/k2.config.yaml")));
        let second = get();
        assert!(Arc::ptr_eq(&first, &second));

        clear_cache();
        let third = get();
        assert!(!Arc::ptr_eq(&first, &third));

        clear_cache();
    }
}

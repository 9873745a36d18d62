//! Render boundaries: routing emitted rules into a specific cache.

use crate::cache::StyleCache;

/// Handle through which a rendering subtree emits style rules.
///
/// A scope borrows the cache it records into, so a subtree rendered through
/// one scope cannot leak rules into another request's cache.
pub struct StyleScope<'a> {
    cache: &'a StyleCache,
}

impl<'a> StyleScope<'a> {
    /// Records a rule into the scoped cache. Returns `true` if the rule
    /// was new (see [`StyleCache::insert`]).
    pub fn rule(&self, css: &str) -> bool {
        self.cache.insert(css)
    }

    /// Returns the cache this scope records into.
    #[must_use]
    pub fn cache(&self) -> &'a StyleCache {
        self.cache
    }
}

/// Runs `render` with a [`StyleScope`] recording into `cache`.
///
/// This is the render boundary of the extraction pipeline: any styling
/// operation performed while rendering the subtree records into `cache`
/// instead of a default location. Re-rendering the same subtree with
/// unchanged styles records nothing new (de-duplication by rule identity).
///
/// # Example
///
/// ```
/// use vitrine_style::{CacheOptions, StyleCache, wrap};
///
/// let cache = StyleCache::new(CacheOptions::default());
/// wrap(&cache, |scope| scope.rule(".nav{display:flex}"));
/// wrap(&cache, |scope| scope.rule(".nav{display:flex}"));
///
/// assert_eq!(cache.len(), 1);
/// ```
pub fn wrap<T>(cache: &StyleCache, render: impl FnOnce(&StyleScope<'_>) -> T) -> T {
    let scope = StyleScope { cache };
    render(&scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheOptions;

    #[test]
    fn wrap_records_into_the_given_cache() {
        let cache = StyleCache::new(CacheOptions::default());

        let value = wrap(&cache, |scope| {
            scope.rule(".x{}");
            42
        });

        assert_eq!(value, 42);
        assert_eq!(cache.extract(false), ".x{}");
    }

    #[test]
    fn re_wrapping_same_subtree_does_not_duplicate() {
        let cache = StyleCache::new(CacheOptions::default());
        let subtree = |scope: &StyleScope<'_>| {
            scope.rule(".a{color:red}");
            scope.rule(".b{color:blue}");
        };

        wrap(&cache, subtree);
        let once = cache.extract(false);

        wrap(&cache, subtree);
        let twice = cache.extract(false);

        assert_eq!(once, twice);
    }

    #[test]
    fn independent_caches_do_not_share_rules() {
        let server = StyleCache::new(CacheOptions::default());
        let session = StyleCache::new(CacheOptions::default());

        wrap(&server, |scope| scope.rule(".server{}"));
        wrap(&session, |scope| scope.rule(".session{}"));

        assert_eq!(server.extract(false), ".server{}");
        assert_eq!(session.extract(false), ".session{}");
    }
}

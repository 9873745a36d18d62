//! The style cache: rule storage, de-duplication, and extraction.

use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

use hashbrown::HashMap;
use parking_lot::Mutex;

// ─────────────────────────────────────────────────────────────────────────────
// InsertionMode
// ─────────────────────────────────────────────────────────────────────────────

/// Where newly inserted rules land relative to existing ones on extraction.
///
/// With [`Append`](InsertionMode::Append) (the default), extraction yields
/// rules in insertion order. With [`Prepend`](InsertionMode::Prepend), every
/// new rule is inserted before the existing ones, so extraction yields the
/// latest-inserted rule first. Prepend mode lets application styles keep
/// winning specificity ties against library styles emitted later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertionMode {
    /// New rules follow existing ones (insertion order).
    #[default]
    Append,
    /// New rules precede existing ones (reverse insertion order).
    Prepend,
}

// ─────────────────────────────────────────────────────────────────────────────
// CacheOptions
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for a [`StyleCache`].
///
/// # Example
///
/// ```
/// use vitrine_style::{CacheOptions, InsertionMode, StyleCache};
///
/// let cache = StyleCache::new(CacheOptions::new("css").prepend());
/// assert_eq!(cache.key(), "css");
/// assert_eq!(cache.mode(), InsertionMode::Prepend);
/// ```
#[derive(Debug, Clone)]
pub struct CacheOptions {
    /// Stable key identifying the cache (and the class prefix it serves).
    pub key: String,
    /// Insertion mode for extraction ordering.
    pub mode: InsertionMode,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            key: "css".to_string(),
            mode: InsertionMode::Append,
        }
    }
}

impl CacheOptions {
    /// Creates options with the given cache key and append-mode insertion.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mode: InsertionMode::Append,
        }
    }

    /// Switches the cache to prepend-mode insertion.
    #[must_use]
    pub fn prepend(mut self) -> Self {
        self.mode = InsertionMode::Prepend;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StyleCache
// ─────────────────────────────────────────────────────────────────────────────

/// A single recorded rule. `used` marks rules already emitted by a
/// mark-as-used extraction so later extractions in the same pass skip them.
struct Rule {
    css: String,
    used: bool,
}

/// Rule storage: insertion-ordered list plus a hash index for de-duplication.
#[derive(Default)]
struct RuleSet {
    order: Vec<Rule>,
    index: HashMap<u64, usize>,
}

/// An accumulator that collects CSS rule text emitted during a scoped render.
///
/// Rules are de-duplicated by content hash, so re-rendering the same subtree
/// with unchanged styles records nothing new. Interior locking makes a
/// session-scoped cache safe to share behind an `Arc`; within a single
/// render pass mutation is synchronous.
///
/// # Example
///
/// ```
/// use vitrine_style::{CacheOptions, StyleCache};
///
/// let cache = StyleCache::new(CacheOptions::default());
/// assert!(cache.insert(".a{color:red}"));
/// assert!(!cache.insert(".a{color:red}")); // duplicate, ignored
/// assert_eq!(cache.len(), 1);
/// ```
pub struct StyleCache {
    key: String,
    mode: InsertionMode,
    rules: Mutex<RuleSet>,
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl StyleCache {
    /// Creates a new empty cache. No error conditions.
    #[must_use]
    pub fn new(options: CacheOptions) -> Self {
        Self {
            key: options.key,
            mode: options.mode,
            rules: Mutex::new(RuleSet::default()),
        }
    }

    /// Returns the cache key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the insertion mode.
    #[must_use]
    pub fn mode(&self) -> InsertionMode {
        self.mode
    }

    /// Records a rule, de-duplicated by rule identity.
    ///
    /// Returns `true` if the rule was new, `false` if an identical rule was
    /// already recorded (including rules already flagged as used).
    pub fn insert(&self, css: &str) -> bool {
        let hash = rule_hash(css);
        let mut rules = self.rules.lock();

        if rules.index.contains_key(&hash) {
            return false;
        }

        rules.order.push(Rule {
            css: css.to_string(),
            used: false,
        });
        let position = rules.order.len() - 1;
        rules.index.insert(hash, position);
        true
    }

    /// Serializes all not-yet-used rules, honoring the insertion mode.
    ///
    /// With `mark_as_used`, emitted rules are flagged so a subsequent
    /// extraction in the same pass does not re-emit them. An empty cache
    /// yields an empty string, never an error.
    pub fn extract(&self, mark_as_used: bool) -> String {
        let mut rules = self.rules.lock();
        let mut out = String::new();

        let iter: Box<dyn Iterator<Item = &mut Rule>> = match self.mode {
            InsertionMode::Append => Box::new(rules.order.iter_mut()),
            InsertionMode::Prepend => Box::new(rules.order.iter_mut().rev()),
        };

        for rule in iter {
            if rule.used {
                continue;
            }
            out.push_str(&rule.css);
            if mark_as_used {
                rule.used = true;
            }
        }

        tracing::debug!(cache = %self.key, bytes = out.len(), "extracted style rules");
        out
    }

    /// Returns the number of recorded rules, used or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.lock().order.len()
    }

    /// Returns `true` if no rules have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.lock().order.is_empty()
    }
}

impl core::fmt::Debug for StyleCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StyleCache")
            .field("key", &self.key)
            .field("mode", &self.mode)
            .field("rules", &self.len())
            .finish()
    }
}

/// Content hash identifying a rule. Collisions only suppress duplicate
/// emission, so a non-cryptographic hash is sufficient.
fn rule_hash(css: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    css.hash(&mut hasher);
    hasher.finish()
}

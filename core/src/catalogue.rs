//! `Catalogue` — the ordered tracker-rule list.
//!
//! Declaration order is priority order: the first rule whose pattern hits
//! wins, even when a later rule would also match. Catch-all rules with
//! broad ad-network patterns belong last.
//!
//! Reads are lock-free (`ArcSwap` snapshot); mutation publishes a new
//! snapshot and is serialized behind an internal mutex so concurrent
//! registrations cannot race the uniqueness check.

use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use tracing::debug;

use crate::{CatalogueError, TrackerRule, MAX_RULES};

/// An ordered, runtime-extensible collection of [`TrackerRule`]s.
///
/// Lookup is a linear scan — O(rules × patterns) per call. Catalogue sizes
/// are in the tens to low hundreds and call frequency is bounded by page
/// network activity, so no index is kept.
///
/// # Example
///
/// ```
/// use pixhound::{Catalogue, EventCategory, TrackerRule};
///
/// let catalogue = Catalogue::new();
/// catalogue
///     .add_rule(
///         TrackerRule::builder("Hotjar", EventCategory::Other)
///             .url_patterns(["hotjar.com"])
///             .build()
///             .unwrap(),
///     )
///     .unwrap();
///
/// let rule = catalogue.find_matching_rule("https://static.hotjar.com/c/h.js");
/// assert_eq!(rule.unwrap().name(), "Hotjar");
/// ```
#[derive(Debug)]
pub struct Catalogue {
    rules: ArcSwap<Vec<Arc<TrackerRule>>>,
    /// Serializes mutation; readers never take it.
    write_lock: Mutex<()>,
}

impl Catalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a catalogue from an ordered rule list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateRuleName`] if two rules share a
    /// name, or [`CatalogueError::TooManyRules`] past [`MAX_RULES`].
    pub fn with_rules(rules: Vec<TrackerRule>) -> Result<Self, CatalogueError> {
        if rules.len() > MAX_RULES {
            return Err(CatalogueError::TooManyRules {
                count: rules.len(),
                max: MAX_RULES,
            });
        }
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.name() == rule.name()) {
                return Err(CatalogueError::DuplicateRuleName {
                    name: rule.name().to_owned(),
                });
            }
        }

        let catalogue = Self {
            rules: ArcSwap::from_pointee(rules.into_iter().map(Arc::new).collect()),
            write_lock: Mutex::new(()),
        };
        debug!(rules = catalogue.len(), "catalogue constructed");
        Ok(catalogue)
    }

    /// Append a rule at the end of the catalogue (lowest priority).
    ///
    /// Existing rules keep their position; this is the runtime extension
    /// point for catalogues shipped with the engine.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateRuleName`] if the name is taken,
    /// or [`CatalogueError::TooManyRules`] when the catalogue is full.
    pub fn add_rule(&self, rule: TrackerRule) -> Result<(), CatalogueError> {
        let _guard = self.write_lock.lock().expect("catalogue write lock poisoned");

        let current = self.rules.load();
        if current.iter().any(|r| r.name() == rule.name()) {
            return Err(CatalogueError::DuplicateRuleName {
                name: rule.name().to_owned(),
            });
        }
        if current.len() >= MAX_RULES {
            return Err(CatalogueError::TooManyRules {
                count: current.len() + 1,
                max: MAX_RULES,
            });
        }

        debug!(rule = rule.name(), "rule registered");
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(Arc::new(rule));
        self.rules.store(Arc::new(next));
        Ok(())
    }

    /// Find the first rule (in declaration order) with any pattern that is
    /// a substring of `url`.
    ///
    /// Returns `None` when the URL belongs to no known tracker — the
    /// normal outcome for most page traffic, not an error.
    #[must_use]
    pub fn find_matching_rule(&self, url: &str) -> Option<Arc<TrackerRule>> {
        self.rules
            .load()
            .iter()
            .find(|rule| rule.matches_url(url))
            .cloned()
    }

    /// Look up a rule by its unique name.
    #[must_use]
    pub fn rule_named(&self, name: &str) -> Option<Arc<TrackerRule>> {
        self.rules.load().iter().find(|r| r.name() == name).cloned()
    }

    /// A point-in-time snapshot of the rule list.
    ///
    /// The snapshot is immutable and unaffected by later `add_rule` calls.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Arc<TrackerRule>>> {
        self.rules.load_full()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    /// True if the catalogue holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.load().is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

//! pixhound — tracker detection engine
//!
//! Classifies outbound HTTP requests against a catalogue of known
//! marketing/analytics trackers (pixels, analytics beacons, ad conversion
//! calls, tag managers) and extracts a normalized event — name, tracker
//! identifier, parameters — for each match.
//!
//! # Architecture
//!
//! The engine is data-driven: every tracker is described by a declarative
//! [`TrackerRule`], and one uniform matcher/extractor pair handles all of
//! them. There are no per-tracker code paths.
//!
//! - [`TrackerRule`] — immutable description of one tracker integration
//! - [`Catalogue`] — ordered rule list with first-match-wins lookup
//! - [`RequestContext`] — one intercepted request (URL, method, body, token)
//! - [`Detector`] — finds the rule, extracts from URL and body, merges,
//!   and hands the result to a caller-supplied sink
//! - [`ExtractedEvent`] — the normalized output
//!
//! # Key Design Insights
//!
//! 1. **Rules are pure data**: matching and extraction behavior is driven
//!    entirely by rule fields. Adding a tracker means adding a rule, not
//!    code.
//!
//! 2. **Body wins the merge**: POST bodies carry the authoritative payload;
//!    URL query parameters on the same request are frequently redundant or
//!    truncated. See [`ExtractedEvent::merged`].
//!
//! 3. **Nothing on the detection path errors**: malformed URLs, JSON, and
//!    form bodies all degrade to "no extraction" at the smallest scope.
//!    [`Detector::process`] signals everything through its `bool` return.
//!
//! # Example
//!
//! ```
//! use pixhound::prelude::*;
//!
//! let rule = TrackerRule::builder("Google Analytics", EventCategory::Analytics)
//!     .url_patterns(["google-analytics.com/g/collect"])
//!     .event_name_fields(["en"])
//!     .tracker_id_fields(["tid"])
//!     .build()
//!     .unwrap();
//!
//! let catalogue = Catalogue::with_rules(vec![rule]).unwrap();
//! let detector = Detector::new(catalogue);
//!
//! let ctx = RequestContext::new(
//!     "https://www.google-analytics.com/g/collect?en=page_view&tid=G-ABC123",
//!     "GET",
//! );
//!
//! let mut seen = Vec::new();
//! let matched = detector.process(&ctx, |rule, event, _token| {
//!     seen.push((rule.name().to_owned(), event));
//! });
//!
//! assert!(matched);
//! assert_eq!(seen[0].0, "Google Analytics");
//! assert_eq!(seen[0].1.event_name(), "page_view");
//! assert_eq!(seen[0].1.tracker_id(), "G-ABC123");
//! ```
//!
//! # Extensions
//!
//! - [`pixhound-rules`](https://docs.rs/pixhound-rules) — the built-in
//!   catalogue of known trackers and their parameter dictionaries
//! - The `config` feature adds serde-deserializable rule configuration for
//!   loading catalogue extensions from JSON/YAML at runtime

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod catalogue;
mod categorize;
mod category;
mod context;
mod detector;
mod extract;
mod extraction;
mod flatten;
mod rule;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use catalogue::Catalogue;
pub use categorize::{categorize, ParameterGroup};
pub use category::EventCategory;
pub use context::RequestContext;
pub use detector::Detector;
pub use extract::{extract_from_body, extract_from_url};
pub use extraction::{ExtractedEvent, Extraction, Parameter};
pub use flatten::flatten_json;
pub use rule::{BodyParser, DictionaryCategory, DictionaryEntry, TrackerRule, TrackerRuleBuilder};

// Config types (feature-gated)
#[cfg(feature = "config")]
pub use config::{CatalogueConfig, DictionaryCategoryConfig, DictionaryEntryConfig, RuleConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use pixhound::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        categorize,
        BodyParser,
        Catalogue,
        CatalogueError,
        Detector,
        DictionaryCategory,
        DictionaryEntry,
        EventCategory,
        ExtractedEvent,
        Extraction,
        Parameter,
        ParameterGroup,
        RequestContext,
        TrackerRule,
        TrackerRuleBuilder,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Sentinel event name used when neither URL nor body yields one.
///
/// [`ExtractedEvent::event_name`] holds this value for events detected only
/// through their parameters or tracker identifier. The sentinel does not
/// count as signal on its own — see [`Detector::process`].
pub const UNKNOWN_EVENT: &str = "unknown_event";

/// Label of the synthetic category that collects parameters matched by no
/// dictionary entry. Always appended last by [`categorize`].
pub const OTHERS_GROUP_LABEL: &str = "Others";

/// Maximum number of rules in a single [`Catalogue`].
///
/// The catalogue is a linear scan; this bounds lookup cost and protects
/// against runaway registration through [`Catalogue::add_rule`]. Real
/// catalogues are in the tens to low hundreds of rules.
pub const MAX_RULES: usize = 1024;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from rule construction and catalogue mutation.
///
/// These are caught at rule-authoring time, never during detection —
/// [`Detector::process`] has no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// A rule was built with an empty name.
    EmptyRuleName,
    /// A rule was built with no URL patterns.
    ///
    /// A rule with no patterns can never match; rejecting it at build time
    /// keeps the "first pattern hit wins" contract meaningful.
    EmptyUrlPatterns {
        /// Name of the offending rule.
        rule: String,
    },
    /// A rule with this name is already in the catalogue.
    DuplicateRuleName {
        /// The duplicated name.
        name: String,
    },
    /// The catalogue is at [`MAX_RULES`].
    TooManyRules {
        /// Actual rule count.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Rule configuration deserialization or construction failed.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRuleName => write!(f, "rule name must not be empty"),
            Self::EmptyUrlPatterns { rule } => {
                write!(f, "rule \"{rule}\" has no URL patterns and can never match")
            }
            Self::DuplicateRuleName { name } => {
                write!(f, "a rule named \"{name}\" is already registered")
            }
            Self::TooManyRules { count, max } => {
                write!(f, "catalogue has {count} rules, but maximum allowed is {max}")
            }
            Self::InvalidConfig { source } => write!(f, "invalid rule config: {source}"),
        }
    }
}

impl std::error::Error for CatalogueError {}

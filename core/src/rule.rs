//! `TrackerRule` — declarative description of one tracker integration.
//!
//! Rules are pure data: where a request for this tracker can be recognized
//! (URL substrings), where its event name and tracker identifier live
//! (field priority lists), and how its request bodies are encoded.
//! Construction goes through [`TrackerRuleBuilder`]; built rules are
//! immutable.

use crate::{CatalogueError, EventCategory};

/// Request-body encodings a rule knows how to read.
///
/// Tried in the order declared on the rule; the first parser that succeeds
/// for a given request wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum BodyParser {
    /// JSON documents, including deeply nested event batches.
    Json,
    /// `application/x-www-form-urlencoded` key/value payloads.
    Form,
}

/// One dictionary entry: a raw wire field name and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    field: String,
    label: String,
}

impl DictionaryEntry {
    /// Create an entry mapping `field` to the human-readable `label`.
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }

    /// The raw field name as it appears on the wire.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The display label shown instead of the raw name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A named group of dictionary entries (e.g. "Event info", "Personal info").
///
/// Dictionaries drive display grouping via [`categorize`](crate::categorize);
/// they play no part in detection itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryCategory {
    label: String,
    entries: Vec<DictionaryEntry>,
}

impl DictionaryCategory {
    /// Create a category from `(field, label)` pairs.
    pub fn new<I, F, L>(label: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            label: label.into(),
            entries: entries
                .into_iter()
                .map(|(f, l)| DictionaryEntry::new(f, l))
                .collect(),
        }
    }

    /// The category's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The entries in this category.
    #[must_use]
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Look up the display label for a raw field name.
    #[must_use]
    pub fn label_for(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.label.as_str())
    }
}

/// Immutable description of one known tracker/service.
///
/// A request matches the rule when its URL contains ANY of the rule's
/// `url_patterns` (plain substring, case-sensitive, unanchored). The field
/// priority lists say which query/body keys carry the event name and the
/// tracker identifier.
///
/// # Example
///
/// ```
/// use pixhound::{BodyParser, EventCategory, TrackerRule};
///
/// let rule = TrackerRule::builder("Meta/Facebook", EventCategory::SocialPixel)
///     .description("Meta (Facebook) Pixel tracking detection")
///     .url_patterns(["facebook.com/tr", "connect.facebook.net"])
///     .event_name_fields(["ev", "event", "event_name"])
///     .tracker_id_fields(["id", "pixel_id"])
///     .request_body([BodyParser::Json, BodyParser::Form])
///     .build()
///     .unwrap();
///
/// assert!(rule.matches_url("https://www.facebook.com/tr/?ev=PageView"));
/// assert!(!rule.matches_url("https://example.com/app.js"));
/// ```
#[derive(Debug, Clone)]
pub struct TrackerRule {
    name: String,
    description: String,
    category: EventCategory,
    url_patterns: Vec<String>,
    event_name_fields: Vec<String>,
    tracker_id_fields: Vec<String>,
    dictionary: Vec<DictionaryCategory>,
    supports_request_body: bool,
    body_parsers: Vec<BodyParser>,
}

impl TrackerRule {
    /// Start building a rule with the given name and category.
    #[must_use]
    pub fn builder(name: impl Into<String>, category: EventCategory) -> TrackerRuleBuilder {
        TrackerRuleBuilder {
            rule: TrackerRule {
                name: name.into(),
                description: String::new(),
                category,
                url_patterns: Vec::new(),
                event_name_fields: Vec::new(),
                tracker_id_fields: Vec::new(),
                dictionary: Vec::new(),
                supports_request_body: false,
                body_parsers: Vec::new(),
            },
        }
    }

    /// Display identifier, unique within a catalogue.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of what this rule detects.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The bucket detected events are stored under.
    #[must_use]
    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// URL substrings, any of which identifies this tracker.
    #[must_use]
    pub fn url_patterns(&self) -> &[String] {
        &self.url_patterns
    }

    /// Field names probed for the event name, in priority order.
    #[must_use]
    pub fn event_name_fields(&self) -> &[String] {
        &self.event_name_fields
    }

    /// Field names probed for the tracker identifier, in priority order.
    #[must_use]
    pub fn tracker_id_fields(&self) -> &[String] {
        &self.tracker_id_fields
    }

    /// The parameter dictionary used for display grouping.
    #[must_use]
    pub fn dictionary(&self) -> &[DictionaryCategory] {
        &self.dictionary
    }

    /// Whether request bodies are inspected at all for this tracker.
    #[must_use]
    pub fn supports_request_body(&self) -> bool {
        self.supports_request_body
    }

    /// Body encodings to try, in order.
    #[must_use]
    pub fn body_parsers(&self) -> &[BodyParser] {
        &self.body_parsers
    }

    /// True if any of this rule's patterns is a substring of `url`.
    ///
    /// Matching is deliberately unanchored: patterns like `"gtm"` match
    /// anywhere in the URL. Tightening this would silently reduce the
    /// detection coverage existing catalogues rely on.
    #[must_use]
    pub fn matches_url(&self, url: &str) -> bool {
        self.url_patterns.iter().any(|p| url.contains(p.as_str()))
    }

    /// True if `key` is one of the event-name fields.
    #[must_use]
    pub fn is_event_name_field(&self, key: &str) -> bool {
        self.event_name_fields.iter().any(|f| f == key)
    }

    /// True if `key` is one of the tracker-identifier fields.
    #[must_use]
    pub fn is_tracker_id_field(&self, key: &str) -> bool {
        self.tracker_id_fields.iter().any(|f| f == key)
    }

    /// True if this rule's body parsers include `parser`.
    #[must_use]
    pub fn has_body_parser(&self, parser: BodyParser) -> bool {
        self.body_parsers.contains(&parser)
    }
}

/// Builder for [`TrackerRule`].
///
/// `build()` enforces the rule invariants: non-empty name, at least one
/// URL pattern.
#[derive(Debug)]
pub struct TrackerRuleBuilder {
    rule: TrackerRule,
}

impl TrackerRuleBuilder {
    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.rule.description = description.into();
        self
    }

    /// Set the URL substrings that identify this tracker.
    #[must_use]
    pub fn url_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.url_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the event-name field priority list.
    #[must_use]
    pub fn event_name_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.event_name_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tracker-identifier field priority list.
    #[must_use]
    pub fn tracker_id_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.tracker_id_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the parameter dictionary.
    #[must_use]
    pub fn dictionary(mut self, dictionary: Vec<DictionaryCategory>) -> Self {
        self.rule.dictionary = dictionary;
        self
    }

    /// Enable body inspection with the given parsers, tried in order.
    #[must_use]
    pub fn request_body<I>(mut self, parsers: I) -> Self
    where
        I: IntoIterator<Item = BodyParser>,
    {
        self.rule.body_parsers = parsers.into_iter().collect();
        self.rule.supports_request_body = true;
        self
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::EmptyRuleName`] or
    /// [`CatalogueError::EmptyUrlPatterns`] when the invariants are violated.
    pub fn build(self) -> Result<TrackerRule, CatalogueError> {
        if self.rule.name.is_empty() {
            return Err(CatalogueError::EmptyRuleName);
        }
        if self.rule.url_patterns.is_empty() {
            return Err(CatalogueError::EmptyUrlPatterns {
                rule: self.rule.name,
            });
        }
        Ok(self.rule)
    }
}

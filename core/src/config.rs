//! Config types for rule loading (feature = `config`).
//!
//! These types mirror the runtime rule model but are serde-deserializable,
//! so operators can ship new tracker definitions as JSON or YAML without
//! redeploying the engine.
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader |
//! |-------------|--------------|--------|
//! | [`CatalogueConfig`] | [`Catalogue`](crate::Catalogue) | `CatalogueConfig::build()` |
//! | [`RuleConfig`] | [`TrackerRule`](crate::TrackerRule) | `RuleConfig::build()` |
//! | [`DictionaryCategoryConfig`] | [`DictionaryCategory`](crate::DictionaryCategory) | via `RuleConfig` |
//!
//! # Example
//!
//! ```
//! use pixhound::RuleConfig;
//!
//! let yaml = r#"
//! name: Example Pixel
//! category: pixel
//! url_patterns: ["pixel.example.test"]
//! event_name_fields: ["e"]
//! tracker_id_fields: ["site"]
//! body_parsers: ["json"]
//! "#;
//!
//! let config: RuleConfig = serde_yaml::from_str(yaml).unwrap();
//! let rule = config.build().unwrap();
//! assert!(rule.supports_request_body());
//! ```

use serde::Deserialize;

use crate::{
    BodyParser, Catalogue, CatalogueError, DictionaryCategory, EventCategory, TrackerRule,
};

/// A whole catalogue as configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueConfig {
    /// Rules in declaration (priority) order.
    pub rules: Vec<RuleConfig>,
}

impl CatalogueConfig {
    /// Build a runtime [`Catalogue`], validating every rule.
    ///
    /// # Errors
    ///
    /// Propagates the first rule-construction or catalogue-validation
    /// failure.
    pub fn build(self) -> Result<Catalogue, CatalogueError> {
        let rules = self
            .rules
            .into_iter()
            .map(RuleConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Catalogue::with_rules(rules)
    }
}

/// One tracker rule as configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Unique display identifier.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Storage bucket (snake_case: `pixel`, `analytics`, `ads`,
    /// `social_pixel`, `short_video`, `tag_manager`, `other`).
    pub category: EventCategory,
    /// URL substrings, any of which identifies this tracker.
    pub url_patterns: Vec<String>,
    /// Event-name field priority list.
    #[serde(default)]
    pub event_name_fields: Vec<String>,
    /// Tracker-identifier field priority list.
    #[serde(default)]
    pub tracker_id_fields: Vec<String>,
    /// Parameter dictionary for display grouping.
    #[serde(default)]
    pub dictionary: Vec<DictionaryCategoryConfig>,
    /// Whether to inspect request bodies. Defaults to "has body parsers".
    #[serde(default)]
    pub supports_request_body: Option<bool>,
    /// Body encodings to try, in order (`json`, `form`).
    #[serde(default)]
    pub body_parsers: Vec<BodyParser>,
}

impl RuleConfig {
    /// Build a runtime [`TrackerRule`].
    ///
    /// # Errors
    ///
    /// Same invariants as [`TrackerRule::builder`]: non-empty name,
    /// non-empty `url_patterns`.
    pub fn build(self) -> Result<TrackerRule, CatalogueError> {
        let supports_body = self
            .supports_request_body
            .unwrap_or(!self.body_parsers.is_empty());

        let mut builder = TrackerRule::builder(self.name, self.category)
            .description(self.description)
            .url_patterns(self.url_patterns)
            .event_name_fields(self.event_name_fields)
            .tracker_id_fields(self.tracker_id_fields)
            .dictionary(
                self.dictionary
                    .into_iter()
                    .map(DictionaryCategoryConfig::build)
                    .collect(),
            );

        if supports_body {
            builder = builder.request_body(self.body_parsers);
        }

        builder.build()
    }
}

/// One dictionary category as configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryCategoryConfig {
    /// The category's display label.
    pub label: String,
    /// Field-to-label entries.
    pub entries: Vec<DictionaryEntryConfig>,
}

impl DictionaryCategoryConfig {
    fn build(self) -> DictionaryCategory {
        DictionaryCategory::new(
            self.label,
            self.entries.into_iter().map(|e| (e.field, e.label)),
        )
    }
}

/// One dictionary entry as configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntryConfig {
    /// Raw wire field name.
    pub field: String,
    /// Display label.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_from_json() {
        let json = r#"{
            "name": "Example",
            "category": "social_pixel",
            "url_patterns": ["pixel.example.test/collect"],
            "event_name_fields": ["ev"],
            "tracker_id_fields": ["pid"],
            "body_parsers": ["json", "form"]
        }"#;

        let config: RuleConfig = serde_json::from_str(json).unwrap();
        let rule = config.build().unwrap();

        assert_eq!(rule.name(), "Example");
        assert_eq!(rule.category(), EventCategory::SocialPixel);
        assert!(rule.supports_request_body());
        assert_eq!(rule.body_parsers(), &[BodyParser::Json, BodyParser::Form]);
    }

    #[test]
    fn supports_request_body_defaults_from_parsers() {
        let without_parsers: RuleConfig = serde_yaml::from_str(
            "name: A\ncategory: other\nurl_patterns: [a.test]\n",
        )
        .unwrap();
        assert!(!without_parsers.build().unwrap().supports_request_body());

        let with_parsers: RuleConfig = serde_yaml::from_str(
            "name: B\ncategory: other\nurl_patterns: [b.test]\nbody_parsers: [json]\n",
        )
        .unwrap();
        assert!(with_parsers.build().unwrap().supports_request_body());
    }

    #[test]
    fn explicit_supports_flag_overrides() {
        let config: RuleConfig = serde_yaml::from_str(
            "name: C\ncategory: other\nurl_patterns: [c.test]\nsupports_request_body: false\nbody_parsers: [json]\n",
        )
        .unwrap();
        assert!(!config.build().unwrap().supports_request_body());
    }

    #[test]
    fn catalogue_from_yaml_with_dictionary() {
        let yaml = r#"
rules:
  - name: Example Pixel
    category: pixel
    url_patterns: ["pixel.example.test"]
    event_name_fields: ["e"]
    dictionary:
      - label: Event info
        entries:
          - { field: e, label: Event name }
          - { field: u, label: Page URL }
  - name: Catch-all
    category: other
    url_patterns: ["ads.example.test"]
"#;

        let config: CatalogueConfig = serde_yaml::from_str(yaml).unwrap();
        let catalogue = config.build().unwrap();

        assert_eq!(catalogue.len(), 2);
        let rule = catalogue.rule_named("Example Pixel").unwrap();
        assert_eq!(rule.dictionary().len(), 1);
        assert_eq!(rule.dictionary()[0].label_for("u"), Some("Page URL"));
    }

    #[test]
    fn invalid_rule_config_is_rejected() {
        let config: RuleConfig =
            serde_yaml::from_str("name: Bad\ncategory: other\nurl_patterns: []\n").unwrap();
        assert!(matches!(
            config.build(),
            Err(CatalogueError::EmptyUrlPatterns { .. })
        ));
    }

    #[test]
    fn duplicate_rule_names_are_rejected_at_catalogue_build() {
        let yaml = r#"
rules:
  - { name: Same, category: other, url_patterns: [a] }
  - { name: Same, category: other, url_patterns: [b] }
"#;
        let config: CatalogueConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.build(),
            Err(CatalogueError::DuplicateRuleName { .. })
        ));
    }
}

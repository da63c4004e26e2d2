//! Parameter categorization for display grouping.
//!
//! Post-extraction, caller-facing: groups a flat parameter list under the
//! rule's dictionary categories. Not part of detection.

use crate::{DictionaryCategory, Parameter, OTHERS_GROUP_LABEL};

/// A display group of parameters under a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterGroup {
    /// The category label, or [`OTHERS_GROUP_LABEL`] for the synthetic
    /// tail group.
    pub label: String,
    /// The grouped parameters. Names are display labels for dictionary
    /// matches, raw names in the tail group.
    pub items: Vec<Parameter>,
}

/// Group parameters by the rule's dictionary.
///
/// For each dictionary category in order, collect the parameters whose raw
/// name appears among the category's entries, substituting the display
/// label for the raw name. Categories with no matches are omitted.
/// Parameters matched by no category land in a synthetic
/// [`OTHERS_GROUP_LABEL`] group appended last, under their raw names.
///
/// # Example
///
/// ```
/// use pixhound::{categorize, DictionaryCategory, Parameter};
///
/// let dictionary = vec![DictionaryCategory::new(
///     "Event info",
///     [("en", "Event name")],
/// )];
/// let parameters = vec![
///     Parameter::new("en", "page_view"),
///     Parameter::new("cb", "1234"),
/// ];
///
/// let groups = categorize(&parameters, &dictionary);
/// assert_eq!(groups[0].label, "Event info");
/// assert_eq!(groups[0].items[0].name, "Event name");
/// assert_eq!(groups[1].label, "Others");
/// assert_eq!(groups[1].items[0].name, "cb");
/// ```
#[must_use]
pub fn categorize(
    parameters: &[Parameter],
    dictionary: &[DictionaryCategory],
) -> Vec<ParameterGroup> {
    let mut groups = Vec::new();

    for category in dictionary {
        let items: Vec<Parameter> = parameters
            .iter()
            .filter_map(|param| {
                category
                    .label_for(&param.name)
                    .map(|label| Parameter::new(label, param.value.clone()))
            })
            .collect();

        if !items.is_empty() {
            groups.push(ParameterGroup {
                label: category.label().to_owned(),
                items,
            });
        }
    }

    let others: Vec<Parameter> = parameters
        .iter()
        .filter(|param| {
            !dictionary
                .iter()
                .any(|category| category.label_for(&param.name).is_some())
        })
        .cloned()
        .collect();

    if !others.is_empty() {
        groups.push(ParameterGroup {
            label: OTHERS_GROUP_LABEL.to_owned(),
            items: others,
        });
    }

    groups
}

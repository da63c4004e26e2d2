//! Parameter dictionaries for the major trackers.
//!
//! A dictionary maps raw wire field names to display labels, grouped by
//! category. Only the heavyweight integrations carry one; for everything
//! else the caller falls back to raw names in the synthetic "Others"
//! group.

use pixhound::DictionaryCategory;

/// First-party pixel parameters.
#[must_use]
pub fn pixel_dictionary() -> Vec<DictionaryCategory> {
    vec![
        DictionaryCategory::new(
            "Event info",
            [
                ("ts", "Timestamp"),
                ("u", "Page URL"),
                ("r", "Referrer"),
                ("t", "Page title"),
            ],
        ),
        DictionaryCategory::new(
            "Personal info",
            [("uid", "User ID"), ("em", "Email (hashed)")],
        ),
        DictionaryCategory::new(
            "Device info",
            [
                ("sw", "Screen width"),
                ("sh", "Screen height"),
                ("lang", "Language"),
            ],
        ),
    ]
}

/// Google Analytics 4 measurement-protocol parameters.
#[must_use]
pub fn ga_dictionary() -> Vec<DictionaryCategory> {
    vec![
        DictionaryCategory::new(
            "Page info",
            [
                ("dl", "Page location"),
                ("dt", "Page title"),
                ("dr", "Referrer"),
            ],
        ),
        DictionaryCategory::new(
            "Session info",
            [
                ("cid", "Client ID"),
                ("sid", "Session ID"),
                ("sct", "Session count"),
                ("seg", "Session engaged"),
            ],
        ),
        DictionaryCategory::new(
            "Personal info",
            [("uid", "User ID")],
        ),
        DictionaryCategory::new(
            "Device info",
            [("sr", "Screen resolution"), ("ul", "Language")],
        ),
    ]
}

/// Meta (Facebook) Pixel parameters.
#[must_use]
pub fn meta_dictionary() -> Vec<DictionaryCategory> {
    vec![
        DictionaryCategory::new(
            "Page info",
            [("dl", "Page URL"), ("rl", "Referrer"), ("if", "In iframe")],
        ),
        DictionaryCategory::new(
            "Event info",
            [("ts", "Timestamp"), ("ec", "Event count"), ("v", "Pixel version")],
        ),
        DictionaryCategory::new(
            "E-commerce",
            [
                ("cd[value]", "Order value"),
                ("cd[currency]", "Currency"),
                ("cd[content_name]", "Content name"),
                ("cd[content_type]", "Content type"),
            ],
        ),
        DictionaryCategory::new(
            "Personal info",
            [("ud[em]", "Email (hashed)"), ("ud[ph]", "Phone (hashed)")],
        ),
    ]
}

/// TikTok Pixel parameters (flattened JSON paths).
#[must_use]
pub fn tiktok_dictionary() -> Vec<DictionaryCategory> {
    vec![
        DictionaryCategory::new(
            "Page info",
            [
                ("context_page_url", "Page URL"),
                ("context_page_referrer", "Referrer"),
            ],
        ),
        DictionaryCategory::new(
            "Event info",
            [("timestamp", "Timestamp"), ("message_id", "Message ID")],
        ),
        DictionaryCategory::new(
            "E-commerce",
            [
                ("properties_value", "Order value"),
                ("properties_currency", "Currency"),
                ("properties_content_type", "Content type"),
            ],
        ),
        DictionaryCategory::new(
            "Device info",
            [("context_user_agent", "User agent")],
        ),
    ]
}

/// Google Tag Manager / gtag collect parameters.
#[must_use]
pub fn gtm_dictionary() -> Vec<DictionaryCategory> {
    vec![
        DictionaryCategory::new(
            "Page info",
            [
                ("dl", "Page location"),
                ("dt", "Page title"),
                ("dr", "Referrer"),
            ],
        ),
        DictionaryCategory::new(
            "Session info",
            [("cid", "Client ID"), ("sid", "Session ID")],
        ),
        DictionaryCategory::new(
            "Container info",
            [
                ("tag_exp", "Tag experiments"),
                ("gcs", "Consent state"),
                ("gcd", "Consent default"),
            ],
        ),
        DictionaryCategory::new(
            "Device info",
            [("sr", "Screen resolution"), ("ul", "Language")],
        ),
    ]
}

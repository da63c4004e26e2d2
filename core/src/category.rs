//! `EventCategory` — the fixed set of buckets detected events land in.

/// The bucket a detected event is stored under by the calling layer.
///
/// Every [`TrackerRule`](crate::TrackerRule) declares exactly one category.
/// The engine never branches on it; it exists so callers can aggregate
/// events per tracker family (e.g. keyed by tab + category).
///
/// # Example
///
/// ```
/// use pixhound::EventCategory;
///
/// assert_eq!(EventCategory::SocialPixel.storage_key(), "social_pixel_events");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum EventCategory {
    /// First-party tracking pixels.
    Pixel,
    /// Product/web analytics platforms (GA4, Amplitude, Mixpanel, ...).
    Analytics,
    /// Ad conversion and retargeting calls.
    Ads,
    /// Social-network advertising pixels (Meta, Snapchat, LinkedIn, ...).
    SocialPixel,
    /// Short-video platform pixels (TikTok).
    ShortVideo,
    /// Tag manager containers and their event streams.
    TagManager,
    /// Everything else: session recorders, CDPs, consent managers, ...
    Other,
}

impl EventCategory {
    /// Stable snake_case key callers use as a storage bucket name.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Pixel => "pixel_events",
            Self::Analytics => "analytics_events",
            Self::Ads => "ads_events",
            Self::SocialPixel => "social_pixel_events",
            Self::ShortVideo => "short_video_events",
            Self::TagManager => "tag_manager_events",
            Self::Other => "other_events",
        }
    }

    /// All categories, in display order.
    #[must_use]
    pub fn all() -> &'static [EventCategory] {
        &[
            Self::Pixel,
            Self::Analytics,
            Self::Ads,
            Self::SocialPixel,
            Self::ShortVideo,
            Self::TagManager,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pixel => "Pixel",
            Self::Analytics => "Analytics",
            Self::Ads => "Ads",
            Self::SocialPixel => "Social pixel",
            Self::ShortVideo => "Short video",
            Self::TagManager => "Tag manager",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::Level;
use crate::schema::{serde_url, ResourceData};

/// The account that owns the API token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Set while the user is on vacation.
    pub current_vacation_started_at: Option<DateTime<Utc>>,
    /// Current level, regardless of subscription status.
    pub level: Level,
    pub preferences: Preferences,
    #[serde(with = "serde_url")]
    pub profile_url: Url,
    /// Signup date.
    pub started_at: DateTime<Utc>,
    pub subscription: Subscription,
    pub username: String,
}

impl ResourceData for User {
    const OBJECT: &'static str = "user";
}

impl User {
    /// Whether the subscription allows studying content at `level`.
    pub fn can_access(&self, level: Level) -> bool {
        level.get() <= self.subscription.max_level_granted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Matches `PronunciationMetadata::voice_actor_id`.
    pub default_voice_actor_id: u64,
    pub extra_study_autoplay_audio: bool,
    pub lessons_autoplay_audio: bool,
    pub lessons_batch_size: u32,
    pub lessons_presentation_order: LessonsPresentationOrder,
    pub reviews_autoplay_audio: bool,
    pub reviews_display_srs_indicator: bool,
    pub reviews_presentation_order: ReviewsPresentationOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonsPresentationOrder {
    AscendingLevelThenSubject,
    Shuffled,
    AscendingLevelThenShuffled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewsPresentationOrder {
    Shuffled,
    LowerLevelsFirst,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub active: bool,
    /// Highest level available for lessons and reviews: 3 for free accounts, 60 otherwise.
    pub max_level_granted: u8,
    /// `None` for free and lifetime subscriptions.
    pub period_ends_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: SubscriptionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionType {
    Free,
    Recurring,
    Lifetime,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SrsStage, SubjectType};
use crate::schema::ResourceData;

/// A user's progress on a single subject.
///
/// The server guarantees `unlocked_at <= started_at <= passed_at <= burned_at` for the
/// milestones that are set; the client takes the timestamps as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// When the subject enters the review queue.
    pub available_at: Option<DateTime<Utc>>,
    /// When the assignment first reached SRS stage 9.
    pub burned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Hidden subjects no longer appear in lessons or reviews.
    pub hidden: bool,
    /// When the assignment first reached SRS stage 5.
    pub passed_at: Option<DateTime<Utc>>,
    pub resurrected_at: Option<DateTime<Utc>>,
    pub srs_stage: SrsStage,
    /// When the lesson for the subject was completed.
    pub started_at: Option<DateTime<Utc>>,
    pub subject_id: u64,
    pub subject_type: SubjectType,
    /// When the subject's prerequisites were met and it became available for lessons.
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl ResourceData for Assignment {
    const OBJECT: &'static str = "assignment";
}

impl Assignment {
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_available_for_review(&self, now: DateTime<Utc>) -> bool {
        self.available_at.is_some_and(|available_at| available_at <= now)
    }
}

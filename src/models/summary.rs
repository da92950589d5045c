use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::ResourceData;

/// Lessons available now and reviews for the next 24 hours, bucketed by hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub lessons: Vec<SummaryEntry>,
    /// `None` when the user has no reviews scheduled.
    pub next_reviews_at: Option<DateTime<Utc>>,
    pub reviews: Vec<SummaryEntry>,
}

impl ResourceData for Summary {
    const OBJECT: &'static str = "report";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Always the top of an hour.
    pub available_at: DateTime<Utc>,
    pub subject_ids: Vec<u64>,
}

impl Summary {
    pub fn lessons_available(&self, now: DateTime<Utc>) -> usize {
        count_available(&self.lessons, now)
    }

    pub fn reviews_available(&self, now: DateTime<Utc>) -> usize {
        count_available(&self.reviews, now)
    }
}

fn count_available(entries: &[SummaryEntry], now: DateTime<Utc>) -> usize {
    entries
        .iter()
        .filter(|entry| entry.available_at <= now)
        .map(|entry| entry.subject_ids.len())
        .sum()
}

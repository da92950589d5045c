use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::models::{Assignment, SubjectType};
use crate::query::{Filters, Query};
use crate::schema::{decode_collection, decode_resource, Collection, Resource};
use crate::wanikani::WaniKaniAPIClient;

/// Filters for [`AssignmentsApi::get_all`]. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentFilters {
    pub available_after: Option<DateTime<Utc>>,
    pub available_before: Option<DateTime<Utc>>,
    /// `true` for assignments with `burned_at` set, `false` for those without.
    pub burned: Option<bool>,
    pub hidden: Option<bool>,
    pub ids: Option<Vec<u64>>,
    pub immediately_available_for_lessons: Option<bool>,
    pub immediately_available_for_review: Option<bool>,
    pub in_review: Option<bool>,
    /// Subject levels, `1` to `60`.
    pub levels: Option<Vec<u8>>,
    /// SRS stages, `0` to `9`.
    pub srs_stages: Option<Vec<u8>>,
    pub started: Option<bool>,
    pub subject_ids: Option<Vec<u64>>,
    pub subject_types: Option<Vec<SubjectType>>,
    pub unlocked: Option<bool>,
    pub updated_after: Option<DateTime<Utc>>,
}

impl Filters for AssignmentFilters {
    fn to_query(&self) -> Query {
        Query::new()
            .time("available_after", self.available_after)
            .time("available_before", self.available_before)
            .flag("burned", self.burned)
            .flag("hidden", self.hidden)
            .list("ids", self.ids.as_deref())
            .flag(
                "immediately_available_for_lessons",
                self.immediately_available_for_lessons,
            )
            .flag(
                "immediately_available_for_review",
                self.immediately_available_for_review,
            )
            .flag("in_review", self.in_review)
            .list("levels", self.levels.as_deref())
            .list("srs_stages", self.srs_stages.as_deref())
            .flag("started", self.started)
            .list("subject_ids", self.subject_ids.as_deref())
            .list("subject_types", self.subject_types.as_deref())
            .flag("unlocked", self.unlocked)
            .time("updated_after", self.updated_after)
    }
}

#[derive(Clone, Copy)]
pub struct AssignmentsApi<'a> {
    client: &'a WaniKaniAPIClient,
}

impl<'a> AssignmentsApi<'a> {
    pub(crate) fn new(client: &'a WaniKaniAPIClient) -> Self {
        Self { client }
    }

    /// Returns one page of assignments, ordered by ascending `created_at`, 500 at a time.
    pub async fn get_all(
        self,
        filters: &AssignmentFilters,
    ) -> Result<Collection<Resource<Assignment>>> {
        let body = self.client.get("assignments", &filters.to_query()).await?;

        Ok(decode_collection(&body)?)
    }

    /// Fetches the page after `page`, or `None` if it was the last one.
    pub async fn next_page(
        self,
        page: &Collection<Resource<Assignment>>,
    ) -> Result<Option<Collection<Resource<Assignment>>>> {
        let Some(next_url) = &page.pages.next_url else {
            return Ok(None);
        };
        let body = self.client.get_url(next_url).await?;

        Ok(Some(decode_collection(&body)?))
    }

    pub async fn get(self, id: u64) -> Result<Resource<Assignment>> {
        let body = self
            .client
            .get(&format!("assignments/{id}"), &Query::new())
            .await?;

        Ok(decode_resource(&body)?)
    }

    /// Moves the assignment from the lessons queue to the review queue and returns the
    /// updated assignment. `started_at` defaults to the time of the request on the server.
    pub async fn start(
        self,
        id: u64,
        started_at: Option<DateTime<Utc>>,
    ) -> Result<Resource<Assignment>> {
        let body = started_at.map(|started_at| json!({"assignment": {"started_at": started_at}}));
        let resp = self
            .client
            .put(&format!("assignments/{id}/start"), body.as_ref())
            .await?;
        let assignment = decode_resource::<Assignment>(&resp)?;
        info!(id, subject_id = assignment.data.subject_id, "started assignment");

        Ok(assignment)
    }
}

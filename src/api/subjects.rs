use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{decode_subject, decode_subject_collection, Subject, SubjectType};
use crate::query::{Filters, Query};
use crate::schema::Collection;
use crate::wanikani::WaniKaniAPIClient;

/// Filters for [`SubjectsApi::get_all`]. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectFilters {
    pub ids: Option<Vec<u64>>,
    pub types: Option<Vec<SubjectType>>,
    pub slugs: Option<Vec<String>>,
    /// Subject levels, `1` to `60`.
    pub levels: Option<Vec<u8>>,
    pub hidden: Option<bool>,
    pub updated_after: Option<DateTime<Utc>>,
}

impl Filters for SubjectFilters {
    fn to_query(&self) -> Query {
        Query::new()
            .list("ids", self.ids.as_deref())
            .list("types", self.types.as_deref())
            .list("slugs", self.slugs.as_deref())
            .list("levels", self.levels.as_deref())
            .flag("hidden", self.hidden)
            .time("updated_after", self.updated_after)
    }
}

#[derive(Clone, Copy)]
pub struct SubjectsApi<'a> {
    client: &'a WaniKaniAPIClient,
}

impl<'a> SubjectsApi<'a> {
    pub(crate) fn new(client: &'a WaniKaniAPIClient) -> Self {
        Self { client }
    }

    /// Returns one page of subjects, ordered by ascending `created_at`, 1000 at a time.
    pub async fn get_all(self, filters: &SubjectFilters) -> Result<Collection<Subject>> {
        let body = self.client.get("subjects", &filters.to_query()).await?;

        Ok(decode_subject_collection(&body)?)
    }

    /// Fetches the page after `page`, or `None` if it was the last one.
    pub async fn next_page(
        self,
        page: &Collection<Subject>,
    ) -> Result<Option<Collection<Subject>>> {
        let Some(next_url) = &page.pages.next_url else {
            return Ok(None);
        };
        let body = self.client.get_url(next_url).await?;

        Ok(Some(decode_subject_collection(&body)?))
    }

    /// Retrieves a subject; the payload shape depends on its kind.
    pub async fn get(self, id: u64) -> Result<Subject> {
        let body = self
            .client
            .get(&format!("subjects/{id}"), &Query::new())
            .await?;

        Ok(decode_subject(&body)?)
    }
}

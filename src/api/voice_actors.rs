use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::VoiceActor;
use crate::query::{Filters, Query};
use crate::schema::{decode_collection, decode_resource, Collection, Resource};
use crate::wanikani::WaniKaniAPIClient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceActorFilters {
    pub ids: Option<Vec<u64>>,
    pub updated_after: Option<DateTime<Utc>>,
}

impl Filters for VoiceActorFilters {
    fn to_query(&self) -> Query {
        Query::new()
            .list("ids", self.ids.as_deref())
            .time("updated_after", self.updated_after)
    }
}

#[derive(Clone, Copy)]
pub struct VoiceActorsApi<'a> {
    client: &'a WaniKaniAPIClient,
}

impl<'a> VoiceActorsApi<'a> {
    pub(crate) fn new(client: &'a WaniKaniAPIClient) -> Self {
        Self { client }
    }

    /// Returns one page of voice actors, ordered by ascending `created_at`, 500 at a time.
    pub async fn get_all(
        self,
        filters: &VoiceActorFilters,
    ) -> Result<Collection<Resource<VoiceActor>>> {
        let body = self.client.get("voice_actors", &filters.to_query()).await?;

        Ok(decode_collection(&body)?)
    }

    pub async fn next_page(
        self,
        page: &Collection<Resource<VoiceActor>>,
    ) -> Result<Option<Collection<Resource<VoiceActor>>>> {
        let Some(next_url) = &page.pages.next_url else {
            return Ok(None);
        };
        let body = self.client.get_url(next_url).await?;

        Ok(Some(decode_collection(&body)?))
    }

    pub async fn get(self, id: u64) -> Result<Resource<VoiceActor>> {
        let body = self
            .client
            .get(&format!("voice_actors/{id}"), &Query::new())
            .await?;

        Ok(decode_resource(&body)?)
    }
}
